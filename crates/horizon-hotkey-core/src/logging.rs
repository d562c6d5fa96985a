//! Logging facilities for Horizon Hotkey.
//!
//! Horizon Hotkey uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_hotkey::capture=debug")
//!         .init();
//! }
//! ```
//!
//! Capture transitions log at `debug`, signal emission and ignored events at
//! `trace`.

/// Span names used throughout Horizon Hotkey for tracing.
pub mod span_names {
    /// Span wrapping the handling of one widget event.
    pub const EVENT: &str = "horizon_hotkey::event";
    /// Span wrapping a view rebuild.
    pub const VIEW: &str = "horizon_hotkey::view";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_hotkey_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_hotkey_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "horizon_hotkey_core::property";
    /// Capture state machine transitions.
    pub const CAPTURE: &str = "horizon_hotkey::capture";
    /// Raw key normalization.
    pub const NORMALIZE: &str = "horizon_hotkey::normalize";
    /// Presentation surface.
    pub const VIEW: &str = "horizon_hotkey::view";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_hotkey::config";
}

/// Build an env-filter directive enabling `level` for every Horizon Hotkey target.
///
/// ```
/// use horizon_hotkey_core::logging::filter_directive;
///
/// assert_eq!(
///     filter_directive("debug"),
///     "horizon_hotkey_core=debug,horizon_hotkey=debug"
/// );
/// ```
pub fn filter_directive(level: &str) -> String {
    format!("{}={level},horizon_hotkey={level}", targets::CORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_prefix() {
        for target in [targets::CAPTURE, targets::NORMALIZE, targets::VIEW, targets::CONFIG] {
            assert!(target.starts_with("horizon_hotkey::"));
        }
        for target in [targets::SIGNAL, targets::PROPERTY] {
            assert!(target.starts_with(targets::CORE));
        }
    }

    #[test]
    fn test_filter_directive_parses() {
        let directive = filter_directive("trace");
        let filter = tracing_subscriber::EnvFilter::try_new(&directive);
        assert!(filter.is_ok());
    }
}
