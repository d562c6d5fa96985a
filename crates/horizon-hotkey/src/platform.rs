//! Host platform detection.
//!
//! Both key normalization and labeling depend on whether the host is
//! "Mac-like": the Meta key is captured as `command` there, Alt as `option`,
//! and modifiers are labeled with their Apple glyphs.
//!
//! The platform cannot change while a process runs, so [`Platform::current`]
//! is computed once and memoized. Widgets take the platform as a parameter
//! (defaulting to the current one), which lets tests simulate either family
//! deterministically.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The host platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS (and other Apple desktop hosts).
    Mac,
    /// Microsoft Windows.
    Windows,
    /// Linux and BSD desktops.
    Linux,
    /// Anything else.
    Other,
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        static CURRENT: OnceLock<Platform> = OnceLock::new();
        *CURRENT.get_or_init(Self::detect)
    }

    fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd"
        )) {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Classify a host-reported platform string such as `"MacIntel"`,
    /// `"Win32"` or `"Linux x86_64"`.
    pub fn from_platform_string(platform: &str) -> Self {
        if platform.contains("Mac") {
            Self::Mac
        } else if platform.contains("Win") {
            Self::Windows
        } else if platform.contains("Linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether modifier keys should be captured and shown the Apple way.
    pub fn is_mac_like(self) -> bool {
        matches!(self, Self::Mac)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mac => "Mac",
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}
