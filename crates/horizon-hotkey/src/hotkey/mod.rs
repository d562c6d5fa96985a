//! Hotkey capture logic, independent of any widget.
//!
//! - [`normalize`]: raw key identifier to canonical [`KeyToken`]
//! - [`CombinationMachine`]: the capture state machine over a [`PressedKeys`] set
//! - [`order`] / [`label`]: deterministic display order and badge labels
//! - [`Shortcut`]: the `+`-delimited shortcut string, strictly parsed
//! - [`CapturePolicy`]: the behavioral choices a capture is configured with

mod combination;
mod labels;
mod ordering;
mod policy;
mod shortcut;
mod token;

pub use combination::{CaptureState, CombinationMachine, PressedKeys, Transition};
pub use labels::{SEPARATOR, has_label, label};
pub use ordering::{compare, order, sort_tokens};
pub use policy::{CapturePolicy, DefaultHandling, EnterBehavior, OrderingPolicy};
pub use shortcut::{DELIMITER, Shortcut, join_tokens, parse_lenient};
pub use token::{KeyToken, names, normalize, raw};
