//! Deterministic display order for pressed keys.
//!
//! The order never depends on the order keys were pressed in; it is a pure
//! function of the set's content, so re-rendering an equal set always yields
//! the same badges.

use std::cmp::Ordering;

use super::labels::has_label;
use super::policy::OrderingPolicy;
use super::token::{KeyToken, names};

/// Rank under [`OrderingPolicy::KnownFirst`]: labeled keys, then letters,
/// then everything else.
fn known_first_rank(token: &KeyToken) -> u8 {
    if has_label(token) {
        0
    } else if token.is_letter() {
        1
    } else {
        2
    }
}

/// Rank under [`OrderingPolicy::ModifierPriority`].
fn modifier_priority_rank(token: &KeyToken) -> u8 {
    match token.as_str() {
        names::CTRL => 0,
        names::SHIFT => 1,
        names::ALT | names::OPTION => 2,
        _ => 3,
    }
}

/// Compare two tokens under the given policy.
///
/// This is a total order: equal results only for equal tokens.
pub fn compare(a: &KeyToken, b: &KeyToken, policy: OrderingPolicy) -> Ordering {
    let rank = match policy {
        OrderingPolicy::KnownFirst => known_first_rank,
        OrderingPolicy::ModifierPriority => modifier_priority_rank,
    };
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.as_str().cmp(b.as_str()))
}

/// Sort tokens into display order in place.
pub fn sort_tokens(tokens: &mut [KeyToken], policy: OrderingPolicy) {
    tokens.sort_by(|a, b| compare(a, b, policy));
}

/// Return the tokens in display order.
///
/// ```
/// use horizon_hotkey::hotkey::{order, KeyToken, OrderingPolicy};
///
/// let keys = [KeyToken::new("k"), KeyToken::new("shift"), KeyToken::new("ctrl")];
/// let ordered: Vec<_> = order(&keys, OrderingPolicy::KnownFirst)
///     .into_iter()
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(ordered, ["ctrl", "shift", "k"]);
/// ```
pub fn order<'a, I>(tokens: I, policy: OrderingPolicy) -> Vec<KeyToken>
where
    I: IntoIterator<Item = &'a KeyToken>,
{
    let mut ordered: Vec<KeyToken> = tokens.into_iter().cloned().collect();
    sort_tokens(&mut ordered, policy);
    ordered
}
