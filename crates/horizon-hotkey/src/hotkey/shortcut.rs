//! Shortcut strings.
//!
//! A shortcut string is the externally observable form of a pressed set: the
//! tokens in display order joined with `+`, e.g. `"ctrl+shift+k"`.
//!
//! Two parsers are provided. [`parse_lenient`] is what the widget uses for the
//! host-supplied default: it never fails, and a missing default is simply an
//! empty set. [`Shortcut::parse`] is strict and reports malformed input, for
//! hosts that want to validate stored settings.

use std::fmt;
use std::str::FromStr;

use horizon_hotkey_core::ShortcutParseError;

use crate::platform::Platform;

use super::labels::label;
use super::ordering::sort_tokens;
use super::policy::OrderingPolicy;
use super::token::{KeyToken, normalize};

/// Delimiter between tokens in a shortcut string.
pub const DELIMITER: char = '+';

/// Join tokens, already in display order, into a shortcut string.
pub fn join_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a KeyToken>,
{
    let mut out = String::new();
    for (index, token) in tokens.into_iter().enumerate() {
        if index > 0 {
            out.push(DELIMITER);
        }
        out.push_str(token.as_str());
    }
    out
}

/// Parse a shortcut string into normalized tokens, never failing.
///
/// Segments are trimmed, empty segments dropped, each segment normalized for
/// `platform` and duplicates removed. `None` parses to no tokens.
pub fn parse_lenient(shortcut: Option<&str>, platform: Platform) -> Vec<KeyToken> {
    let mut tokens: Vec<KeyToken> = Vec::new();
    let Some(shortcut) = shortcut else {
        return tokens;
    };
    for segment in shortcut.split(DELIMITER).map(str::trim) {
        if segment.is_empty() {
            continue;
        }
        let token = normalize(segment, platform);
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// A validated keyboard shortcut: unique tokens in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    tokens: Vec<KeyToken>,
}

impl Shortcut {
    /// Build a shortcut from tokens, sorting them with `ordering` and
    /// dropping duplicates.
    pub fn from_tokens<I>(tokens: I, ordering: OrderingPolicy) -> Self
    where
        I: IntoIterator<Item = KeyToken>,
    {
        let mut unique: Vec<KeyToken> = Vec::new();
        for token in tokens {
            if !unique.contains(&token) {
                unique.push(token);
            }
        }
        sort_tokens(&mut unique, ordering);
        Self { tokens: unique }
    }

    /// Strictly parse a shortcut string.
    ///
    /// Fails on an empty string, an empty segment, a repeated key or more
    /// than one plain character key.
    ///
    /// ```
    /// use horizon_hotkey::hotkey::{OrderingPolicy, Shortcut};
    /// use horizon_hotkey::Platform;
    ///
    /// let shortcut = Shortcut::parse("K+Control", Platform::Linux, OrderingPolicy::KnownFirst).unwrap();
    /// assert_eq!(shortcut.to_string(), "ctrl+k");
    ///
    /// assert!(Shortcut::parse("ctrl++k", Platform::Linux, OrderingPolicy::KnownFirst).is_err());
    /// ```
    pub fn parse(
        shortcut: &str,
        platform: Platform,
        ordering: OrderingPolicy,
    ) -> Result<Self, ShortcutParseError> {
        if shortcut.trim().is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut tokens: Vec<KeyToken> = Vec::new();
        let mut main_key: Option<KeyToken> = None;

        for (position, segment) in shortcut.split(DELIMITER).map(str::trim).enumerate() {
            if segment.is_empty() {
                return Err(ShortcutParseError::EmptySegment { position });
            }
            let token = normalize(segment, platform);
            if tokens.contains(&token) {
                return Err(ShortcutParseError::DuplicateKey(token.to_string()));
            }
            if token.is_plain_char() {
                if let Some(first) = &main_key {
                    return Err(ShortcutParseError::MultipleMainKeys {
                        first: first.to_string(),
                        second: token.to_string(),
                    });
                }
                main_key = Some(token.clone());
            }
            tokens.push(token);
        }

        Ok(Self::from_tokens(tokens, ordering))
    }

    /// The tokens in display order.
    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    /// Whether the shortcut has no keys.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// The modifier tokens, in display order.
    pub fn modifiers(&self) -> impl Iterator<Item = &KeyToken> {
        self.tokens.iter().filter(|t| t.is_modifier())
    }

    /// The first non-modifier token, if any.
    pub fn main_key(&self) -> Option<&KeyToken> {
        self.tokens.iter().find(|t| !t.is_modifier())
    }

    /// Badge labels for each token, in display order.
    pub fn labels(&self, platform: Platform) -> Vec<&str> {
        self.tokens.iter().map(|t| label(t, platform)).collect()
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tokens(&self.tokens))
    }
}

impl FromStr for Shortcut {
    type Err = ShortcutParseError;

    /// Parse for the current platform with the default ordering.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Platform::current(), OrderingPolicy::default())
    }
}
