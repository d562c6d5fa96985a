//! The retained view tree a hotkey widget presents to its host.
//!
//! [`HotkeyEdit::view`](super::widgets::HotkeyEdit::view) rebuilds a small
//! tree of [`ViewNode`]s from the widget's state. Each node names the
//! [`Region`] it represents and carries the class string the host styles it
//! with; leaf nodes carry text.
//!
//! ```text
//! Wrapper
//! ├── BadgeGroup
//! │   ├── Group
//! │   │   ├── Badge("ctrl")
//! │   │   └── Separator("+")
//! │   └── Group
//! │       └── Badge("k")
//! ├── EditedIcon
//! └── HiddenInput("ctrl+k")
//! ```

use std::fmt;

/// The region of the widget a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The clickable root.
    Wrapper,
    /// Hint text shown while no keys are held.
    Placeholder,
    /// The row of key badges.
    BadgeGroup,
    /// One badge plus its trailing separator.
    Group,
    /// A single key label.
    Badge,
    /// The `+` between adjacent badges.
    Separator,
    /// Marker shown while the value differs from what the host saved.
    EditedIcon,
    /// Blinking insertion mark.
    Caret,
    /// Message shown for an invalid combination.
    ErrorMessage,
    /// Message shown while changes are unsaved.
    UnsavedMessage,
    /// The zero-size focus holder; its text is the shortcut string.
    HiddenInput,
    /// A host-defined node, as produced by a custom edited icon renderer.
    Custom,
}

/// A node in the widget's view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    /// The region this node represents.
    pub region: Region,
    /// Style class.
    pub class: String,
    /// Text content, for leaf nodes.
    pub text: Option<String>,
    /// Child nodes in display order.
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create an empty node.
    pub fn new(region: Region, class: impl Into<String>) -> Self {
        Self {
            region,
            class: class.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder: set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append several children.
    pub fn with_children<I: IntoIterator<Item = ViewNode>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    /// The first node in depth-first order with the given region.
    pub fn find(&self, region: Region) -> Option<&ViewNode> {
        if self.region == region {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(region))
    }

    /// Every node in depth-first order with the given region.
    pub fn find_all(&self, region: Region) -> Vec<&ViewNode> {
        let mut found = Vec::new();
        self.collect(region, &mut found);
        found
    }

    fn collect<'a>(&'a self, region: Region, found: &mut Vec<&'a ViewNode>) {
        if self.region == region {
            found.push(self);
        }
        for child in &self.children {
            child.collect(region, found);
        }
    }

    /// Whether a node with the given region exists in this subtree.
    pub fn contains(&self, region: Region) -> bool {
        self.find(region).is_some()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{:?}", "", self.region, indent = depth * 2)?;
        if !self.class.is_empty() {
            write!(f, ".{}", self.class)?;
        }
        if let Some(text) = &self.text {
            write!(f, " {text:?}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

/// A snapshot of a hotkey widget's presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyView {
    root: ViewNode,
}

impl HotkeyView {
    pub(crate) fn new(root: ViewNode) -> Self {
        Self { root }
    }

    /// The root `Wrapper` node.
    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// Badge labels in display order.
    pub fn badge_labels(&self) -> Vec<&str> {
        self.root
            .find_all(Region::Badge)
            .into_iter()
            .filter_map(|n| n.text.as_deref())
            .collect()
    }

    /// The number of `+` separators rendered.
    pub fn separator_count(&self) -> usize {
        self.root.find_all(Region::Separator).len()
    }

    /// The placeholder text, if shown.
    pub fn placeholder(&self) -> Option<&str> {
        self.text_of(Region::Placeholder)
    }

    /// Whether the caret is shown.
    pub fn has_caret(&self) -> bool {
        self.root.contains(Region::Caret)
    }

    /// Whether the edited icon is shown.
    pub fn has_edited_icon(&self) -> bool {
        self.root.contains(Region::EditedIcon) || self.root.contains(Region::Custom)
    }

    /// The error message, if shown.
    pub fn error_message(&self) -> Option<&str> {
        self.text_of(Region::ErrorMessage)
    }

    /// The unsaved-changes message, if shown.
    pub fn unsaved_message(&self) -> Option<&str> {
        self.text_of(Region::UnsavedMessage)
    }

    /// The hidden input's value.
    pub fn input_value(&self) -> &str {
        self.text_of(Region::HiddenInput).unwrap_or_default()
    }

    fn text_of(&self, region: Region) -> Option<&str> {
        self.root.find(region).and_then(|n| n.text.as_deref())
    }
}

impl fmt::Display for HotkeyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
