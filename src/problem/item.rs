//! Candidate item: a utility and a per-dimension cost vector.

use std::fmt;

/// An immutable candidate item.
///
/// The cost vector has one entry per instance dimension; its length is
/// checked when the item enters an [`Instance`](super::Instance). The
/// optional label is diagnostic only and never takes part in solver logic.
///
/// # Examples
///
/// ```
/// use mkp_heur::problem::Item;
///
/// let item = Item::new(10, vec![4, 3]).with_label("road repair");
/// assert_eq!(item.utility(), 10);
/// assert_eq!(item.costs(), &[4, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    utility: u32,
    costs: Vec<u32>,
    label: Option<String>,
}

impl Item {
    /// Creates an item from its utility and cost vector.
    pub fn new(utility: u32, costs: Vec<u32>) -> Self {
        Self {
            utility,
            costs,
            label: None,
        }
    }

    /// Attaches a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the item's utility.
    pub fn utility(&self) -> u32 {
        self.utility
    }

    /// Returns the item's per-dimension costs.
    pub fn costs(&self) -> &[u32] {
        &self.costs
    }

    /// Returns the display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(
                f,
                "{label} (utility={}, costs={:?})",
                self.utility, self.costs
            ),
            None => write!(f, "item (utility={}, costs={:?})", self.utility, self.costs),
        }
    }
}
