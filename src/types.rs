/// The visible scrollable area's current offset and size along the scroll axis.
///
/// One engine instance exclusively owns one viewport; there is no cross-instance sharing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_offset: f64,
    pub container_size: f64,
}

/// An inclusive `[start_index, end_index]` pair describing which items must be materialized.
///
/// Invariant: `start_index <= end_index`, both within `[0, item_count - 1]`. The empty case
/// (zero items) is represented as `Option::<VisibleRange>::None` by every calculator, so a
/// `VisibleRange` always names at least one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleRange {
    /// Number of items in the range (always at least 1).
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }

    /// Iterates the indexes in the range, ascending.
    pub fn indexes(&self) -> impl Iterator<Item = usize> + use<> {
        self.start_index..=self.end_index
    }
}

/// Where a grid item lands inside the scroll area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub row: usize,
    pub col: usize,
    /// Cross-axis offset from the left edge of the grid.
    pub left: f64,
    /// Scroll-axis offset from the top of the grid.
    pub top: f64,
}
