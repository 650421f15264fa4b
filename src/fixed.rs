use core::cmp;

use crate::error::{Error, ensure_finite};
use crate::types::VisibleRange;

/// Smallest item size a calculator will work with. Non-positive sizes are clamped up to this so
/// every division stays finite and every range stays valid.
pub(crate) const MIN_ITEM_SIZE: f64 = 1.0;

/// Floor of a non-negative finite ratio, as an index. Equivalent to `f64::floor` for the
/// values the calculators produce, but built on the saturating cast so it stays available
/// without `std`; absurdly large offsets clamp to `usize::MAX` instead of wrapping.
pub(crate) fn floor_index(value: f64) -> usize {
    value as usize
}

/// Ceiling counterpart of [`floor_index`]: truncate, then bump if a fraction was dropped.
pub(crate) fn ceil_index(value: f64) -> usize {
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}

/// Result of a fixed-size window computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWindow {
    /// Items to materialize, overscan included. `None` when the collection is empty.
    pub range: Option<VisibleRange>,
    /// `item_count * item_size`.
    pub total_size: f64,
    item_size: f64,
}

impl FixedWindow {
    /// Scroll-axis offset of the item at `index` (`index * item_size`).
    pub fn offset(&self, index: usize) -> f64 {
        index as f64 * self.item_size
    }

    /// The (clamped) per-item size this window was computed with.
    pub fn item_size(&self) -> f64 {
        self.item_size
    }
}

/// Maps a scroll offset to a visible index range when every item has one known, constant size.
///
/// Pure and total for all finite inputs: a negative `scroll_offset` or `container_size` clamps
/// to zero, a non-positive `item_size` clamps to [`MIN_ITEM_SIZE`]. Non-finite inputs are the
/// one rejection ([`Error::NonFinite`]), since no clamp gives a meaningful answer for NaN.
pub fn compute_fixed_range(
    scroll_offset: f64,
    container_size: f64,
    item_size: f64,
    item_count: usize,
    overscan: usize,
) -> Result<FixedWindow, Error> {
    let scroll_offset = ensure_finite("scroll_offset", scroll_offset)?.max(0.0);
    let container_size = ensure_finite("container_size", container_size)?.max(0.0);
    let item_size = ensure_finite("item_size", item_size)?.max(MIN_ITEM_SIZE);

    if item_count == 0 {
        return Ok(FixedWindow {
            range: None,
            total_size: 0.0,
            item_size,
        });
    }

    let first = floor_index(scroll_offset / item_size);
    let last = ceil_index((scroll_offset + container_size) / item_size);

    let start_index = cmp::min(first.saturating_sub(overscan), item_count - 1);
    let end_index = cmp::min(last.saturating_add(overscan), item_count - 1);

    Ok(FixedWindow {
        range: Some(VisibleRange {
            start_index,
            end_index,
        }),
        total_size: item_count as f64 * item_size,
        item_size,
    })
}
