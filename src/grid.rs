use core::cmp;

use crate::error::{Error, ensure_finite};
use crate::fixed::{MIN_ITEM_SIZE, ceil_index, floor_index};
use crate::types::{ItemPlacement, VisibleRange};

/// Result of a two-dimensional window computation over a fixed-column grid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWindow {
    /// Items to materialize (whole rows, overscan included). `None` when the grid is empty.
    pub range: Option<VisibleRange>,
    /// Columns that fit in the container width; at least 1.
    pub columns_per_row: usize,
    pub total_rows: usize,
    item_width: f64,
    item_height: f64,
    gap: f64,
    item_count: usize,
}

impl GridWindow {
    /// Row/column and pixel placement for the item at `index`.
    ///
    /// Round-trip: `row * columns_per_row + col == index` for any in-range index.
    pub fn placement(&self, index: usize) -> ItemPlacement {
        let row = index / self.columns_per_row;
        let col = index % self.columns_per_row;
        ItemPlacement {
            row,
            col,
            left: col as f64 * (self.item_width + self.gap),
            top: row as f64 * self.effective_row_size(),
        }
    }

    /// Scroll-axis offset of the given row.
    pub fn row_top(&self, row: usize) -> f64 {
        row as f64 * self.effective_row_size()
    }

    /// Row advance: `item_height + gap`.
    pub fn effective_row_size(&self) -> f64 {
        self.item_height + self.gap
    }

    /// Scroll-axis extent of the grid, without the gap trailing the last row.
    pub fn total_size(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.total_rows as f64 * self.effective_row_size() - self.gap
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

/// Maps a scroll position and container size to a rectangular block of visible indices laid
/// out in a fixed-column grid.
///
/// The window is row-granular: every item of a visible row is included, so the last row of the
/// range may extend past `item_count - 1` and is clamped to it. Same clamping policy as
/// [`crate::compute_fixed_range`]: finite inputs never fail, non-finite inputs are rejected.
#[allow(clippy::too_many_arguments)]
pub fn compute_grid_range(
    scroll_top: f64,
    container_width: f64,
    container_height: f64,
    item_width: f64,
    item_height: f64,
    gap: f64,
    item_count: usize,
    overscan: usize,
) -> Result<GridWindow, Error> {
    let scroll_top = ensure_finite("scroll_top", scroll_top)?.max(0.0);
    let container_width = ensure_finite("container_width", container_width)?.max(0.0);
    let container_height = ensure_finite("container_height", container_height)?.max(0.0);
    let item_width = ensure_finite("item_width", item_width)?.max(MIN_ITEM_SIZE);
    let item_height = ensure_finite("item_height", item_height)?.max(MIN_ITEM_SIZE);
    let gap = ensure_finite("gap", gap)?.max(0.0);

    let columns_per_row = cmp::max(1, floor_index((container_width + gap) / (item_width + gap)));
    let total_rows = item_count.div_ceil(columns_per_row);

    if item_count == 0 {
        return Ok(GridWindow {
            range: None,
            columns_per_row,
            total_rows,
            item_width,
            item_height,
            gap,
            item_count,
        });
    }

    let effective_row_size = item_height + gap;
    let first_row = floor_index(scroll_top / effective_row_size);
    let last_row = ceil_index((scroll_top + container_height) / effective_row_size);

    let start_row = cmp::min(first_row.saturating_sub(overscan), total_rows - 1);
    let end_row = cmp::min(last_row.saturating_add(overscan), total_rows - 1);

    let start_index = start_row * columns_per_row;
    let end_index = cmp::min((end_row + 1) * columns_per_row - 1, item_count - 1);

    Ok(GridWindow {
        range: Some(VisibleRange {
            start_index,
            end_index,
        }),
        columns_per_row,
        total_rows,
        item_width,
        item_height,
        gap,
        item_count,
    })
}
