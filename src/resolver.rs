use crate::error::{Error, ensure_finite};
use crate::table::PositionTable;
use crate::types::VisibleRange;

/// Maps a scroll offset to a visible index range over variable-height items.
///
/// Boundary values are inclusive: an item whose span exactly touches the viewport edge counts
/// as visible. `overscan` extra items are added on each side, clamped to the collection.
///
/// A pending recompute on the table is flushed before the lookup, so the range always reflects
/// every measurement reported so far. Items that have never been rendered still contribute
/// their estimated size; the resulting offsets settle as measurements arrive.
pub fn resolve_dynamic_range(
    scroll_offset: f64,
    container_size: f64,
    table: &PositionTable,
    overscan: usize,
) -> Result<Option<VisibleRange>, Error> {
    let scroll_offset = ensure_finite("scroll_offset", scroll_offset)?.max(0.0);
    let container_size = ensure_finite("container_size", container_size)?.max(0.0);

    let count = table.count();
    if count == 0 {
        return Ok(None);
    }

    let range = table.with_positions(|positions| {
        // positions[i] is the start of item i; positions[i + 1] is its end.
        let scroll_end = scroll_offset + container_size;

        // Smallest i with positions[i] >= scroll_offset.
        let start = positions[..count].partition_point(|&p| p < scroll_offset);
        // Smallest i with positions[i] + size(i) >= scroll_end.
        let end = positions[1..].partition_point(|&p| p < scroll_end);

        let end = end.min(count - 1);
        // When the scroll offset falls strictly inside an item, the start rule lands one past
        // it; keep the pair ordered so the range invariant holds.
        let start = start.min(end);

        VisibleRange {
            start_index: start.saturating_sub(overscan),
            end_index: end.saturating_add(overscan).min(count - 1),
        }
    });

    Ok(Some(range))
}
