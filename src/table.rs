use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// Returns the estimated size for the item at a given index, used until that item is measured.
pub type EstimateSize = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Cumulative-offset table for items whose sizes are measured asynchronously.
///
/// Each item carries an estimated size until the host surface reports a measurement (via
/// [`crate::MeasurementFeedback`] or [`PositionTable::update_height`]); the measurement then
/// overrides the estimate. Offsets are prefix sums over the effective sizes:
/// `position[0] == 0`, `position[i + 1] == position[i] + size(i)`, and the final entry equals
/// the total content size.
///
/// Size changes only mark the table dirty; the O(n) recompute runs lazily on the next offset
/// query, so a burst of measurement callbacks within one tick costs a single pass. As items
/// outside the rendered window get measured, total size and downstream offsets shift until
/// every visited item has a real size — that settling is expected behavior, not drift.
#[derive(Clone)]
pub struct PositionTable {
    sizes: Vec<f64>, // effective size: measured override, or the estimate
    measured: Vec<bool>,
    estimate_size: EstimateSize,
    positions: RefCell<Vec<f64>>, // len == sizes.len() + 1
    dirty: Cell<bool>,
}

impl PositionTable {
    /// Creates a table of `count` items sized by `estimate_size` until measured.
    pub fn new(count: usize, estimate_size: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        let estimate_size: EstimateSize = Arc::new(estimate_size);
        let mut sizes = Vec::with_capacity(count);
        for i in 0..count {
            sizes.push(sanitize_size(estimate_size(i)).unwrap_or(0.0));
        }
        wdebug!(count, "PositionTable::new");
        Self {
            sizes,
            measured: alloc::vec![false; count],
            estimate_size,
            positions: RefCell::new(Vec::new()),
            dirty: Cell::new(true),
        }
    }

    /// Creates a table where every item shares one estimated size.
    pub fn uniform(count: usize, estimate: f64) -> Self {
        Self::new(count, move |_| estimate)
    }

    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Effective size of the item at `index` (measured if reported, estimated otherwise).
    pub fn size(&self, index: usize) -> Option<f64> {
        self.sizes.get(index).copied()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    /// Records a new size for the item at `index`.
    ///
    /// A repeat of the stored value is a no-op (no recompute is scheduled), so the host can
    /// report sizes on every render without triggering update loops. Out-of-range indexes and
    /// non-finite sizes are ignored, not fatal: a stale callback for a removed item must never
    /// poison the table.
    pub fn update_height(&mut self, index: usize, new_size: f64) {
        self.apply_measure(index, new_size);
    }

    /// Same as [`Self::update_height`], reporting whether any offset actually moved.
    pub(crate) fn apply_measure(&mut self, index: usize, new_size: f64) -> bool {
        let Some(new_size) = sanitize_size(new_size) else {
            wwarn!(index, new_size, "measurement ignored: non-finite size");
            return false;
        };
        let Some(&cur) = self.sizes.get(index) else {
            wwarn!(
                index,
                count = self.sizes.len(),
                "measurement ignored: index out of range"
            );
            return false;
        };
        self.measured[index] = true;
        if cur == new_size {
            return false;
        }
        wtrace!(index, new_size, "apply_measure");
        self.sizes[index] = new_size;
        self.dirty.set(true);
        true
    }

    /// Replaces the whole table with authoritative per-item sizes (all marked measured).
    ///
    /// The item count becomes `sizes.len()`. This is the one bulk mutation path; everything
    /// else goes through the measurement contract.
    pub fn bulk_update(&mut self, sizes: &[f64]) {
        wdebug!(count = sizes.len(), "bulk_update");
        self.sizes.clear();
        self.sizes.reserve_exact(sizes.len());
        for &size in sizes {
            self.sizes.push(sanitize_size(size).unwrap_or(0.0));
        }
        self.measured.clear();
        self.measured.resize(sizes.len(), true);
        self.dirty.set(true);
    }

    /// Resizes the collection: shrinking truncates, growing appends fresh estimates.
    /// Measurements for surviving indexes are preserved.
    pub fn set_count(&mut self, count: usize) {
        if count == self.sizes.len() {
            return;
        }
        wdebug!(from = self.sizes.len(), to = count, "set_count");
        if count < self.sizes.len() {
            self.sizes.truncate(count);
            self.measured.truncate(count);
        } else {
            for i in self.sizes.len()..count {
                self.sizes
                    .push(sanitize_size((self.estimate_size)(i)).unwrap_or(0.0));
                self.measured.push(false);
            }
        }
        self.dirty.set(true);
    }

    /// Drops every measurement back to the item's estimate.
    pub fn reset_measurements(&mut self) {
        for (i, measured) in self.measured.iter_mut().enumerate() {
            if *measured {
                self.sizes[i] = sanitize_size((self.estimate_size)(i)).unwrap_or(0.0);
                *measured = false;
            }
        }
        self.dirty.set(true);
    }

    /// Scroll-axis offset of the item at `index`.
    ///
    /// O(1) when the table is clean; a pending recompute is flushed first. Queries past the end
    /// return the total content size rather than failing.
    pub fn offset(&self, index: usize) -> f64 {
        self.clean();
        let positions = self.positions.borrow();
        positions[index.min(self.sizes.len())]
    }

    /// Total content size (`position[count]`).
    pub fn total_size(&self) -> f64 {
        self.clean();
        let positions = self.positions.borrow();
        *positions.last().unwrap_or(&0.0)
    }

    /// Forces the prefix-sum recompute now instead of on the next query.
    ///
    /// `position[0] = 0; position[i + 1] = position[i] + size(i)` — O(n), synchronous within
    /// one tick. Hosts that just applied a burst of measurements can call this at a convenient
    /// point in the frame.
    pub fn recompute(&self) {
        self.clean();
    }

    #[cfg(test)]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Runs `f` against the clean position array (`count + 1` entries).
    pub(crate) fn with_positions<R>(&self, f: impl FnOnce(&[f64]) -> R) -> R {
        self.clean();
        f(&self.positions.borrow())
    }

    fn clean(&self) {
        if !self.dirty.replace(false) {
            return;
        }
        let mut positions = self.positions.borrow_mut();
        positions.clear();
        positions.reserve_exact(self.sizes.len() + 1);
        let mut acc = 0.0;
        positions.push(acc);
        for &size in &self.sizes {
            acc += size;
            positions.push(acc);
        }
    }
}

impl core::fmt::Debug for PositionTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositionTable")
            .field("count", &self.sizes.len())
            .field("dirty", &self.dirty.get())
            .finish_non_exhaustive()
    }
}

/// Sizes must be finite and non-negative to keep positions monotonic.
fn sanitize_size(size: f64) -> Option<f64> {
    size.is_finite().then(|| size.max(0.0))
}
