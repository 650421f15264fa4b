use alloc::sync::Arc;
use core::cell::Cell;

use crate::resolver::resolve_dynamic_range;
use crate::table::PositionTable;
use crate::types::{Viewport, VisibleRange};

/// A callback fired after every effective engine state change.
pub type OnChangeCallback = Arc<dyn Fn(&Engine) + Send + Sync>;

#[derive(Clone, Copy)]
struct CachedRange {
    version: u64,
    range: Option<VisibleRange>,
}

/// Stateful owner of one viewport and one [`PositionTable`].
///
/// The engine is the single writer for its viewport state; scroll events, resizes, and
/// measurement callbacks all funnel through its setters on one logical thread. Setters are
/// no-ops when the value is unchanged, so an `on_change` callback that drives rendering never
/// fires redundantly.
///
/// Range computation is memoized behind a version counter: the counter bumps whenever any of
/// scroll offset, container size, overscan, item count, or a stored size changes, and
/// [`range`](Self::range) recomputes only when the counter moved since the last call.
#[derive(Clone)]
pub struct Engine {
    viewport: Viewport,
    overscan: usize,
    table: PositionTable,
    version: u64,
    cached: Cell<Option<CachedRange>>,
    on_change: Option<OnChangeCallback>,
}

impl Engine {
    pub fn new(table: PositionTable) -> Self {
        wdebug!(count = table.count(), "Engine::new");
        Self {
            viewport: Viewport::default(),
            overscan: 1,
            table,
            version: 0,
            cached: Cell::new(None),
            on_change: None,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.set_viewport(viewport);
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_change(mut self, on_change: impl Fn(&Engine) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Engine) + Send + Sync + 'static>) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn table(&self) -> &PositionTable {
        &self.table
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset
    }

    pub fn container_size(&self) -> f64 {
        self.viewport.container_size
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    pub fn total_size(&self) -> f64 {
        self.table.total_size()
    }

    /// Monotonically increasing invalidation counter; bumps on every effective change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies a scroll event. Negative offsets clamp to zero; non-finite offsets are ignored
    /// with a log, since a broken scroll event must not poison the viewport.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        if self.apply_scroll_offset(offset) {
            self.invalidate();
            self.notify();
        }
    }

    /// Applies a resize event. Same input policy as [`Self::set_scroll_offset`].
    pub fn set_container_size(&mut self, size: f64) {
        if self.apply_container_size(size) {
            self.invalidate();
            self.notify();
        }
    }

    /// Applies a resize and a scroll as one frame event: `on_change` fires at most once even
    /// when both fields moved.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let resized = self.apply_container_size(viewport.container_size);
        let scrolled = self.apply_scroll_offset(viewport.scroll_offset);
        if resized || scrolled {
            self.invalidate();
            self.notify();
        }
    }

    fn apply_scroll_offset(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            wwarn!(offset, "set_scroll_offset: non-finite offset ignored");
            return false;
        }
        let offset = offset.max(0.0);
        if self.viewport.scroll_offset == offset {
            return false;
        }
        wtrace!(offset, "set_scroll_offset");
        self.viewport.scroll_offset = offset;
        true
    }

    fn apply_container_size(&mut self, size: f64) -> bool {
        if !size.is_finite() {
            wwarn!(size, "set_container_size: non-finite size ignored");
            return false;
        }
        let size = size.max(0.0);
        if self.viewport.container_size == size {
            return false;
        }
        self.viewport.container_size = size;
        true
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.overscan == overscan {
            return;
        }
        self.overscan = overscan;
        self.invalidate();
        self.notify();
    }

    /// Resizes the collection (see [`PositionTable::set_count`]).
    pub fn set_count(&mut self, count: usize) {
        if self.table.count() == count {
            return;
        }
        self.table.set_count(count);
        self.invalidate();
        self.notify();
    }

    /// Replaces every stored size (see [`PositionTable::bulk_update`]).
    pub fn bulk_update(&mut self, sizes: &[f64]) {
        self.table.bulk_update(sizes);
        self.invalidate();
        self.notify();
    }

    pub fn reset_measurements(&mut self) {
        self.table.reset_measurements();
        self.invalidate();
        self.notify();
    }

    /// Records a measurement. Only an actual size change bumps the version and notifies;
    /// repeats and stale indexes fall through silently (the table logs the latter).
    pub fn measure(&mut self, index: usize, observed_size: f64) {
        if self.table.apply_measure(index, observed_size) {
            self.invalidate();
            self.notify();
        }
    }

    /// Largest scroll offset that still keeps the viewport inside the content.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.table.total_size() - self.viewport.container_size).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        offset.min(self.max_scroll_offset()).max(0.0)
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: f64) {
        if !offset.is_finite() {
            wwarn!(offset, "set_scroll_offset_clamped: non-finite offset ignored");
            return;
        }
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// The current visible range, overscan included; `None` while the collection is empty.
    ///
    /// Memoized: repeated calls between state changes return the cached value.
    pub fn range(&self) -> Option<VisibleRange> {
        if let Some(cached) = self.cached.get() {
            if cached.version == self.version {
                return cached.range;
            }
        }
        let range = match resolve_dynamic_range(
            self.viewport.scroll_offset,
            self.viewport.container_size,
            &self.table,
            self.overscan,
        ) {
            Ok(range) => range,
            // Setters only admit finite viewport values, so this arm is unreachable; an empty
            // window is still the safe answer.
            Err(_) => None,
        };
        self.cached.set(Some(CachedRange {
            version: self.version,
            range,
        }));
        range
    }

    /// Scroll-axis offset of the item at `index` (total size past the end).
    pub fn item_offset(&self, index: usize) -> f64 {
        self.table.offset(index)
    }

    fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }
}

impl core::fmt::Debug for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("viewport", &self.viewport)
            .field("overscan", &self.overscan)
            .field("count", &self.table.count())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
