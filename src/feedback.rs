use crate::engine::Engine;
use crate::table::PositionTable;

/// Sink for post-layout size reports from the host rendering surface.
///
/// After an item has been laid out, the host calls [`on_measure`](Self::on_measure) with the
/// observed size. Contract, shared by every implementor:
///
/// - Calls for an index outside `[0, item_count - 1]` are ignored (stale callback from a
///   removed item) — logged, never fatal.
/// - State is only mutated, and a recompute only scheduled, when the observed size differs
///   from the stored value.
/// - Repeating the same value across renders is idempotent.
///
/// The trait lets hosts hold `&mut dyn MeasurementFeedback` without caring whether they feed a
/// bare [`PositionTable`] or a full [`Engine`].
pub trait MeasurementFeedback {
    fn on_measure(&mut self, index: usize, observed_size: f64);
}

impl MeasurementFeedback for PositionTable {
    fn on_measure(&mut self, index: usize, observed_size: f64) {
        self.update_height(index, observed_size);
    }
}

impl MeasurementFeedback for Engine {
    fn on_measure(&mut self, index: usize, observed_size: f64) {
        self.measure(index, observed_size);
    }
}
