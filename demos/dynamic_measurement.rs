// Example: variable-height items settling as measurements arrive.
use viewslice::{Engine, MeasurementFeedback, PositionTable};

fn main() {
    // Every row starts at the 40-unit estimate until the host measures it after layout.
    let mut engine = Engine::new(PositionTable::uniform(10_000, 40.0)).with_overscan(4);
    engine.set_container_size(480.0);
    engine.set_scroll_offset(2_000.0);

    println!(
        "before: total={} range={:?}",
        engine.total_size(),
        engine.range()
    );

    // The host renders the window, lays the items out, and reports what it saw.
    if let Some(range) = engine.range() {
        for index in range.indexes() {
            let observed = 32.0 + (index % 5) as f64 * 8.0;
            engine.on_measure(index, observed);
        }
    }

    println!(
        "after: total={} range={:?} item_offset(50)={}",
        engine.total_size(),
        engine.range(),
        engine.item_offset(50)
    );

    // Repeating the same measurements is free: nothing changes, nothing recomputes.
    let version = engine.version();
    if let Some(range) = engine.range() {
        for index in range.indexes() {
            let observed = 32.0 + (index % 5) as f64 * 8.0;
            engine.on_measure(index, observed);
        }
    }
    assert_eq!(version, engine.version());
    println!("repeat measurements: version unchanged ({version})");
}
