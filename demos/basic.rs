// Example: fixed-size windowing over a million-row list.
use viewslice::compute_fixed_range;

fn main() {
    let window = compute_fixed_range(123_456.0, 600.0, 24.0, 1_000_000, 3).expect("finite inputs");

    println!("total_size={}", window.total_size);
    println!("range={:?}", window.range);
    if let Some(range) = window.range {
        println!(
            "materialize {} items, first at offset {}",
            range.len(),
            window.offset(range.start_index)
        );
    }
}
