// Example: two-dimensional windowing over a fixed-column grid.
use viewslice::compute_grid_range;

fn main() {
    let grid = compute_grid_range(1_250.0, 980.0, 720.0, 220.0, 180.0, 16.0, 50_000, 1)
        .expect("finite inputs");

    println!(
        "columns_per_row={} total_rows={} total_size={}",
        grid.columns_per_row,
        grid.total_rows,
        grid.total_size()
    );
    println!("range={:?}", grid.range);

    if let Some(range) = grid.range {
        let p = grid.placement(range.start_index);
        println!(
            "first item {} at row={} col={} left={} top={}",
            range.start_index, p.row, p.col, p.left, p.top
        );
    }
}
