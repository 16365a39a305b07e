use approx::assert_relative_eq;
use meshalign::{counts_from_cell_sizes, grid_quality, poisson_counts, Block};

#[test]
fn cubic_cells_have_unit_aspect_ratio() {
    let block = Block::new([10, 10, 10], [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    let quality = grid_quality(&block);

    assert_eq!(quality.aspect_ratio, 1.0);
    assert!(quality.has_poisson_counts);
    assert_eq!(quality.cell_count, 1000);
    assert_eq!(quality.cell_sizes, [0.1, 0.1, 0.1]);
}

#[test]
fn aspect_ratio_is_max_pairwise_ratio_of_sorted_sizes() {
    let block = Block::new([7, 11, 13], [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    let quality = grid_quality(&block);

    // Largest over smallest cell size: (1/7) / (1/13).
    assert_relative_eq!(quality.aspect_ratio, 13.0 / 7.0, max_relative = 1e-12);
    assert_eq!(quality.cell_count, 1001);
    assert!(!quality.has_poisson_counts);
}

#[test]
fn first_axis_count_is_exempt_from_the_poisson_check() {
    // 7 is not Poisson-admissible, but only y and z counts are checked.
    let block = Block::new([7, 12, 15], [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    assert!(grid_quality(&block).has_poisson_counts);

    let block = Block::new([12, 7, 15], [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    assert!(!grid_quality(&block).has_poisson_counts);
}

#[test]
fn degenerate_cells_get_the_sentinel_aspect_ratio() {
    // Zero-length x extent; a quality metric, not an error.
    let block = Block::new([10, 10, 10], [0.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
    assert_eq!(grid_quality(&block).aspect_ratio, 999.0);
}

#[test]
fn poisson_counts_adjusts_y_and_z_only() {
    assert_eq!(poisson_counts([7, 11, 13]), [7, 12, 15]);
    assert_eq!(poisson_counts([4, 9, 25]), [4, 9, 25]);
    assert_eq!(poisson_counts([1, 1, 1]), [1, 1, 1]);
}

#[test]
fn counts_from_cell_sizes_rounds_and_floors_at_one() {
    let bounds = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];

    let counts = counts_from_cell_sizes(bounds, [0.3, 0.3, 0.3], false);
    assert_eq!(counts, [3, 3, 3]);

    // Desired size larger than the block still yields one cell per axis.
    let counts = counts_from_cell_sizes(bounds, [10.0, 10.0, 10.0], false);
    assert_eq!(counts, [1, 1, 1]);
}

#[test]
fn counts_from_cell_sizes_applies_poisson_on_all_axes() {
    let bounds = [0.0, 10.0, 0.0, 10.0, 0.0, 10.0];

    // round(10 / 1.43) = 7 on each axis, lifted to 8 everywhere; the
    // sizing helper does not exempt the first axis the way alignment does.
    let counts = counts_from_cell_sizes(bounds, [1.43, 1.43, 1.43], true);
    assert_eq!(counts, [8, 8, 8]);

    let counts = counts_from_cell_sizes(bounds, [1.43, 1.43, 1.43], false);
    assert_eq!(counts, [7, 7, 7]);
}
