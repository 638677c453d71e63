//! Integration tests for grid geometry.

use chromagrid_paint::GridGeometry;

/// f32 tolerance for sums of cell extents; individual quotients are exact
/// but accumulating them reintroduces rounding.
const EPSILON: f32 = 1e-3;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_single_cell_covers_canvas() {
    let geometry = GridGeometry::new(1, 1, 256.0, 256.0);
    let rect = geometry.cell_rect(0).unwrap();
    assert_close(rect.x, 0.0);
    assert_close(rect.y, 0.0);
    assert_close(rect.width, 256.0);
    assert_close(rect.height, 256.0);
}

#[test]
fn test_row_major_order() {
    let geometry = GridGeometry::new(2, 3, 300.0, 200.0);
    // Index 4 lands in the second row, second column.
    let rect = geometry.cell_rect(4).unwrap();
    assert_close(rect.x, 100.0);
    assert_close(rect.y, 100.0);
    assert_close(rect.width, 100.0);
    assert_close(rect.height, 100.0);
}

#[test]
fn test_index_beyond_capacity_is_none() {
    let geometry = GridGeometry::new(2, 2, 256.0, 256.0);
    assert!(geometry.cell_rect(3).is_some());
    assert!(geometry.cell_rect(4).is_none());
    assert!(geometry.cell_rect(usize::MAX).is_none());
}

#[test]
fn test_cells_tile_the_canvas() {
    // Every row of cells must span the full canvas width and every column
    // the full height, with contiguous offsets: no gaps, no overlaps.
    for rows in [1, 2, 3, 5, 7, 16] {
        for cols in [1, 2, 3, 5, 11, 16] {
            let geometry = GridGeometry::new(rows, cols, 256.0, 256.0);
            for row in 0..rows {
                let mut edge = 0.0f32;
                for col in 0..cols {
                    let rect = geometry.cell_rect(row * cols + col).unwrap();
                    assert_close(rect.x, edge);
                    edge += rect.width;
                }
                assert_close(edge, 256.0);
            }
            for col in 0..cols {
                let mut edge = 0.0f32;
                for row in 0..rows {
                    let rect = geometry.cell_rect(row * cols + col).unwrap();
                    assert_close(rect.y, edge);
                    edge += rect.height;
                }
                assert_close(edge, 256.0);
            }
        }
    }
}

#[test]
fn test_non_square_canvas() {
    let geometry = GridGeometry::new(4, 2, 512.0, 128.0);
    assert_close(geometry.cell_width(), 256.0);
    assert_close(geometry.cell_height(), 32.0);
}

#[test]
fn test_capacity() {
    assert_eq!(GridGeometry::new(4, 4, 256.0, 256.0).capacity(), 16);
    assert_eq!(GridGeometry::new(16, 16, 256.0, 256.0).capacity(), 256);
    // Larger than the editor's cap must still work; the cap lives upstream.
    assert_eq!(GridGeometry::new(100, 3, 256.0, 256.0).capacity(), 300);
}

#[test]
#[should_panic(expected = "at least one row")]
fn test_zero_rows_is_a_bug() {
    let _ = GridGeometry::new(0, 4, 256.0, 256.0);
}

#[test]
#[should_panic(expected = "must be positive")]
fn test_zero_canvas_is_a_bug() {
    let _ = GridGeometry::new(4, 4, 0.0, 256.0);
}
