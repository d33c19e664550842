use sdfont::CoverageBitmap;

#[test]
fn blit_binarizes_above_threshold() {
    let mut bitmap = CoverageBitmap::new(4, 1);
    bitmap.blit_gray(&[0, 128, 129, 255], 4, 0);
    assert!(!bitmap.get(0, 0));
    assert!(!bitmap.get(1, 0), "exactly half intensity is background");
    assert!(bitmap.get(2, 0));
    assert!(bitmap.get(3, 0));
}

#[test]
fn blit_places_box_at_row_offset() {
    let mut bitmap = CoverageBitmap::new(2, 5);
    bitmap.blit_gray(&[255, 255, 255, 255], 2, 2);
    for y in 0..5 {
        for x in 0..2 {
            assert_eq!(bitmap.get(x, y), y == 2 || y == 3);
        }
    }
}

#[test]
fn blit_clips_rows_outside_bitmap() {
    let mut bitmap = CoverageBitmap::new(1, 2);
    // Four rows blitted starting one above the bitmap: rows 0 and 3 fall away
    bitmap.blit_gray(&[255, 255, 255, 255], 1, -1);
    assert!(bitmap.get(0, 0));
    assert!(bitmap.get(0, 1));
}

#[test]
fn zero_width_blit_is_a_no_op() {
    let mut bitmap = CoverageBitmap::new(3, 3);
    bitmap.blit_gray(&[], 0, 0);
    assert!(bitmap.bits().iter().all(|&b| !b));
}

#[test]
fn empty_bitmap_has_no_bits() {
    let bitmap = CoverageBitmap::new(0, 10);
    assert_eq!(bitmap.width, 0);
    assert_eq!(bitmap.height, 10);
    assert!(bitmap.bits().is_empty());
}
