//! Integration tests for positions and previews

use lexgram_foundation::{PREVIEW_LIMIT, Position, preview};

#[test]
fn zero_based_conversion() {
    let position = Position::from_zero_based(0, 6);
    assert_eq!(position, Position::new(1, 7));
    assert_eq!(position.to_string(), "1:7");
}

#[test]
fn default_is_start() {
    assert_eq!(Position::default(), Position::at_start());
}

#[test]
fn positions_order_by_row_then_column() {
    assert!(Position::new(1, 9) < Position::new(2, 1));
    assert!(Position::new(2, 1) < Position::new(2, 3));
}

#[test]
fn preview_counts_characters() {
    assert_eq!(PREVIEW_LIMIT, 10);
    assert_eq!(preview("ééééééééééééé").chars().count(), PREVIEW_LIMIT);
    assert_eq!(preview("#"), "#");
}
