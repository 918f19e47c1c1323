//! Tests for screen layout calculation

use super::*;

fn screen() -> Rect {
    Rect::new(0, 0, 80, 24)
}

#[test]
fn minimal_layout_gives_table_the_remaining_height() {
    let layout = calculate_layout(screen(), false, false);

    assert_eq!(layout.title, Rect::new(0, 0, 80, 1));
    assert_eq!(layout.search, Rect::new(0, 1, 80, 3));
    assert_eq!(layout.table, Rect::new(0, 4, 80, 19));
    assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    assert_eq!(layout.banner, None);
    assert_eq!(layout.pagination, None);
}

#[test]
fn pagination_sits_directly_above_status() {
    let layout = calculate_layout(screen(), false, true);

    assert_eq!(layout.pagination, Some(Rect::new(0, 22, 80, 1)));
    assert_eq!(layout.table.height, 18);
}

#[test]
fn banner_sits_between_table_and_pagination() {
    let layout = calculate_layout(screen(), true, true);

    assert_eq!(layout.banner, Some(Rect::new(0, 19, 80, 3)));
    assert_eq!(layout.pagination, Some(Rect::new(0, 22, 80, 1)));
    assert_eq!(layout.table, Rect::new(0, 4, 80, 15));
}

#[test]
fn banner_without_pagination_sits_above_status() {
    let layout = calculate_layout(screen(), true, false);

    assert_eq!(layout.banner, Some(Rect::new(0, 20, 80, 3)));
    assert_eq!(layout.status.y, 23);
}

#[test]
fn fixed_rect_is_centered() {
    let rect = fixed_rect(40, 6, screen());
    assert_eq!(rect, Rect::new(20, 9, 40, 6));
}

#[test]
fn fixed_rect_shrinks_to_fit() {
    let rect = fixed_rect(120, 50, Rect::new(5, 5, 30, 10));
    assert_eq!(rect, Rect::new(5, 5, 30, 10));
}

#[test]
fn centered_rect_uses_percentages() {
    let rect = centered_rect(50, 50, screen());
    assert_eq!(rect, Rect::new(20, 6, 40, 12));
}
