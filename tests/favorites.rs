mod helpers;

use crossterm::event::KeyCode;
use helpers::{SCENARIO_CATALOG, TestContext, numbered_catalog};

use bookshelf::app::PointerTarget;

#[test]
fn double_click_on_cover_toggles_favorite() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    let (col, row) = ctx.cover_cell(1);

    ctx.double_click(col, row);
    assert_eq!(ctx.favorites(), vec![2]);
    assert!(ctx.find_book_line("Second Book").unwrap().starts_with("┌♥┐"));
    assert!(ctx.status_contains("Added to favorites: Second Book"));

    ctx.wait(1000);
    ctx.double_click(col, row);
    assert!(ctx.favorites().is_empty());
    assert!(ctx.find_book_line("Second Book").unwrap().starts_with("┌─┐"));
    ctx.verify_invariants();
}

#[test]
fn lower_cover_line_is_part_of_the_cover() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    let (col, row) = ctx.cover_cell(0);

    ctx.double_click(col, row + 1);

    assert_eq!(ctx.favorites(), vec![1]);
    ctx.verify_invariants();
}

#[test]
fn double_click_outside_cover_is_ignored() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    let (col, row) = ctx.title_cell(1);

    ctx.double_click(col, row);

    assert!(ctx.favorites().is_empty());
    // The click still selects the row
    assert_eq!(ctx.app.selected, 1);
    ctx.verify_invariants();
}

#[test]
fn slow_clicks_are_not_a_double_click() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    let (col, row) = ctx.cover_cell(0);

    ctx.click(col, row);
    ctx.wait(2000);
    ctx.click(col, row);

    assert!(ctx.favorites().is_empty());
    ctx.verify_invariants();
}

#[test]
fn clicks_on_different_covers_are_not_a_double_click() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    let (col0, row0) = ctx.cover_cell(0);
    let (col1, row1) = ctx.cover_cell(1);

    ctx.click(col0, row0);
    ctx.wait(50);
    ctx.click(col1, row1);

    assert!(ctx.favorites().is_empty());
    assert_eq!(ctx.app.selected, 1);
}

#[test]
fn double_click_on_empty_space_is_ignored() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    let (col, _) = ctx.cover_cell(0);

    ctx.double_click(col, 15);

    assert!(ctx.favorites().is_empty());
    assert_eq!(ctx.app.selected, 0);
}

#[test]
fn favorites_keep_toggle_order() {
    let mut ctx = TestContext::new();

    ctx.press(KeyCode::Char('G'));
    ctx.press(KeyCode::Char('f'));
    ctx.press(KeyCode::Char('g'));
    ctx.press(KeyCode::Char('f'));
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Enter);

    assert_eq!(ctx.favorites(), vec![10, 1, 2]);

    ctx.press(KeyCode::Char('g'));
    ctx.press(KeyCode::Char('f'));
    assert_eq!(ctx.favorites(), vec![10, 2]);
    ctx.verify_invariants();
}

#[test]
fn hidden_books_can_still_be_favorited() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    ctx.press(KeyCode::Char('1'));
    assert!(ctx.is_hidden(2));

    let (col, row) = ctx.cover_cell(1);
    ctx.double_click(col, row);

    assert_eq!(ctx.favorites(), vec![2]);
    assert!(ctx.is_hidden(2));
    assert!(ctx.find_book_line("Second Book").unwrap().starts_with("░♥░"));
    ctx.verify_invariants();
}

#[test]
fn filters_do_not_touch_favorites() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('f'));
    ctx.press(KeyCode::Char('1'));
    ctx.press(KeyCode::Char('2'));
    ctx.press(KeyCode::Char('c'));

    assert_eq!(ctx.favorites(), vec![1]);
    ctx.verify_invariants();
}

#[test]
fn double_click_on_partly_drawn_row_toggles_that_book() {
    // Eleven books leave the last one half drawn; thirty leave room to scroll past it
    for count in [11, 30] {
        let mut ctx = TestContext::with_catalog(&numbered_catalog(count));
        let (col, row) = ctx.cover_cell(10);
        assert_eq!(ctx.app.pointer_target(col, row), PointerTarget::Cover(10));

        ctx.double_click(col, row);

        assert_eq!(ctx.favorites(), vec![11], "catalog of {count} books");
        assert_eq!(ctx.app.selected, 10);
        assert_eq!(ctx.app.scroll_offset, 0);
        ctx.verify_invariants();
    }
}

#[test]
fn keyboard_after_click_scrolls_selection_into_view() {
    let mut ctx = TestContext::with_catalog(&numbered_catalog(30));
    let (col, row) = ctx.cover_cell(10);

    ctx.click(col, row);
    assert_eq!(ctx.app.scroll_offset, 0);

    ctx.press(KeyCode::Char('j'));
    assert_eq!(ctx.app.selected, 11);
    assert_eq!(ctx.app.scroll_offset, 2);
    ctx.verify_invariants();
}

#[test]
fn clicks_split_by_a_scroll_are_not_a_double_click() {
    let mut ctx = TestContext::with_catalog(&numbered_catalog(30));
    let (col, row) = ctx.cover_cell(9);

    ctx.click(col, row);
    ctx.scroll(true);
    ctx.scroll(true);
    assert_eq!(ctx.app.scroll_offset, 2);
    ctx.click(col, row);

    assert!(ctx.favorites().is_empty());
    assert_eq!(ctx.app.selected, 11);
    ctx.verify_invariants();
}
