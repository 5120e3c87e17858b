/// Ensures the selected item is visible within the scroll viewport.
pub fn ensure_selected_visible(
    scroll_offset: &mut usize,
    selected: usize,
    entry_count: usize,
    visible_height: usize,
) {
    if entry_count == 0 || visible_height == 0 {
        *scroll_offset = 0;
        return;
    }
    if selected < *scroll_offset {
        *scroll_offset = selected;
    }
    if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected - visible_height + 1;
    }

    let max_scroll = entry_count.saturating_sub(visible_height);
    if *scroll_offset > max_scroll {
        *scroll_offset = max_scroll;
    }
}
