use crate::app::{App, HitRegions};

use super::context::RenderContext;
use super::scroll::ensure_selected_visible;

/// Updates view state that depends on the frame size before drawing.
pub fn prepare_render(app: &mut App, context: &RenderContext) {
    app.regions = HitRegions {
        books: context.books_area,
        filters: context.filters_area,
    };
    app.selected = app.selected.min(app.collection.len().saturating_sub(1));
    app.panel_selected = app.panel_selected.min(app.panel.len().saturating_sub(1));
    if app.follow_selection {
        ensure_selected_visible(
            &mut app.scroll_offset,
            app.selected,
            app.collection.len(),
            context.books_visible,
        );
    } else {
        let max_scroll = app.collection.len().saturating_sub(context.books_visible);
        app.scroll_offset = app.scroll_offset.min(max_scroll);
    }
}
