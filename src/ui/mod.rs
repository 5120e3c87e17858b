mod books;
mod context;
mod footer;
mod help;
mod panel;
mod prep;
mod render;
mod scroll;
mod shared;
pub(crate) mod theme;

pub use books::build_book_list;
pub use context::RenderContext;
pub use footer::render_footer;
pub use help::render_help_content;
pub use panel::build_panel_lines;
pub use prep::prepare_render;
pub use render::render_app;
pub use scroll::ensure_selected_visible;
pub use shared::{centered_rect, format_price, truncate_text};
