//! TUI widgets.

mod footer;
mod gauge;
mod header;
mod table;

pub use footer::{footer_height, render_error_banner, render_footer, render_loading};
pub use gauge::render_gauge;
pub use header::render_header;
pub use table::render_table;
