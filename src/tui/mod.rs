//! Terminal user interface for the dashboard.
//!
//! Events (refresh ticks, key presses, resizes) are handled one at a time on
//! the main thread. Each event goes through the pure [`state::transition`];
//! a tick additionally runs the sampler and re-projects every tab.

mod app;
mod event;
mod input;
mod render;
pub mod state;
mod style;
mod widgets;

pub use app::App;
pub use input::map_key;
pub use render::render;
pub use state::{Action, Input, ViewState, transition};
