//! Widget admin view model
//!
//! Assembles the data behind the admin "widgets" page: the layout areas
//! widgets can be placed into, the widgets plugins make available, and the
//! areas grouped by template for rendering.

pub mod admin;
pub mod areas;
pub mod available;
pub mod handler;
pub mod templates;

mod prelude;

pub use admin::get;
pub use areas::{get_areas, HOOK_GET_AREAS};
pub use available::{get_available_widgets, render_admin_template, HOOK_GET_WIDGETS};
pub use handler::routes;
pub use templates::build_templates_from_areas;

// vim: ts=4
