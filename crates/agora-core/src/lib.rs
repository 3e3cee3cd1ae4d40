//! Core infrastructure for the Agora platform.
//!
//! Holds the application state shared by feature crates, the builder that
//! assembles it from adapters, and the in-process filter hook registry that
//! plugins extend.

pub mod app;
pub mod hooks;
pub mod prelude;

pub use app::{App, AppBuilder, AppBuilderOpts, AppState};
pub use hooks::HookRegistry;

// vim: ts=4
