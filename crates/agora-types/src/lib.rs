//! Shared types, adapter traits, and core utilities for the Agora platform.
//!
//! This crate holds the data model of the widget admin page together with the
//! narrow interfaces of its collaborators (hook dispatcher, template renderer,
//! group store, widget area resolver). Adapter crates and feature crates both
//! depend on it, so it carries no runtime state of its own.

pub mod error;
pub mod group_adapter;
pub mod hook_dispatcher;
pub mod prelude;
pub mod template_adapter;
pub mod types;
pub mod widget;
pub mod widget_adapter;

// vim: ts=4
