//! Core types - pure abstractions shared across the codebase.

mod route;
mod state;

pub use route::{RouteScheme, Routes};
pub use state::{
    is_serving, is_shutdown, register_server, set_serving, setup_shutdown_handler,
};
