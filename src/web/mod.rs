//! HTTP surface: routing, page rendering and flash notices.

pub mod flash;
pub mod pages;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
