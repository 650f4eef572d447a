//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart logic, including:
//! - Domain models (CartLine, route bodies, cart views)
//! - The per-session cart store
//! - Session helpers
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
pub use store::CartStore;
