//! # Kasir Server
//!
//! Axum HTTP API for the Kasir POS backend.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                │
//! │                                                                     │
//! │  Client ──► Router ──► Handler ──► kasir-core (validate/price)      │
//! │                           │                                         │
//! │                           └──────► kasir-db (repositories/writer)   │
//! │                                         │                           │
//! │                                         ▼                           │
//! │                                   SQLite (WAL)                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is a library so integration tests can build the router
//! in-process; `main.rs` is a thin binary around [`create_router`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
