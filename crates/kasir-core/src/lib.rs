//! # kasir-core: Pure Business Logic for the Kasir POS Backend
//!
//! This crate is the heart of the checkout subsystem. It contains all
//! business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Kasir POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    HTTP API (apps/server)                     │ │
//! │  │   POST /api/checkout  GET /api/report/hari-ini  CRUD routes   │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ kasir-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐ │ │
//! │  │   │   types   │  │ checkout  │  │ validation│  │   error   │ │ │
//! │  │   │  Product  │  │   plan,   │  │   field   │  │  domain   │ │ │
//! │  │   │Transaction│  │ stock math│  │   rules   │  │  errors   │ │ │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘ │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                  kasir-db (Storage Layer)                     │ │
//! │  │      SQLite queries, the atomic checkout writer, reports      │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, CheckoutRequest, ...)
//! - [`checkout`] - Cart validation and the checkout plan math
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation for the CRUD surface
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output - no hidden state
//! 2. **Integer Money**: all amounts are in the smallest currency unit (i64)
//! 3. **Explicit Errors**: typed errors, never strings or panics
//! 4. **Snapshot Pricing**: a checkout plan freezes prices at validation
//!    time; nothing downstream may recompute from live product data

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutLine, CheckoutPlan};
pub use error::{CheckoutError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length for product and category names.
///
/// The original deployment declared these columns as VARCHAR(100); the limit
/// is kept so data stays portable back to that schema.
pub const MAX_NAME_LEN: usize = 100;
