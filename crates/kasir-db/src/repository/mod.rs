//! # Repository Module
//!
//! Database repository implementations for Kasir POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.   │
//! │                                                                         │
//! │  HTTP Handler                                                           │
//! │       │                                                                 │
//! │       │  db.products().list(Some("indomie"))                            │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                      │
//! │  ├── list(&self, name_filter)                                           │
//! │  ├── get_by_id(&self, id)                                               │
//! │  ├── insert(&self, name, price, stock)                                  │
//! │  └── update(&self, ...)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                         │
//! │  • SQL is isolated in one place                                         │
//! │  • Handlers stay thin                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and checkout snapshot reads
//! - [`category::CategoryRepository`] - Category CRUD
//! - [`transaction::TransactionRepository`] - The atomic checkout writer
//! - [`report::ReportRepository`] - Daily sales aggregates

pub mod category;
pub mod product;
pub mod report;
pub mod transaction;
