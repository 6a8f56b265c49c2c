//! API handlers.

pub mod category;
pub mod checkout;
pub mod health;
pub mod product;
pub mod report;
