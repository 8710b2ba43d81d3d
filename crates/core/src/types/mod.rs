//! Core types for the Mahatta storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;

pub use id::WallpaperId;
pub use price::{CurrencyCode, Price, PriceError};
pub use status::{Page, Surface};
