//! Core types for quickconvert: Category and ConvertError
//!
//! Errors never crash the system. They are values that propagate through
//! computations and surface to the caller as typed results.

mod category;
mod error;

pub use category::Category;
pub use error::ConvertError;
