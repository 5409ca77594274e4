//! Types shared by every store backend

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
