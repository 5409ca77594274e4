//! Protobuf contracts for the auth and todo services.
//!
//! Sources live in `proto/`; `src/gen` is regenerated with `buf generate`.

mod r#gen;

pub use r#gen::{auth, todo};
