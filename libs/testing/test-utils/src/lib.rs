//! Shared test utilities for the domain crates
//!
//! - `TestDatabase`: an isolated SQLite database with a schema applied
//! - `TestDataBuilder`: deterministic test data
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new(&[CREATE_TASK_TABLE]).await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!     let description = builder.description(1);
//! }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;

/// Builder for test data with deterministic values
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name so reruns produce the same data
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A login unique to this builder
    pub fn login(&self, suffix: &str) -> String {
        format!("user-{}-{}", self.seed, suffix)
    }

    /// A task description unique to this builder
    pub fn description(&self, n: u32) -> String {
        format!("task-{}-{}", self.seed, n)
    }
}
