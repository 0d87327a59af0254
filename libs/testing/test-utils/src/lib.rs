//! Shared test infrastructure for the workspace.
//!
//! - [`TestDatabase`]: throwaway PostgreSQL container with migrations applied
//! - [`TestDataBuilder`]: deterministic names and emails keyed by test name
//! - [`assertions`]: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("my_postgres_test");
//!     let email = data.email("alice");
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Deterministic test data derived from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds the builder from the test name, so parallel tests sharing a
    /// database never collide on unique columns.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `"<label>-<seed>@example.com"`
    pub fn email(&self, label: &str) -> String {
        format!("{}-{}@example.com", label, self.seed)
    }

    /// Display name fitting a 50-character column.
    pub fn name(&self, label: &str) -> String {
        let mut name = format!("{} {}", label, self.seed);
        name.truncate(50);
        name
    }
}

pub mod assertions {
    /// Unwraps `value`, panicking with `context` on `None`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Asserts `items` is ordered newest-first by `key`.
    pub fn assert_sorted_desc<T, K, F>(items: &[T], key: F, context: &str)
    where
        K: PartialOrd + std::fmt::Debug,
        F: Fn(&T) -> K,
    {
        for pair in items.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            assert!(a >= b, "{}: {:?} sorted before {:?}", context, a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::from_test_name("my_test");
        let b = TestDataBuilder::from_test_name("my_test");
        assert_eq!(a.email("alice"), b.email("alice"));
        assert_eq!(a.name("Alice"), b.name("Alice"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");
        assert_ne!(a.email("alice"), b.email("alice"));
    }

    #[test]
    fn test_name_fits_column() {
        let name = TestDataBuilder::new(u64::MAX).name(&"x".repeat(60));
        assert_eq!(name.len(), 50);
    }

    #[test]
    fn test_assert_sorted_desc_accepts_ordered() {
        assertions::assert_sorted_desc(&[3, 2, 2, 1], |v| *v, "numbers");
    }

    #[test]
    #[should_panic(expected = "numbers")]
    fn test_assert_sorted_desc_rejects_ascending() {
        assertions::assert_sorted_desc(&[1, 2], |v| *v, "numbers");
    }
}
