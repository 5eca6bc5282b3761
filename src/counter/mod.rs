//! Persistent cake counter.
//!
//! A single invocation loads the count, applies the requested deltas
//! and writes the result back:
//! - `store`: plain-text counter file with atomic rename-on-write
//! - `error`: persistence errors

mod error;
mod store;

pub use error::CounterError;
pub use store::{CounterStore, DEFAULT_COUNTER_FILE};

use crate::types::CakeCount;

// ============================================================================
// CounterRequest
// ============================================================================

/// Operations requested for one counter invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterRequest {
    /// Cakes to add
    pub add: Option<i64>,
    /// Cakes to remove
    pub remove: Option<i64>,
    /// Whether the count was explicitly requested
    pub show: bool,
}

impl CounterRequest {
    /// Returns true if the resulting count should be printed.
    ///
    /// Showing is the default when no delta was requested.
    pub fn should_show(&self) -> bool {
        self.show || (self.add.is_none() && self.remove.is_none())
    }
}

// ============================================================================
// CounterUpdate
// ============================================================================

/// A single change applied to the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterUpdate {
    /// Cakes were added
    Added(i64),
    /// Cakes were removed
    Removed(i64),
}

/// Outcome of applying a request to a count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterOutcome {
    /// Count after all updates
    pub count: CakeCount,
    /// Updates in the order they were applied
    pub updates: Vec<CounterUpdate>,
    /// Whether the count should be shown
    pub show: bool,
}

/// Applies a request to a count.
///
/// Additions are always applied before removals, regardless of the order
/// the flags were given in.
pub fn apply(count: CakeCount, request: &CounterRequest) -> CounterOutcome {
    let mut count = count;
    let mut updates = Vec::with_capacity(2);

    if let Some(cakes) = request.add {
        count = count.add(cakes);
        updates.push(CounterUpdate::Added(cakes));
    }
    if let Some(cakes) = request.remove {
        count = count.remove(cakes);
        updates.push(CounterUpdate::Removed(cakes));
    }

    CounterOutcome {
        count,
        updates,
        show: request.should_show(),
    }
}

/// Loads the count from `store`, applies `request` and persists the result.
///
/// The file is rewritten even when nothing changed.
pub fn run(store: &CounterStore, request: &CounterRequest) -> Result<CounterOutcome, CounterError> {
    let initial = store.load();
    tracing::debug!("Loaded cake count {} from {}", initial, store.path().display());

    let outcome = apply(initial, request);
    store.save(outcome.count)?;

    Ok(outcome)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // CounterRequest Tests
    // ------------------------------------------------------------------------

    mod request_tests {
        use super::*;

        #[test]
        fn test_empty_request_shows() {
            assert!(CounterRequest::default().should_show());
        }

        #[test]
        fn test_add_only_does_not_show() {
            let request = CounterRequest {
                add: Some(1),
                ..Default::default()
            };
            assert!(!request.should_show());
        }

        #[test]
        fn test_remove_with_show() {
            let request = CounterRequest {
                remove: Some(1),
                show: true,
                ..Default::default()
            };
            assert!(request.should_show());
        }
    }

    // ------------------------------------------------------------------------
    // Apply Tests
    // ------------------------------------------------------------------------

    mod apply_tests {
        use super::*;

        #[test]
        fn test_apply_nothing() {
            let outcome = apply(CakeCount::new(3), &CounterRequest::default());
            assert_eq!(outcome.count, CakeCount::new(3));
            assert!(outcome.updates.is_empty());
            assert!(outcome.show);
        }

        #[test]
        fn test_apply_add() {
            let request = CounterRequest {
                add: Some(5),
                ..Default::default()
            };
            let outcome = apply(CakeCount::new(0), &request);
            assert_eq!(outcome.count, CakeCount::new(5));
            assert_eq!(outcome.updates, vec![CounterUpdate::Added(5)]);
            assert!(!outcome.show);
        }

        #[test]
        fn test_apply_add_before_remove() {
            let request = CounterRequest {
                add: Some(2),
                remove: Some(7),
                show: true,
            };
            let outcome = apply(CakeCount::new(1), &request);
            assert_eq!(outcome.count, CakeCount::new(-4));
            assert_eq!(
                outcome.updates,
                vec![CounterUpdate::Added(2), CounterUpdate::Removed(7)]
            );
        }

        #[test]
        fn test_apply_negative_add() {
            let request = CounterRequest {
                add: Some(-3),
                ..Default::default()
            };
            let outcome = apply(CakeCount::new(10), &request);
            assert_eq!(outcome.count, CakeCount::new(7));
        }
    }

    // ------------------------------------------------------------------------
    // Run Tests
    // ------------------------------------------------------------------------

    mod run_tests {
        use super::*;

        #[test]
        fn test_run_round_trip() {
            let dir = tempfile::tempdir().unwrap();
            let store = CounterStore::new(dir.path().join(DEFAULT_COUNTER_FILE));

            let add = CounterRequest {
                add: Some(5),
                ..Default::default()
            };
            run(&store, &add).unwrap();
            let shown = run(&store, &CounterRequest::default()).unwrap();
            assert_eq!(shown.count, CakeCount::new(5));

            let remove = CounterRequest {
                remove: Some(3),
                ..Default::default()
            };
            run(&store, &remove).unwrap();
            let shown = run(&store, &CounterRequest::default()).unwrap();
            assert_eq!(shown.count, CakeCount::new(2));
        }

        #[test]
        fn test_run_show_rewrites_file() {
            let dir = tempfile::tempdir().unwrap();
            let store = CounterStore::new(dir.path().join(DEFAULT_COUNTER_FILE));
            std::fs::write(store.path(), "  9\n").unwrap();

            run(&store, &CounterRequest::default()).unwrap();
            assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "9");
        }

        #[test]
        fn test_run_corrupt_file_resets_to_zero() {
            let dir = tempfile::tempdir().unwrap();
            let store = CounterStore::new(dir.path().join(DEFAULT_COUNTER_FILE));
            std::fs::write(store.path(), "abc").unwrap();

            let outcome = run(&store, &CounterRequest::default()).unwrap();
            assert_eq!(outcome.count, CakeCount::new(0));
            assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "0");
        }
    }
}
