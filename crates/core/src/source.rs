//! Producer side of a commit snapshot
//!
//! The storage layer that owns the segment set decides when commits happen
//! and which generation they get. It hands its view to a snapshot through
//! [`CommitSource`]. [`SegmentCommit`] is the in-memory descriptor used by
//! the engine and by tests.

use std::collections::HashMap;

/// Anything that can describe its latest commit point
///
/// Implementors expose the current user metadata and the generation of the
/// last commit. Reading both consistently with respect to the producer's own
/// commit protocol is the producer's responsibility.
pub trait CommitSource {
    /// Current user metadata, in the order the producer wants it captured
    fn user_data(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_>;

    /// Generation of the last commit
    fn last_generation(&self) -> i64;
}

/// Mutable descriptor of a segment set's commit point
///
/// Metadata is staged with [`set_user_data`](Self::set_user_data) and becomes
/// part of the next [`commit`](Self::commit). Metadata is held in a hash map,
/// so its iteration order is arbitrary but stable between mutations.
#[derive(Debug, Clone, Default)]
pub struct SegmentCommit {
    user_data: HashMap<String, Option<String>>,
    generation: i64,
}

impl SegmentCommit {
    /// A descriptor with no commits yet
    pub fn new() -> Self {
        Self::default()
    }

    /// A descriptor positioned at an existing generation
    pub fn at_generation(generation: i64) -> Self {
        Self {
            user_data: HashMap::new(),
            generation,
        }
    }

    /// Set or replace one metadata entry
    pub fn set_user_data(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        self.user_data.insert(key.into(), value.map(Into::into));
    }

    /// Remove one metadata entry, returning its previous value
    pub fn remove_user_data(&mut self, key: &str) -> Option<Option<String>> {
        self.user_data.remove(key)
    }

    /// Replace all metadata at once
    pub fn replace_user_data<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.user_data = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.map(Into::into)))
            .collect();
    }

    /// Record a commit, advancing the generation
    ///
    /// Returns the new generation. Wraps at `i64::MAX`, since generations are
    /// opaque counters.
    pub fn commit(&mut self) -> i64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Generation of the last commit
    pub fn generation(&self) -> i64 {
        self.generation
    }
}

impl CommitSource for SegmentCommit {
    fn user_data(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        Box::new(
            self.user_data
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_deref())),
        )
    }

    fn last_generation(&self) -> i64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_advances_generation() {
        let mut commit = SegmentCommit::new();
        assert_eq!(commit.last_generation(), 0);
        assert_eq!(commit.commit(), 1);
        assert_eq!(commit.commit(), 2);
        assert_eq!(commit.generation(), 2);
    }

    #[test]
    fn test_commit_wraps_at_max() {
        let mut commit = SegmentCommit::at_generation(i64::MAX);
        assert_eq!(commit.commit(), i64::MIN);
    }

    #[test]
    fn test_user_data_reflects_mutations() {
        let mut commit = SegmentCommit::new();
        commit.set_user_data("a", Some("1"));
        commit.set_user_data("b", None::<&str>);
        commit.set_user_data("a", Some("2"));

        let mut entries: Vec<_> = commit.user_data().collect();
        entries.sort();
        assert_eq!(entries, vec![("a", Some("2")), ("b", None)]);

        assert_eq!(commit.remove_user_data("b"), Some(None));
        assert_eq!(commit.remove_user_data("b"), None);
        assert_eq!(commit.user_data().count(), 1);
    }

    #[test]
    fn test_replace_user_data() {
        let mut commit = SegmentCommit::new();
        commit.set_user_data("old", Some("x"));
        commit.replace_user_data([("new", Some("y")), ("gone", None)]);

        let mut keys: Vec<_> = commit.user_data().map(|(k, _)| k).collect();
        keys.sort();
        assert_eq!(keys, vec!["gone", "new"]);
    }
}
