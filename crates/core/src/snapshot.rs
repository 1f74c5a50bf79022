//! Commit snapshot value
//!
//! A [`CommitSnapshot`] records what the last durable commit of a segment set
//! looked like: the user metadata attached to it and its generation.
//!
//! Snapshots are immutable. The metadata is copied out of the producer at
//! construction time, before the value can be handed to any other thread, so
//! later changes on the producer side never show through. `CommitSnapshot` is
//! `Send + Sync` and can be shared (for example behind an `Arc`) without
//! locking.

use crate::source::CommitSource;
use crate::user_data::UserData;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Metadata about the last commit point of a segment set
///
/// # Examples
///
/// ```
/// use commit_stats_core::{CommitSnapshot, SegmentCommit};
///
/// let mut segments = SegmentCommit::new();
/// segments.set_user_data("sync_id", Some("abc"));
/// segments.commit();
///
/// let snapshot = CommitSnapshot::capture(&segments);
/// segments.set_user_data("sync_id", Some("changed"));
///
/// assert_eq!(snapshot.generation(), 1);
/// assert_eq!(snapshot.user_data().get("sync_id"), Some(Some("abc")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSnapshot {
    user_data: UserData,
    generation: i64,
}

impl CommitSnapshot {
    /// Capture the current commit point of a producer
    ///
    /// Copies every metadata entry; the snapshot keeps no reference to the
    /// source. The producer's "last generation" becomes the snapshot's
    /// generation. No validation is applied to keys, values or generation.
    pub fn capture<S: CommitSource + ?Sized>(source: &S) -> Self {
        let user_data = UserData::copy_from(source.user_data());
        let generation = source.last_generation();
        trace!(
            entries = user_data.len(),
            generation,
            "Captured commit snapshot"
        );
        Self {
            user_data,
            generation,
        }
    }

    /// Assemble a snapshot from parts already owned by the caller
    ///
    /// Used when reconstructing a snapshot from its encoded form.
    pub fn new(user_data: UserData, generation: i64) -> Self {
        Self {
            user_data,
            generation,
        }
    }

    /// Placeholder with no metadata and generation 0
    ///
    /// This is a decode target, not a meaningful commit description.
    pub fn empty() -> Self {
        Self::new(UserData::new(), 0)
    }

    /// Metadata attached to the commit
    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    /// Generation of the commit
    pub fn generation(&self) -> i64 {
        self.generation
    }

    /// Split into owned parts
    pub fn into_parts(self) -> (UserData, i64) {
        (self.user_data, self.generation)
    }
}

impl Default for CommitSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl CommitSource for CommitSnapshot {
    fn user_data(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        Box::new(self.user_data.iter())
    }

    fn last_generation(&self) -> i64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SegmentCommit;
    use std::sync::Arc;
    use std::thread;

    fn segments() -> SegmentCommit {
        let mut segments = SegmentCommit::at_generation(41);
        segments.set_user_data("sync_id", Some("abc"));
        segments.set_user_data("history_uuid", None::<&str>);
        segments.commit();
        segments
    }

    #[test]
    fn test_capture_copies_source() {
        let snapshot = CommitSnapshot::capture(&segments());
        assert_eq!(snapshot.generation(), 42);
        assert_eq!(snapshot.user_data().len(), 2);
        assert_eq!(snapshot.user_data().get("sync_id"), Some(Some("abc")));
        assert_eq!(snapshot.user_data().get("history_uuid"), Some(None));
    }

    #[test]
    fn test_source_mutation_after_capture_is_invisible() {
        let mut source = segments();
        let snapshot = CommitSnapshot::capture(&source);

        source.set_user_data("sync_id", Some("xyz"));
        source.set_user_data("new_key", Some("v"));
        source.remove_user_data("history_uuid");
        source.commit();

        assert_eq!(snapshot.generation(), 42);
        assert_eq!(snapshot.user_data().len(), 2);
        assert_eq!(snapshot.user_data().get("sync_id"), Some(Some("abc")));
        assert!(!snapshot.user_data().contains_key("new_key"));
        assert!(snapshot.user_data().contains_key("history_uuid"));
    }

    #[test]
    fn test_negative_and_extreme_generations_are_kept() {
        for generation in [-1, i64::MIN, i64::MAX, 0] {
            let snapshot = CommitSnapshot::capture(&SegmentCommit::at_generation(generation));
            assert_eq!(snapshot.generation(), generation);
            assert!(snapshot.user_data().is_empty());
        }
    }

    #[test]
    fn test_empty_placeholder() {
        let snapshot = CommitSnapshot::empty();
        assert_eq!(snapshot.generation(), 0);
        assert!(snapshot.user_data().is_empty());
        assert_eq!(snapshot, CommitSnapshot::default());
    }

    #[test]
    fn test_recapture_from_snapshot_is_equal() {
        let snapshot = CommitSnapshot::capture(&segments());
        let again = CommitSnapshot::capture(&snapshot);
        assert_eq!(snapshot, again);
        assert_eq!(
            snapshot.user_data().keys().collect::<Vec<_>>(),
            again.user_data().keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_shared_reads_across_threads() {
        let snapshot = Arc::new(CommitSnapshot::capture(&segments()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let snapshot = Arc::clone(&snapshot);
                thread::spawn(move || {
                    (
                        snapshot.generation(),
                        snapshot.user_data().get("sync_id").flatten().map(str::to_owned),
                    )
                })
            })
            .collect();

        for handle in handles {
            let (generation, sync_id) = handle.join().unwrap();
            assert_eq!(generation, 42);
            assert_eq!(sync_id.as_deref(), Some("abc"));
        }
    }

    #[test]
    fn test_serde_shape() {
        let snapshot = CommitSnapshot::new(
            UserData::builder().with("k", Some("v")).build(),
            7,
        );
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"user_data":{"k":"v"},"generation":7}"#);

        let back: CommitSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
