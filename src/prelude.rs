//! Convenient imports for commit statistics.
//!
//! ```
//! use commit_stats::prelude::*;
//!
//! let mut segments = SegmentCommit::new();
//! segments.set_user_data("sync_id", Some("abc"));
//! segments.commit();
//!
//! let snapshot = CommitSnapshot::capture(&segments);
//! let restored = from_bytes(&to_bytes(&snapshot))?;
//! assert_eq!(restored, snapshot);
//! # Ok::<(), commit_stats::Error>(())
//! ```

// Snapshot model
pub use crate::{CommitSnapshot, CommitSource, SegmentCommit, UserData, UserDataBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Encode / decode / render
pub use crate::codec::{
    from_bytes, optional_from_bytes, optional_to_bytes, render_into, to_bytes, to_json,
    to_json_value,
};
pub use crate::{JsonOptions, StructuredSink, ToStructured};
