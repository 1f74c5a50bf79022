//! Structured rendering of commit snapshots
//!
//! A snapshot renders as a single `"commit"` field:
//!
//! ```json
//! {"commit":{"generation":42,"user_data":{"sync_id":"abc","history_uuid":null}}}
//! ```
//!
//! Rendering goes through [`StructuredSink`], a small visitor over "open
//! object / write field / close object". The snapshot never sees the output
//! format: [`JsonSink`] produces text, [`ValueSink`] builds a
//! `serde_json::Value` tree, and callers can plug in their own document
//! builders.
//!
//! Field order is fixed: `generation`, then `user_data`, whose entries follow
//! the snapshot's insertion order.

mod error;
mod json;
mod value;

pub use error::SinkError;
pub use json::{JsonOptions, JsonSink};
pub use value::ValueSink;

use commit_stats_core::CommitSnapshot;

/// Field names used in the rendered form
pub mod fields {
    /// Wrapper field holding the commit object
    pub const COMMIT: &str = "commit";
    /// Generation number
    pub const GENERATION: &str = "generation";
    /// User metadata object
    pub const USER_DATA: &str = "user_data";
}

/// Destination for structured output
///
/// Sinks only ever receive objects and named fields; no bare top-level
/// scalars are written.
pub trait StructuredSink {
    /// Failure raised by the sink
    type Error;

    /// Open an unnamed top-level object
    fn start_object(&mut self) -> Result<(), Self::Error>;

    /// Open an object as the value of field `name` in the current object
    fn start_object_field(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Close the innermost open object
    fn end_object(&mut self) -> Result<(), Self::Error>;

    /// Write an integer field
    fn field_i64(&mut self, name: &str, value: i64) -> Result<(), Self::Error>;

    /// Write a string field, or null when `value` is `None`
    fn field_str(&mut self, name: &str, value: Option<&str>) -> Result<(), Self::Error>;
}

/// A value that can write itself as fields of an already open object
pub trait ToStructured {
    /// Write this value's fields into the current object of `sink`
    fn to_structured<S: StructuredSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error>;
}

impl ToStructured for CommitSnapshot {
    fn to_structured<S: StructuredSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.start_object_field(fields::COMMIT)?;
        sink.field_i64(fields::GENERATION, self.generation())?;
        sink.start_object_field(fields::USER_DATA)?;
        for (key, value) in self.user_data().iter() {
            sink.field_str(key, value)?;
        }
        sink.end_object()?;
        sink.end_object()
    }
}

/// Render `value` as a complete top-level object into `sink`
///
/// Sink failures are returned unchanged.
pub fn render<T, S>(value: &T, sink: &mut S) -> Result<(), S::Error>
where
    T: ToStructured + ?Sized,
    S: StructuredSink + ?Sized,
{
    sink.start_object()?;
    value.to_structured(sink)?;
    sink.end_object()
}

/// Render a snapshot to compact JSON text
pub fn render_json(snapshot: &CommitSnapshot) -> Result<String, SinkError> {
    render_json_with(snapshot, &JsonOptions::default())
}

/// Render a snapshot to JSON text with explicit formatting options
pub fn render_json_with(
    snapshot: &CommitSnapshot,
    options: &JsonOptions,
) -> Result<String, SinkError> {
    let mut sink = JsonSink::with_options(Vec::new(), options.clone());
    render(snapshot, &mut sink)?;
    let bytes = sink.finish()?;
    // Only whole `str`s and ASCII punctuation are ever written
    String::from_utf8(bytes)
        .map_err(|e| SinkError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Render a snapshot to an in-memory `serde_json::Value` tree
pub fn render_value(snapshot: &CommitSnapshot) -> Result<serde_json::Value, SinkError> {
    let mut sink = ValueSink::new();
    render(snapshot, &mut sink)?;
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_stats_core::UserData;

    fn sample() -> CommitSnapshot {
        CommitSnapshot::new(
            UserData::builder()
                .with("sync_id", Some("abc"))
                .with("history_uuid", None::<&str>)
                .build(),
            42,
        )
    }

    /// Records every call, to check the exact event sequence
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl StructuredSink for Recorder {
        type Error = std::convert::Infallible;

        fn start_object(&mut self) -> Result<(), Self::Error> {
            self.events.push("{".into());
            Ok(())
        }

        fn start_object_field(&mut self, name: &str) -> Result<(), Self::Error> {
            self.events.push(format!("{name}:{{"));
            Ok(())
        }

        fn end_object(&mut self) -> Result<(), Self::Error> {
            self.events.push("}".into());
            Ok(())
        }

        fn field_i64(&mut self, name: &str, value: i64) -> Result<(), Self::Error> {
            self.events.push(format!("{name}={value}"));
            Ok(())
        }

        fn field_str(&mut self, name: &str, value: Option<&str>) -> Result<(), Self::Error> {
            self.events.push(format!("{name}={value:?}"));
            Ok(())
        }
    }

    /// Fails on the n-th call
    struct FailingSink {
        calls_left: usize,
    }

    #[derive(Debug, PartialEq)]
    struct Broken;

    impl FailingSink {
        fn tick(&mut self) -> Result<(), Broken> {
            if self.calls_left == 0 {
                return Err(Broken);
            }
            self.calls_left -= 1;
            Ok(())
        }
    }

    impl StructuredSink for FailingSink {
        type Error = Broken;

        fn start_object(&mut self) -> Result<(), Broken> {
            self.tick()
        }
        fn start_object_field(&mut self, _: &str) -> Result<(), Broken> {
            self.tick()
        }
        fn end_object(&mut self) -> Result<(), Broken> {
            self.tick()
        }
        fn field_i64(&mut self, _: &str, _: i64) -> Result<(), Broken> {
            self.tick()
        }
        fn field_str(&mut self, _: &str, _: Option<&str>) -> Result<(), Broken> {
            self.tick()
        }
    }

    #[test]
    fn test_event_sequence() {
        let mut sink = Recorder::default();
        render(&sample(), &mut sink).unwrap();
        assert_eq!(
            sink.events,
            vec![
                "{",
                "commit:{",
                "generation=42",
                "user_data:{",
                "sync_id=Some(\"abc\")",
                "history_uuid=None",
                "}",
                "}",
                "}",
            ]
        );
    }

    #[test]
    fn test_fragment_does_not_open_top_level() {
        let mut sink = Recorder::default();
        sample().to_structured(&mut sink).unwrap();
        assert_eq!(sink.events.first().map(String::as_str), Some("commit:{"));
        assert_eq!(sink.events.len(), 7);
    }

    #[test]
    fn test_render_json_exact() {
        assert_eq!(
            render_json(&sample()).unwrap(),
            r#"{"commit":{"generation":42,"user_data":{"sync_id":"abc","history_uuid":null}}}"#
        );
    }

    #[test]
    fn test_render_json_empty_snapshot() {
        assert_eq!(
            render_json(&CommitSnapshot::empty()).unwrap(),
            r#"{"commit":{"generation":0,"user_data":{}}}"#
        );
    }

    #[test]
    fn test_render_value_matches_text() {
        let value = render_value(&sample()).unwrap();
        assert_eq!(value["commit"]["generation"], 42);
        assert_eq!(value["commit"]["user_data"]["sync_id"], "abc");
        assert!(value["commit"]["user_data"]["history_uuid"].is_null());
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            render_json(&sample()).unwrap()
        );
    }

    #[test]
    fn test_sink_failure_propagates_unchanged() {
        // 9 calls in total; fail at each position in turn
        for calls_left in 0..9 {
            let mut sink = FailingSink { calls_left };
            assert_eq!(render(&sample(), &mut sink), Err(Broken));
        }
        let mut sink = FailingSink { calls_left: 9 };
        assert_eq!(render(&sample(), &mut sink), Ok(()));
    }
}
