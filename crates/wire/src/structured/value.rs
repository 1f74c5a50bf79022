//! In-memory tree sink

use super::error::SinkError;
use super::StructuredSink;
use serde_json::{Map, Value};

/// Builds a `serde_json::Value` tree
///
/// Objects keep fields in the order they were written.
#[derive(Debug, Default)]
pub struct ValueSink {
    // Open objects, innermost last, each with the field name it will be
    // stored under in its parent (None for the root)
    stack: Vec<(Option<String>, Map<String, Value>)>,
    root: Option<Value>,
}

impl ValueSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the completed tree
    pub fn finish(self) -> Result<Value, SinkError> {
        if !self.stack.is_empty() {
            return Err(SinkError::UnclosedObjects(self.stack.len()));
        }
        self.root.ok_or(SinkError::NothingWritten)
    }

    fn current(&mut self) -> Result<&mut Map<String, Value>, SinkError> {
        self.stack
            .last_mut()
            .map(|(_, map)| map)
            .ok_or(SinkError::NoOpenObject)
    }
}

impl StructuredSink for ValueSink {
    type Error = SinkError;

    fn start_object(&mut self) -> Result<(), SinkError> {
        if !self.stack.is_empty() {
            return Err(SinkError::AnonymousNested);
        }
        self.stack.push((None, Map::new()));
        Ok(())
    }

    fn start_object_field(&mut self, name: &str) -> Result<(), SinkError> {
        if self.stack.is_empty() {
            return Err(SinkError::NoOpenObject);
        }
        self.stack.push((Some(name.to_owned()), Map::new()));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), SinkError> {
        let (name, map) = self.stack.pop().ok_or(SinkError::NoOpenObject)?;
        match (name, self.stack.last_mut()) {
            (Some(name), Some((_, parent))) => {
                parent.insert(name, Value::Object(map));
            }
            _ => self.root = Some(Value::Object(map)),
        }
        Ok(())
    }

    fn field_i64(&mut self, name: &str, value: i64) -> Result<(), SinkError> {
        self.current()?.insert(name.to_owned(), Value::from(value));
        Ok(())
    }

    fn field_str(&mut self, name: &str, value: Option<&str>) -> Result<(), SinkError> {
        let value = value.map_or(Value::Null, Value::from);
        self.current()?.insert(name.to_owned(), value);
        Ok(())
    }
}
