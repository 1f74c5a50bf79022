//! JSON text sink

use super::error::SinkError;
use super::StructuredSink;
use std::io::Write;

/// Formatting options for [`JsonSink`]
///
/// ```
/// use commit_stats_wire::JsonOptions;
///
/// let opts = JsonOptions::new().pretty(true).indent(4);
/// assert!(opts.is_pretty());
/// ```
#[derive(Debug, Clone)]
pub struct JsonOptions {
    pretty: bool,
    indent: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

impl JsonOptions {
    /// Compact output, indent width 2 when pretty printing is enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one field per line
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Spaces per nesting level in pretty mode
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Whether pretty printing is enabled
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

/// Writes structured output as JSON text to any `io::Write`
///
/// Keys and string values are escaped with `serde_json`. Pretty output uses
/// the same layout as `serde_json::to_string_pretty`.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    options: JsonOptions,
    // One entry per open object: whether it has received a field yet
    scopes: Vec<bool>,
    wrote_any: bool,
}

impl<W: Write> JsonSink<W> {
    /// Compact JSON to `writer`
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, JsonOptions::default())
    }

    /// JSON to `writer` using `options`
    pub fn with_options(writer: W, options: JsonOptions) -> Self {
        Self {
            writer,
            options,
            scopes: Vec::new(),
            wrote_any: false,
        }
    }

    /// Flush and return the writer
    ///
    /// Fails if objects are still open or nothing was written.
    pub fn finish(mut self) -> Result<W, SinkError> {
        if !self.scopes.is_empty() {
            return Err(SinkError::UnclosedObjects(self.scopes.len()));
        }
        if !self.wrote_any {
            return Err(SinkError::NothingWritten);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn newline_indent(&mut self, depth: usize) -> Result<(), SinkError> {
        if self.options.pretty {
            write!(self.writer, "\n{:width$}", "", width = depth * self.options.indent)?;
        }
        Ok(())
    }

    /// Separator and key for the next field of the innermost object
    fn begin_field(&mut self, name: &str) -> Result<(), SinkError> {
        let depth = self.scopes.len();
        let has_fields = self.scopes.last_mut().ok_or(SinkError::NoOpenObject)?;
        let first = !*has_fields;
        *has_fields = true;

        if !first {
            self.writer.write_all(b",")?;
        }
        self.newline_indent(depth)?;
        self.write_escaped(name)?;
        let colon: &[u8] = if self.options.pretty { b": " } else { b":" };
        self.writer.write_all(colon)?;
        Ok(())
    }

    fn write_escaped(&mut self, s: &str) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, s).map_err(std::io::Error::from)?;
        Ok(())
    }
}

impl<W: Write> StructuredSink for JsonSink<W> {
    type Error = SinkError;

    fn start_object(&mut self) -> Result<(), SinkError> {
        if !self.scopes.is_empty() {
            return Err(SinkError::AnonymousNested);
        }
        self.writer.write_all(b"{")?;
        self.scopes.push(false);
        self.wrote_any = true;
        Ok(())
    }

    fn start_object_field(&mut self, name: &str) -> Result<(), SinkError> {
        self.begin_field(name)?;
        self.writer.write_all(b"{")?;
        self.scopes.push(false);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), SinkError> {
        let has_fields = self.scopes.pop().ok_or(SinkError::NoOpenObject)?;
        if has_fields {
            let depth = self.scopes.len();
            self.newline_indent(depth)?;
        }
        self.writer.write_all(b"}")?;
        Ok(())
    }

    fn field_i64(&mut self, name: &str, value: i64) -> Result<(), SinkError> {
        self.begin_field(name)?;
        write!(self.writer, "{value}")?;
        Ok(())
    }

    fn field_str(&mut self, name: &str, value: Option<&str>) -> Result<(), SinkError> {
        self.begin_field(name)?;
        match value {
            Some(s) => self.write_escaped(s),
            None => {
                self.writer.write_all(b"null")?;
                Ok(())
            }
        }
    }
}
