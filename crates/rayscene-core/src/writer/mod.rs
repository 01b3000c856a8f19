//! Nested-tag document writer
//!
//! [`TagWriter`] is a pure formatter: it writes tags, leaf groups and raw
//! values with two-space indentation and never inspects what it writes.
//! Well-formed nesting is the caller's contract.
//!
//! Output layout, for reference:
//!
//! ```text
//! <scene>
//!   <image>800 600</image>
//!
//!   <camera>
//!     <viewPoint>10 4.8 6</viewPoint>
//!     ...
//!   </camera>
//! ```

mod tag;

pub use tag::Tag;

use crate::Result;
use crate::value::Value;
use std::io::Write;

/// XML declaration written by [`TagWriter::write_preamble`]
pub const PREAMBLE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

const INDENT: &str = "  ";

/// Streams well-formed nested tags into an owned sink
///
/// The writer owns its sink for the whole document. [`TagWriter::close`]
/// flushes and hands it back; on an error path the sink is simply dropped
/// with the writer. I/O errors are returned immediately and partial output
/// is left as is.
pub struct TagWriter<W: Write> {
    sink: W,
}

impl<W: Write> TagWriter<W> {
    /// Wrap a sink; nothing is written yet
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write the one-line XML declaration
    pub fn write_preamble(&mut self) -> Result<()> {
        writeln!(self.sink, "{}", PREAMBLE)?;
        Ok(())
    }

    /// Write a single tag token
    pub fn write_tag(&mut self, tag: &Tag<'_>) -> Result<()> {
        if tag.newline {
            writeln!(self.sink)?;
        }
        self.write_indent(tag.depth)?;

        self.sink.write_all(b"<")?;
        if !tag.opening {
            self.sink.write_all(b"/")?;
        }
        self.sink.write_all(tag.name.as_bytes())?;
        for (key, value) in &tag.attributes {
            write!(self.sink, " {}=\"{}\"", key, value)?;
        }
        if tag.inline {
            self.sink.write_all(b" /")?;
        }
        self.sink.write_all(b">")?;
        Ok(())
    }

    /// Write `<key>value</key>` on its own line for every entry, then a
    /// blank line
    pub fn write_leaf_group<I, K>(&mut self, entries: I, depth: usize) -> Result<()>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        for (key, value) in entries {
            let key = key.as_ref();
            self.write_tag(&Tag::open(key).on_new_line().depth(depth))?;
            self.write_text(&value)?;
            self.write_tag(&Tag::close(key))?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    /// Write a value as raw text, without escaping
    pub fn write_text(&mut self, value: &Value) -> Result<()> {
        write!(self.sink, "{}", value)?;
        Ok(())
    }

    /// Finish the document with a line break and return the flushed sink
    pub fn close(mut self) -> Result<W> {
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Borrow the sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    fn write_indent(&mut self, depth: usize) -> Result<()> {
        for _ in 0..depth {
            self.sink.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }
}
