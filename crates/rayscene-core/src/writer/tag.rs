//! Tag descriptors

use crate::value::Value;

/// One tag token: `<name a="1">`, `</name>` or `<name a="1" />`
///
/// Built with chained methods and handed to
/// [`TagWriter::write_tag`](super::TagWriter::write_tag). A `Tag` carries no
/// nesting state; matching opens and closes is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
    pub name: &'a str,
    /// `false` for a closing tag (`</name>`)
    pub opening: bool,
    /// Emit a line break before the tag
    pub newline: bool,
    /// Self-closing (`<name ... />`), no body and no close tag
    pub inline: bool,
    /// Indentation in units of two spaces
    pub depth: usize,
    /// Attributes in emission order
    pub attributes: Vec<(&'a str, Value)>,
}

impl<'a> Tag<'a> {
    /// An opening tag at depth 0 on the current line
    pub fn open(name: &'a str) -> Self {
        Self {
            name,
            opening: true,
            newline: false,
            inline: false,
            depth: 0,
            attributes: Vec::new(),
        }
    }

    /// A closing tag at depth 0 on the current line
    pub fn close(name: &'a str) -> Self {
        Self {
            opening: false,
            ..Self::open(name)
        }
    }

    /// Start the tag on a new line
    pub fn on_new_line(mut self) -> Self {
        self.newline = true;
        self
    }

    /// Make the tag self-closing
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Set the indentation depth
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Append an attribute
    pub fn attr(mut self, key: &'a str, value: impl Into<Value>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }
}
