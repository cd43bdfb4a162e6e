//! XML escaping and the line-oriented element builder.
//!
//! The Annex IV consumer parses an exact tree shape, so the builder is
//! deliberately dumb: one element per line, two-space indentation per
//! nesting level, no reordering, no pretty-printing options.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Escape the five reserved XML characters.
///
/// Single pass over the input, so an `&` produced by an earlier
/// substitution can never be escaped twice. Total; never fails.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A value that can be rendered as the text content of an element.
///
/// Strings are escaped; numbers, booleans and dates stringify to output
/// that contains no reserved characters.
pub trait XmlText {
    fn push_xml(&self, buf: &mut String);
}

impl XmlText for &str {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(&escape(self));
    }
}

impl XmlText for String {
    fn push_xml(&self, buf: &mut String) {
        self.as_str().push_xml(buf);
    }
}

impl XmlText for f64 {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}

impl XmlText for u32 {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}

impl XmlText for u64 {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}

impl XmlText for bool {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(if *self { "true" } else { "false" });
    }
}

impl XmlText for Decimal {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}

impl XmlText for NaiveDate {
    fn push_xml(&self, buf: &mut String) {
        buf.push_str(&self.format("%Y-%m-%d").to_string());
    }
}

/// Line-oriented XML document builder.
///
/// Starts with the XML declaration; tracks nesting depth so every element
/// lands at the right indentation. [`XmlWriter::finish`] returns the
/// document without a trailing newline, ending on the last close tag.
#[derive(Debug)]
pub struct XmlWriter {
    buf: String,
    depth: usize,
}

impl XmlWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    /// Open a container element.
    pub fn open(&mut self, name: &str) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(name);
        self.buf.push_str(">\n");
        self.depth += 1;
    }

    /// Open a container element with one attribute per line, the shape the
    /// Annex IV root element uses. Attribute values are escaped individually.
    pub fn open_multiline(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(name);
        self.buf.push('\n');
        for (i, (key, value)) in attrs.iter().enumerate() {
            self.depth += 1;
            self.indent();
            self.depth -= 1;
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
            if i + 1 == attrs.len() {
                self.buf.push('>');
            }
            self.buf.push('\n');
        }
        self.depth += 1;
    }

    /// Close the most recently opened container.
    pub fn close(&mut self, name: &str) {
        self.depth -= 1;
        self.indent();
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push_str(">\n");
    }

    /// Emit a leaf element with escaped text content.
    pub fn leaf(&mut self, name: &str, value: impl XmlText) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(name);
        self.buf.push('>');
        value.push_xml(&mut self.buf);
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push_str(">\n");
    }

    /// Emit a leaf element, self-closing when the value is absent.
    ///
    /// `None` renders as `<Name/>`, never as the literal text "null".
    pub fn leaf_opt(&mut self, name: &str, value: Option<impl XmlText>) {
        match value {
            Some(v) => self.leaf(name, v),
            None => {
                self.indent();
                self.buf.push('<');
                self.buf.push_str(name);
                self.buf.push_str("/>\n");
            }
        }
    }

    /// Emit an XML comment with escaped text.
    pub fn comment(&mut self, text: &str) {
        self.indent();
        self.buf.push_str("<!-- ");
        self.buf.push_str(&escape(text));
        self.buf.push_str(" -->\n");
    }

    /// Consume the builder and return the document.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.buf.pop();
        self.buf
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
