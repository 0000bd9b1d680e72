//! Wire encodings of [`ErrorPayload`]
//!
//! The JSON and XML layouts are fixed by existing consumers: JSON uses
//! `statusCode`, XML uses `status_code`, and both call the label `error`.

use std::io;

use serde::Serialize;

use crate::format::Format;
use crate::payload::ErrorPayload;

/// Declaration written before the XML root element
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

impl ErrorPayload {
    /// Plain text: `<code> <label>: <message>` without a trailing newline
    pub fn to_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Compact JSON object with keys `statusCode`, `error`, `message` in order
    ///
    /// `<`, `>`, `&`, U+2028 and U+2029 are written as `\u` escapes so the
    /// output can be embedded in HTML.
    pub fn to_json(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64 + self.error().len() + self.message().len());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
        self.serialize(&mut serializer)
            .expect("serializing a number and two strings cannot fail");
        buf
    }

    /// XML document with an `<error>` root holding `status_code`, `error`, `message`
    pub fn to_xml(&self) -> Vec<u8> {
        let mut out = String::with_capacity(128 + self.error().len() + self.message().len());
        out.push_str(XML_HEADER);
        out.push_str("<error><status_code>");
        out.push_str(&self.status_code().to_string());
        out.push_str("</status_code><error>");
        escape_xml_text(&mut out, self.error());
        out.push_str("</error><message>");
        escape_xml_text(&mut out, self.message());
        out.push_str("</message></error>");
        out.into_bytes()
    }

    /// Render in the given format
    pub fn render(&self, format: Format) -> Vec<u8> {
        match format {
            Format::Text => self.to_text(),
            Format::Json => self.to_json(),
            Format::Xml => self.to_xml(),
        }
    }
}

/// Compact JSON output that also escapes HTML-sensitive characters
struct HtmlSafeFormatter;

impl serde_json::ser::Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;

        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(&bytes[start..i])?;
            writer.write_all(escaped.as_bytes())?;
            start = i + c.len_utf8();
        }

        writer.write_all(&bytes[start..])
    }
}

/// Escape text content; characters XML 1.0 cannot carry become U+FFFD
fn escape_xml_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if is_xml_char(c) => out.push(c),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
}

const fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{20}'..='\u{d7ff}' | '\u{e000}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}
