//! Quoting for `%q`

/// Whether a character prints as itself inside a quoted literal
///
/// ASCII space counts as printable; every other whitespace or control
/// character is escaped.
pub(crate) fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || c == '\u{feff}' || ('\u{200b}'..='\u{200f}').contains(&c))
}

/// Quote `s` with `delim` as the delimiter, escaping it and backslashes
///
/// With `ascii_only` every non-ASCII character is written as `\u`/`\U`.
pub(crate) fn quote_with(s: &str, delim: char, ascii_only: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        push_escaped(&mut out, c, delim, ascii_only);
    }
    out.push(delim);
    out
}

/// Double-quoted string literal
pub(crate) fn quote(s: &str, ascii_only: bool) -> String {
    quote_with(s, '"', ascii_only)
}

/// Single-quoted character literal
pub(crate) fn quote_char(c: char, ascii_only: bool) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    push_escaped(&mut out, c, '\'', ascii_only);
    out.push('\'');
    out
}

/// Raw backquoted literal, if `s` can be written as one
///
/// Any non-ASCII character except the BOM is allowed; of ASCII, control
/// characters other than tab and the backquote itself are not.
pub(crate) fn backquote(s: &str) -> Option<String> {
    let ok = s
        .chars()
        .all(|c| c != '`' && c != '\u{7f}' && c != '\u{feff}' && (c >= ' ' || c == '\t'));
    ok.then(|| format!("`{s}`"))
}

fn push_escaped(out: &mut String, c: char, delim: char, ascii_only: bool) {
    if c == delim || c == '\\' {
        out.push('\\');
        out.push(c);
        return;
    }

    if ascii_only {
        if c.is_ascii() && is_printable(c) {
            out.push(c);
            return;
        }
    } else if is_printable(c) {
        out.push(c);
        return;
    }

    match c {
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0b}' => out.push_str("\\v"),
        c if c < ' ' || c == '\u{7f}' => push_hex(out, "\\x", u32::from(c), 2),
        c if u32::from(c) <= 0xffff => push_hex(out, "\\u", u32::from(c), 4),
        c => push_hex(out, "\\U", u32::from(c), 8),
    }
}

/// Write `prefix` then `value` as `width` lowercase hex digits
fn push_hex(out: &mut String, prefix: &str, value: u32, width: u32) {
    out.push_str(prefix);
    for shift in (0..width).rev() {
        let nibble = (value >> (shift * 4)) & 0xf;
        out.push(char::from_digit(nibble, 16).unwrap_or('0'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_controls() {
        assert_eq!(quote("say \"hi\"\n", false), r#""say \"hi\"\n""#);
        assert_eq!(quote("\u{1}", false), r#""\x01""#);
    }

    #[test]
    fn keeps_printable_unicode_unless_ascii_only() {
        assert_eq!(quote("héllo", false), "\"héllo\"");
        assert_eq!(quote("héllo", true), r#""h\u00e9llo""#);
        assert_eq!(quote("😀", true), r#""\U0001f600""#);
    }

    #[test]
    fn char_literal_escapes_single_quote() {
        assert_eq!(quote_char('\'', false), r"'\''");
        assert_eq!(quote_char('x', false), "'x'");
    }

    #[test]
    fn backquote_rejects_newlines() {
        assert_eq!(backquote("a\tb").as_deref(), Some("`a\tb`"));
        assert_eq!(backquote("a\nb"), None);
        assert_eq!(backquote("a\u{7f}"), None);
        assert_eq!(backquote("tick`"), None);
    }

    #[test]
    fn backquote_accepts_non_ascii_except_bom() {
        assert_eq!(backquote("a\u{a0}b").as_deref(), Some("`a\u{a0}b`"));
        assert_eq!(backquote("line\u{2028}sep").as_deref(), Some("`line\u{2028}sep`"));
        assert_eq!(backquote("\u{feff}x"), None);
    }
}
