//! Rendering of a single argument under one directive

use crate::arg::Arg;
use crate::float::{self, Size};
use crate::quote;

/// Flags, width and precision parsed from one directive
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Spec {
    pub plus: bool,
    pub minus: bool,
    pub sharp: bool,
    pub space: bool,
    pub zero: bool,
    /// `%#v`: Go-syntax representation
    pub sharp_v: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl Spec {
    /// Pad `s` to the width, on the left unless `-` was given
    fn pad(&self, out: &mut String, s: &str) {
        let Some(width) = self.width else {
            out.push_str(s);
            return;
        };
        let len = s.chars().count();
        if len >= width {
            out.push_str(s);
            return;
        }
        let fill = width - len;
        if self.minus {
            out.push_str(s);
            push_repeat(out, ' ', fill);
        } else {
            push_repeat(out, if self.zero { '0' } else { ' ' }, fill);
            out.push_str(s);
        }
    }

    /// Pad with spaces only, ignoring `0`
    fn pad_spaces(&self, out: &mut String, s: &str) {
        let spec = Self { zero: false, ..*self };
        spec.pad(out, s);
    }
}

fn push_repeat(out: &mut String, c: char, n: usize) {
    out.extend(std::iter::repeat_n(c, n));
}

/// Render `arg` for `verb`; false means the verb does not apply to the type
pub(crate) fn render(out: &mut String, arg: &Arg, verb: char, spec: &Spec) -> bool {
    match arg {
        Arg::Bool(b) => match verb {
            't' | 'v' => {
                spec.pad(out, if *b { "true" } else { "false" });
                true
            }
            _ => false,
        },
        Arg::Int(n) => integer(out, n.unsigned_abs(), *n < 0, true, verb, spec),
        Arg::Uint(n) => integer(out, *n, false, false, verb, spec),
        Arg::Char(c) => integer(out, u64::from(u32::from(*c)), false, true, verb, spec),
        Arg::Float(f) => float_verb(out, *f, Size::Bits64, verb, spec),
        Arg::Float32(f) => float_verb(out, f64::from(*f), Size::Bits32, verb, spec),
        Arg::Str(s) => string(out, s, verb, spec),
    }
}

/// Write the `%!verb(type=value)` token for a verb that does not fit `arg`
pub(crate) fn bad_verb(out: &mut String, arg: &Arg, verb: char, spec: &Spec) {
    out.push_str("%!");
    out.push(verb);
    out.push('(');
    out.push_str(arg.type_name());
    out.push('=');
    render(out, arg, 'v', spec);
    out.push(')');
}

/// First `precision` characters of `s`
fn truncate(s: &str, precision: Option<usize>) -> &str {
    match precision.and_then(|p| s.char_indices().nth(p)) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn string(out: &mut String, s: &str, verb: char, spec: &Spec) -> bool {
    match verb {
        'v' if spec.sharp_v => spec.pad(out, &quote::quote(truncate(s, spec.precision), false)),
        'v' | 's' => spec.pad(out, truncate(s, spec.precision)),
        'x' | 'X' => {
            let bytes = match spec.precision {
                Some(p) => &s.as_bytes()[..p.min(s.len())],
                None => s.as_bytes(),
            };
            spec.pad(out, &hex_bytes(bytes, verb == 'X', spec));
        }
        'q' => {
            let s = truncate(s, spec.precision);
            let quoted = if spec.sharp {
                quote::backquote(s).unwrap_or_else(|| quote::quote(s, spec.plus))
            } else {
                quote::quote(s, spec.plus)
            };
            spec.pad(out, &quoted);
        }
        _ => return false,
    }
    true
}

fn hex_bytes(bytes: &[u8], upper: bool, spec: &Spec) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    let (prefix, table) = if upper {
        ("0X", b"0123456789ABCDEF")
    } else {
        ("0x", b"0123456789abcdef")
    };
    for (i, b) in bytes.iter().enumerate() {
        if spec.space && i > 0 {
            out.push(' ');
        }
        if spec.sharp && (spec.space || i == 0) {
            out.push_str(prefix);
        }
        out.push(char::from(table[usize::from(b >> 4)]));
        out.push(char::from(table[usize::from(b & 0xf)]));
    }
    out
}

fn integer(out: &mut String, magnitude: u64, negative: bool, signed: bool, verb: char, spec: &Spec) -> bool {
    match verb {
        'v' if spec.sharp_v && !signed => spec.pad(out, &format!("0x{magnitude:x}")),
        'v' | 'd' => digits(out, magnitude, negative, 10, verb, spec),
        'b' => digits(out, magnitude, negative, 2, verb, spec),
        'o' | 'O' => digits(out, magnitude, negative, 8, verb, spec),
        'x' | 'X' => digits(out, magnitude, negative, 16, verb, spec),
        'c' => {
            let c = code_point(magnitude, negative);
            spec.pad(out, c.encode_utf8(&mut [0; 4]));
        }
        'q' => {
            let c = code_point(magnitude, negative);
            spec.pad(out, &quote::quote_char(c, spec.plus));
        }
        'U' => unicode(out, magnitude, negative, spec),
        _ => return false,
    }
    true
}

fn code_point(magnitude: u64, negative: bool) -> char {
    if negative {
        return char::REPLACEMENT_CHARACTER;
    }
    u32::try_from(magnitude)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn digits(out: &mut String, magnitude: u64, negative: bool, base: u32, verb: char, spec: &Spec) {
    // Explicit zero precision prints nothing for zero
    if spec.precision == Some(0) && magnitude == 0 {
        spec.pad_spaces(out, "");
        return;
    }

    let mut body = match base {
        2 => format!("{magnitude:b}"),
        8 => format!("{magnitude:o}"),
        16 if verb == 'X' => format!("{magnitude:X}"),
        16 => format!("{magnitude:x}"),
        _ => magnitude.to_string(),
    };

    let has_sign = negative || spec.plus || spec.space;
    let min_digits = match spec.precision {
        Some(p) => p,
        None if spec.zero && !spec.minus => spec
            .width
            .map_or(0, |w| w.saturating_sub(usize::from(has_sign))),
        None => 0,
    };
    if body.len() < min_digits {
        let mut padded = "0".repeat(min_digits - body.len());
        padded.push_str(&body);
        body = padded;
    }

    let mut s = String::with_capacity(body.len() + 3);
    if negative {
        s.push('-');
    } else if spec.plus {
        s.push('+');
    } else if spec.space {
        s.push(' ');
    }
    if verb == 'O' {
        s.push_str("0o");
    }
    if spec.sharp {
        match base {
            2 => s.push_str("0b"),
            8 if !body.starts_with('0') => s.push('0'),
            16 if verb == 'X' => s.push_str("0X"),
            16 => s.push_str("0x"),
            _ => {}
        }
    }
    s.push_str(&body);

    spec.pad_spaces(out, &s);
}

fn unicode(out: &mut String, magnitude: u64, negative: bool, spec: &Spec) {
    // Negative values print as their two's complement bit pattern
    let value = if negative { magnitude.wrapping_neg() } else { magnitude };
    let min_digits = spec.precision.unwrap_or(4).max(4);
    let mut s = format!("U+{value:0min_digits$X}");
    if spec.sharp {
        let c = code_point(magnitude, negative);
        if !negative && quote::is_printable(c) {
            s.push_str(" '");
            s.push(c);
            s.push('\'');
        }
    }
    spec.pad_spaces(out, &s);
}

fn float_verb(out: &mut String, value: f64, size: Size, verb: char, spec: &Spec) -> bool {
    let (verb, default_precision) = match verb {
        'v' => ('g', None),
        'g' | 'G' => (verb, None),
        'e' | 'E' | 'f' => (verb, Some(6)),
        'F' => ('f', Some(6)),
        _ => return false,
    };
    let precision = spec.precision.or(default_precision);
    let mut num = float::format(value, size, verb, precision);

    if spec.space && !spec.plus && num.starts_with('+') {
        num.replace_range(..1, " ");
    }

    if num[1..].starts_with('I') || num[1..].starts_with('N') {
        let shown = if num[1..].starts_with('N') && !spec.space && !spec.plus {
            &num[1..]
        } else {
            &num
        };
        spec.pad_spaces(out, shown);
        return true;
    }

    if spec.plus || !num.starts_with('+') {
        if let Some(width) = spec.width
            && spec.zero
            && !spec.minus
            && width > num.len()
        {
            out.push_str(&num[..1]);
            push_repeat(out, '0', width - num.len());
            out.push_str(&num[1..]);
            return true;
        }
        spec.pad(out, &num);
        return true;
    }

    spec.pad(out, &num[1..]);
    true
}
