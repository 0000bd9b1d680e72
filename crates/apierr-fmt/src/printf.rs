use crate::arg::Arg;
use crate::verb::{self, Spec};

/// Widths and precisions above this are rejected
const MAX_NUM: usize = 1_000_000;

/// Result of interpolating a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Interpolated text, including any `%!` error tokens
    pub text: String,
    /// False when a directive and its argument did not line up
    pub clean: bool,
}

/// Interpolate `args` into `template` using printf-style directives
///
/// Never fails: mismatches between directives and arguments are written
/// into the output as `%!` tokens (`%!d(string=x)`, `%!s(MISSING)`,
/// `%!(EXTRA int=1)`, ...).
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    sprintf_checked(template, args).text
}

/// Like [`sprintf`], also reporting whether any error token was written
pub fn sprintf_checked(template: &str, args: &[Arg]) -> Formatted {
    let mut printer = Printer {
        template,
        bytes: template.as_bytes(),
        args,
        out: String::with_capacity(template.len() + 16 * args.len()),
        clean: true,
        reordered: false,
        good_arg_num: true,
    };
    printer.run();

    Formatted {
        text: printer.out,
        clean: printer.clean,
    }
}

struct Printer<'a> {
    template: &'a str,
    bytes: &'a [u8],
    args: &'a [Arg],
    out: String,
    clean: bool,
    /// An explicit `[n]` index was used somewhere
    reordered: bool,
    /// The current directive's index was valid
    good_arg_num: bool,
}

impl Printer<'_> {
    fn run(&mut self) {
        let end = self.bytes.len();
        let mut arg_num = 0;
        let mut i = 0;

        while i < end {
            self.good_arg_num = true;
            let literal_start = i;
            while i < end && self.bytes[i] != b'%' {
                i += 1;
            }
            if i > literal_start {
                self.out.push_str(&self.template[literal_start..i]);
            }
            if i >= end {
                break;
            }
            i += 1;

            let mut spec = Spec::default();
            while i < end {
                match self.bytes[i] {
                    b'#' => spec.sharp = true,
                    b'0' => spec.zero = !spec.minus,
                    b'+' => spec.plus = true,
                    b'-' => {
                        spec.minus = true;
                        spec.zero = false;
                    }
                    b' ' => spec.space = true,
                    _ => break,
                }
                i += 1;
            }

            let mut after_index;
            (arg_num, i, after_index) = self.arg_number(arg_num, i);

            if i < end && self.bytes[i] == b'*' {
                i += 1;
                let (width, next) = self.int_from_arg(arg_num);
                arg_num = next;
                match width {
                    Some(w) if w < 0 => {
                        spec.minus = true;
                        spec.zero = false;
                        spec.width = Some(w.unsigned_abs().try_into().unwrap_or(MAX_NUM));
                    }
                    Some(w) => spec.width = Some(w.try_into().unwrap_or(MAX_NUM)),
                    None => self.error("%!(BADWIDTH)"),
                }
                after_index = false;
            } else {
                let (width, next) = parse_num(self.bytes, i);
                spec.width = width;
                i = next;
                if after_index && width.is_some() {
                    self.good_arg_num = false;
                }
            }

            if i + 1 < end && self.bytes[i] == b'.' {
                i += 1;
                if after_index {
                    self.good_arg_num = false;
                }
                (arg_num, i, after_index) = self.arg_number(arg_num, i);
                if i < end && self.bytes[i] == b'*' {
                    i += 1;
                    let (precision, next) = self.int_from_arg(arg_num);
                    arg_num = next;
                    match precision {
                        Some(p) if p >= 0 => spec.precision = Some(p.try_into().unwrap_or(MAX_NUM)),
                        _ => self.error("%!(BADPREC)"),
                    }
                    after_index = false;
                } else {
                    let (precision, next) = parse_num(self.bytes, i);
                    spec.precision = Some(precision.unwrap_or(0));
                    i = next;
                }
            }

            if !after_index {
                (arg_num, i, _) = self.arg_number(arg_num, i);
            }

            if i >= end {
                self.error("%!(NOVERB)");
                break;
            }

            let Some(verb) = self.template[i..].chars().next() else {
                break;
            };
            i += verb.len_utf8();

            match verb {
                '%' => self.out.push('%'),
                _ if !self.good_arg_num => self.error(&format!("%!{verb}(BADINDEX)")),
                _ if arg_num >= self.args.len() => self.error(&format!("%!{verb}(MISSING)")),
                'w' => {
                    // Error wrapping has no meaning outside an error constructor
                    self.clean = false;
                    verb::bad_verb(&mut self.out, &self.args[arg_num], verb, &spec);
                    arg_num += 1;
                }
                _ => {
                    if verb == 'v' {
                        spec.sharp_v = spec.sharp;
                        spec.sharp = false;
                        spec.plus = false;
                    }
                    let arg = &self.args[arg_num];
                    if !verb::render(&mut self.out, arg, verb, &spec) {
                        self.clean = false;
                        verb::bad_verb(&mut self.out, arg, verb, &spec);
                    }
                    arg_num += 1;
                }
            }
        }

        if !self.reordered && arg_num < self.args.len() {
            self.clean = false;
            self.out.push_str("%!(EXTRA ");
            for (n, arg) in self.args[arg_num..].iter().enumerate() {
                if n > 0 {
                    self.out.push_str(", ");
                }
                self.out.push_str(arg.type_name());
                self.out.push('=');
                verb::render(&mut self.out, arg, 'v', &Spec::default());
            }
            self.out.push(')');
        }
    }

    fn error(&mut self, token: &str) {
        self.clean = false;
        self.out.push_str(token);
    }

    /// Consume an optional `[n]` index at `i`
    ///
    /// Returns the argument to use next, the new position, and whether an
    /// index was present.
    fn arg_number(&mut self, arg_num: usize, i: usize) -> (usize, usize, bool) {
        if i >= self.bytes.len() || self.bytes[i] != b'[' {
            return (arg_num, i, false);
        }
        self.reordered = true;

        let (index, width, ok) = parse_arg_number(&self.bytes[i..]);
        if let Some(index) = index
            && ok
            && index < self.args.len()
        {
            return (index, i + width, true);
        }
        self.good_arg_num = false;
        (arg_num, i + width, ok)
    }

    /// Read an integer argument for `*`, advancing past it either way
    fn int_from_arg(&self, arg_num: usize) -> (Option<i64>, usize) {
        match self.args.get(arg_num) {
            Some(arg) => {
                let value = arg.as_star().filter(|n| n.unsigned_abs() <= MAX_NUM as u64);
                (value, arg_num + 1)
            }
            None => (None, arg_num),
        }
    }
}

/// Parse `[n]` at the start of `s`: zero-based index, bytes consumed, validity
fn parse_arg_number(s: &[u8]) -> (Option<usize>, usize, bool) {
    if s.len() < 3 {
        return (None, 1, false);
    }
    for close in 1..s.len() {
        if s[close] == b']' {
            let (num, next) = parse_num(s, 1);
            return match num {
                Some(n) if next == close => (n.checked_sub(1), close + 1, true),
                _ => (None, close + 1, false),
            };
        }
    }
    (None, 1, false)
}

/// Parse a run of ASCII digits starting at `start`
///
/// An oversized number consumes the rest of the input and yields nothing.
fn parse_num(s: &[u8], start: usize) -> (Option<usize>, usize) {
    let mut num: usize = 0;
    let mut found = false;
    let mut i = start;
    while i < s.len() && s[i].is_ascii_digit() {
        if num > MAX_NUM {
            return (None, s.len());
        }
        num = num * 10 + usize::from(s[i] - b'0');
        found = true;
        i += 1;
    }
    (found.then_some(num), i)
}
