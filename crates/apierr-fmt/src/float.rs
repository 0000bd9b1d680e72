//! Float rendering for `%e`, `%f`, `%g` and `%v`
//!
//! Output always carries an explicit leading sign (`+` or `-`) so the caller
//! can decide whether to keep it. Non-finite values render as `+Inf`, `-Inf`
//! and `+NaN`.

/// Width of the value being formatted
///
/// Shortest output depends on it: an `f32` widened to `f64` is exact, but
/// its shortest round-trip digits are those of the narrower type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Size {
    Bits32,
    Bits64,
}

/// Decimal digits of a float: `0.d1d2d3... * 10^point`
struct Digits {
    digits: Vec<u8>,
    point: i32,
}

impl Digits {
    /// Parse the output of Rust's `{:e}` formatting (e.g. `1.2345e-7`)
    fn from_exp(formatted: &str) -> Self {
        let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted, "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        while digits.len() > 1 && digits.last() == Some(&b'0') {
            digits.pop();
        }

        Self { digits, point: exp + 1 }
    }

    /// Shortest digits that round-trip at `size`
    #[allow(clippy::cast_possible_truncation)]
    fn shortest(value: f64, size: Size) -> Self {
        match size {
            // Only reached for values that started out as f32
            Size::Bits32 => Self::from_exp(&format!("{:e}", value as f32)),
            Size::Bits64 => Self::from_exp(&format!("{value:e}")),
        }
    }

    /// Digits rounded to `precision` significant figures
    fn rounded(value: f64, precision: usize) -> Self {
        let p = precision.saturating_sub(1);
        Self::from_exp(&format!("{value:.p$e}"))
    }

    fn len(&self) -> i32 {
        i32::try_from(self.digits.len()).unwrap_or(i32::MAX)
    }

    fn digit(&self, index: i32) -> u8 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.digits.get(i).copied())
            .unwrap_or(b'0')
    }

    fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == b'0')
    }

    /// `d.ddd` followed by the exponent, `precision` digits after the point
    fn exponent_form(&self, precision: i32, upper: bool) -> String {
        let mut out = String::new();
        out.push(char::from(self.digit(0)));
        if precision > 0 {
            out.push('.');
            for i in 1..=precision {
                out.push(char::from(self.digit(i)));
            }
        }
        let exp = if self.is_zero() { 0 } else { self.point - 1 };
        push_exponent(&mut out, exp, upper);
        out
    }

    /// Fixed-point form with `precision` digits after the point
    fn fixed_form(&self, precision: i32) -> String {
        let mut out = String::new();
        if self.point > 0 {
            for i in 0..self.point {
                out.push(char::from(self.digit(i)));
            }
        } else {
            out.push('0');
        }
        if precision > 0 {
            out.push('.');
            for i in 1..=precision {
                out.push(char::from(self.digit(self.point + i - 1)));
            }
        }
        out
    }
}

fn push_exponent(out: &mut String, exp: i32, upper: bool) {
    out.push(if upper { 'E' } else { 'e' });
    out.push(if exp < 0 { '-' } else { '+' });
    let magnitude = exp.unsigned_abs();
    if magnitude < 10 {
        out.push('0');
    }
    out.push_str(&magnitude.to_string());
}

/// Rewrite Rust's exponent suffix (`e7`, `e-7`) into `e+07`, `e-07`
fn fix_exponent(formatted: &str, upper: bool) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let mut out = mantissa.to_owned();
            push_exponent(&mut out, exp.parse().unwrap_or(0), upper);
            out
        }
        None => formatted.to_owned(),
    }
}

/// Format `value` for one of the float verbs
///
/// `precision` is `None` for the shortest representation. The result always
/// starts with a sign character.
pub(crate) fn format(value: f64, size: Size, verb: char, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "+NaN".to_owned();
    }
    let sign = if value.is_sign_negative() { '-' } else { '+' };
    if value.is_infinite() {
        return format!("{sign}Inf");
    }

    let abs = value.abs();
    let body = match verb {
        'e' | 'E' => {
            let upper = verb == 'E';
            match precision {
                Some(p) => fix_exponent(&format!("{abs:.p$e}"), upper),
                None => fix_exponent(&format!("{abs:e}"), upper),
            }
        }
        'f' | 'F' => match precision {
            Some(p) => format!("{abs:.p$}"),
            None => format!("{abs}"),
        },
        _ => general(abs, size, precision, verb == 'G'),
    };

    let mut out = String::with_capacity(body.len() + 1);
    out.push(sign);
    out.push_str(&body);
    out
}

/// `%g`: exponent form for large or small exponents, fixed form otherwise
fn general(abs: f64, size: Size, precision: Option<usize>, upper: bool) -> String {
    let (digits, mut prec, shortest) = match precision {
        None => {
            let digits = Digits::shortest(abs, size);
            let prec = digits.len();
            (digits, prec, true)
        }
        Some(p) => {
            let p = p.max(1);
            (Digits::rounded(abs, p), i32::try_from(p).unwrap_or(i32::MAX), false)
        }
    };

    let mut eprec = prec;
    if eprec > digits.len() && digits.len() >= digits.point {
        eprec = digits.len();
    }
    if shortest {
        eprec = 6;
    }

    let exp = digits.point - 1;
    if exp < -4 || exp >= eprec {
        if prec > digits.len() {
            prec = digits.len();
        }
        return digits.exponent_form(prec - 1, upper);
    }

    if prec > digits.point {
        prec = digits.len();
    }
    digits.fixed_form((prec - digits.point).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_64(value: f64, verb: char, precision: Option<usize>) -> String {
        format(value, Size::Bits64, verb, precision)
    }

    #[test]
    fn shortest_general_switches_to_exponent_at_seven_digits() {
        assert_eq!(format_64(100_000.0, 'g', None), "+100000");
        assert_eq!(format_64(1_000_000.0, 'g', None), "+1e+06");
        assert_eq!(format_64(1_234_567.0, 'g', None), "+1.234567e+06");
        assert_eq!(format_64(0.0001, 'g', None), "+0.0001");
        assert_eq!(format_64(0.000_01, 'g', None), "+1e-05");
    }

    #[test]
    fn general_with_precision() {
        assert_eq!(format_64(2.345_67, 'g', Some(3)), "+2.35");
        assert_eq!(format_64(1234.5, 'g', Some(2)), "+1.2e+03");
        assert_eq!(format_64(0.0, 'g', Some(3)), "+0");
        assert_eq!(format_64(100.0, 'g', Some(3)), "+100");
    }

    #[test]
    fn exponent_and_fixed_defaults() {
        assert_eq!(format_64(1234.5678, 'e', Some(6)), "+1.234568e+03");
        assert_eq!(format_64(-1234.5678, 'E', Some(2)), "-1.23E+03");
        assert_eq!(format_64(2.5, 'f', Some(6)), "+2.500000");
        assert_eq!(format_64(-0.0, 'f', Some(1)), "-0.0");
    }

    #[test]
    fn single_precision_shortest_digits() {
        let value = f64::from(0.1_f32);
        assert_eq!(format(value, Size::Bits32, 'g', None), "+0.1");
        assert_eq!(format_64(value, 'g', None), "+0.10000000149011612");
        assert_eq!(format(f64::from(1e-7_f32), Size::Bits32, 'g', None), "+1e-07");
        assert_eq!(format(value, Size::Bits32, 'f', Some(3)), "+0.100");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_64(f64::INFINITY, 'g', None), "+Inf");
        assert_eq!(format_64(f64::NEG_INFINITY, 'f', Some(2)), "-Inf");
        assert_eq!(format_64(f64::NAN, 'e', Some(2)), "+NaN");
    }
}
