use std::fmt;

/// A value that can be interpolated into a message template
///
/// Integer widths collapse into `Int`/`Uint`; characters behave like the
/// 32-bit code points they are (`%d` prints the number, `%c` the glyph).
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Text, printed with `%s`, `%q`, `%x`, `%v`
    Str(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    Uint(u64),
    /// Floating point number
    Float(f64),
    /// Single-precision float, printed with its own shortest digits
    Float32(f32),
    /// Boolean, printed with `%t` or `%v`
    Bool(bool),
    /// Unicode code point
    Char(char),
}

impl Arg {
    /// Capture any `Display` value as text
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }

    /// Type name used inside error tokens such as `%!d(string=hi)`
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Float32(_) => "float32",
            Self::Bool(_) => "bool",
            Self::Char(_) => "int32",
        }
    }

    /// Integer value usable as a `*` width or precision
    pub(crate) fn as_star(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Uint(n) => i64::try_from(*n).ok(),
            Self::Char(c) => Some(i64::from(u32::from(*c))),
            Self::Str(_) | Self::Float(_) | Self::Float32(_) | Self::Bool(_) => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Uint(u64::from(value))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Arg {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}
