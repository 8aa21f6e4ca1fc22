//! Text form of vectors: `"x/y"` and `"x/y/z"`
//!
//! Two readers share the format. The lenient one reproduces the classic
//! `atof` behaviour (numeric prefix of each field, zero vector when a
//! separator is missing). The strict one backs `FromStr` and reports
//! a [`ParseVectorError`].

use std::fmt;
use std::str::FromStr;

/// Separator used when none is given
pub const DEFAULT_SEPARATOR: &str = "/";

/// Error returned by the strict vector parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVectorError {
    /// The separator string was empty
    EmptySeparator,
    /// Fewer fields than components
    MissingComponent { expected: usize, found: usize },
    /// More fields than components
    TrailingComponent { expected: usize },
    /// A field is not a number of the component type
    InvalidComponent { index: usize, text: String },
}

impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseVectorError::EmptySeparator => write!(f, "Vector separator is empty"),
            ParseVectorError::MissingComponent { expected, found } => write!(
                f,
                "Vector has {} components, expected {}",
                found, expected
            ),
            ParseVectorError::TrailingComponent { expected } => {
                write!(f, "Vector has more than {} components", expected)
            }
            ParseVectorError::InvalidComponent { index, text } => {
                write!(f, "Vector component {} is not a number: {:?}", index, text)
            }
        }
    }
}

impl std::error::Error for ParseVectorError {}

/// Length of the longest prefix of `s` that reads as a decimal float,
/// an infinity or a NaN
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let end = i + word.len();
        if end <= bytes.len() && bytes[i..end].eq_ignore_ascii_case(word.as_bytes()) {
            return end;
        }
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Reads a number the way C `atof` does: leading whitespace is skipped,
/// the longest numeric prefix is used and anything unreadable is 0.
///
/// `inf`, `infinity` and `nan` are accepted in any case. Hexadecimal
/// floats are not, and read as 0.
pub fn read_leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let len = numeric_prefix_len(s);
    s[..len].parse().unwrap_or(0.0)
}

/// Lenient split into `N` fields.
///
/// Returns `None` when one of the `N - 1` separators is missing. Field 0 is
/// read from the start of the string, every other field from just after
/// its separator.
pub(crate) fn read_lenient<const N: usize>(s: &str, separator: &str) -> Option<[f64; N]> {
    let mut values = [0.0; N];
    if N == 0 {
        return Some(values);
    }

    values[0] = read_leading_number(s);
    let mut cursor = 0;
    for value in values.iter_mut().skip(1) {
        let found = s[cursor..].find(separator)?;
        cursor += found + separator.len();
        *value = read_leading_number(&s[cursor..]);
    }

    Some(values)
}

/// Strict split into exactly `N` fields, each parsed as `T`
pub(crate) fn read_strict<T: FromStr, const N: usize>(
    s: &str,
    separator: &str,
) -> Result<[T; N], ParseVectorError> {
    if separator.is_empty() {
        return Err(ParseVectorError::EmptySeparator);
    }

    let fields: Vec<&str> = s.split(separator).collect();
    if fields.len() < N {
        return Err(ParseVectorError::MissingComponent {
            expected: N,
            found: fields.len(),
        });
    }
    if fields.len() > N {
        return Err(ParseVectorError::TrailingComponent { expected: N });
    }

    let mut values = Vec::with_capacity(N);
    for (index, field) in fields.iter().enumerate() {
        let value = field
            .trim()
            .parse::<T>()
            .map_err(|_| ParseVectorError::InvalidComponent {
                index,
                text: field.to_string(),
            })?;
        values.push(value);
    }

    values
        .try_into()
        .map_err(|_| ParseVectorError::MissingComponent {
            expected: N,
            found: fields.len(),
        })
}
