//! Rendering literals as `repr`-style text
//!
//! The output never contains a raw NUL byte: control characters inside
//! strings are always escaped.

use std::fmt::{self, Write};

use super::errors::{LiteralError, LiteralResult};
use super::value::Literal;

impl Literal {
    /// Renders the literal as parseable text.
    ///
    /// Fails only for non-finite floats, which have no literal form.
    pub fn to_text(&self) -> LiteralResult<String> {
        self.check_finite()?;
        Ok(self.to_string())
    }

    fn check_finite(&self) -> LiteralResult<()> {
        match self {
            Literal::Float(f) if !f.is_finite() => Err(LiteralError::NonFiniteFloat(*f)),
            Literal::List(items) | Literal::Tuple(items) => {
                items.iter().try_for_each(Literal::check_finite)
            }
            Literal::Dict(entries) => entries.iter().try_for_each(|(k, v)| {
                k.check_finite()?;
                v.check_finite()
            }),
            _ => Ok(()),
        }
    }
}

/// `Display` produces the same text as [`Literal::to_text`], except that
/// non-finite floats show as `nan`, `inf` and `-inf` (which do not parse).
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("None"),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write_float(f, *x),
            Literal::Str(s) => write_quoted(f, s),
            Literal::List(items) => {
                f.write_char('[')?;
                write_items(f, items)?;
                f.write_char(']')
            }
            Literal::Tuple(items) => {
                f.write_char('(')?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Literal::Dict(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else {
        // Debug keeps the shortest round-trip digits and always has a '.'
        // or an exponent, so the text reads back as a float.
        write!(f, "{:?}", x)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if c.is_control() || is_non_printable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    write!(f, "\\x{:02x}", code)?;
                } else if code <= 0xffff {
                    write!(f, "\\u{:04x}", code)?;
                } else {
                    write!(f, "\\U{:08x}", code)?;
                }
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Assigned code points outside the control range that `repr` still
/// escapes: separators other than the ASCII space, format characters
/// and private use. Unassigned code points are written raw.
const NON_PRINTABLE: &[(u32, u32)] = &[
    (0x00a0, 0x00a0),
    (0x00ad, 0x00ad),
    (0x0600, 0x0605),
    (0x061c, 0x061c),
    (0x06dd, 0x06dd),
    (0x070f, 0x070f),
    (0x0890, 0x0891),
    (0x08e2, 0x08e2),
    (0x1680, 0x1680),
    (0x180e, 0x180e),
    (0x2000, 0x200f),
    (0x2028, 0x202f),
    (0x205f, 0x2064),
    (0x2066, 0x206f),
    (0x3000, 0x3000),
    (0xe000, 0xf8ff),
    (0xfeff, 0xfeff),
    (0xfff9, 0xfffb),
    (0x110bd, 0x110bd),
    (0x110cd, 0x110cd),
    (0x13430, 0x1343f),
    (0x1bca0, 0x1bca3),
    (0x1d173, 0x1d17a),
    (0xe0001, 0xe0001),
    (0xe0020, 0xe007f),
    (0xf0000, 0xffffd),
    (0x100000, 0x10fffd),
];

fn is_non_printable(c: char) -> bool {
    let code = c as u32;
    NON_PRINTABLE
        .binary_search_by(|&(lo, hi)| {
            if hi < code {
                std::cmp::Ordering::Less
            } else if lo > code {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(Literal::None.to_string(), "None");
        assert_eq!(Literal::Bool(true).to_string(), "True");
        assert_eq!(Literal::Int(-42).to_string(), "-42");
        assert_eq!(Literal::Float(1.0).to_string(), "1.0");
        assert_eq!(Literal::Float(0.1).to_string(), "0.1");
    }

    #[test]
    fn test_render_string_quote_choice() {
        assert_eq!(Literal::from("plain").to_string(), "'plain'");
        assert_eq!(Literal::from("it's").to_string(), "\"it's\"");
        assert_eq!(
            Literal::from("both ' and \"").to_string(),
            "'both \\' and \"'"
        );
    }

    #[test]
    fn test_render_escapes_control_characters() {
        let s = Literal::from("a\0b\nc\x7f\u{85}");
        let text = s.to_string();
        assert_eq!(text, "'a\\x00b\\nc\\x7f\\x85'");
        assert!(!text.as_bytes().contains(&0));
    }

    #[test]
    fn test_render_escapes_non_printable_unicode() {
        assert_eq!(
            Literal::from("nb\u{a0}sp\u{2028}").to_string(),
            "'nb\\xa0sp\\u2028'"
        );
        assert_eq!(
            Literal::from("\u{ad}\u{200b}\u{feff}\u{e000}\u{e0041}").to_string(),
            "'\\xad\\u200b\\ufeff\\ue000\\U000e0041'"
        );
        // Neighbours of the escaped ranges stay raw.
        assert_eq!(
            Literal::from(" \u{9f}\u{a1}\u{2027}\u{2030}").to_string(),
            "' \\x9f\u{a1}\u{2027}\u{2030}'"
        );
    }

    #[test]
    fn test_non_printable_table_is_sorted() {
        for pair in NON_PRINTABLE.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn test_render_keeps_printable_unicode() {
        assert_eq!(Literal::from("Grüße ✓").to_string(), "'Grüße ✓'");
    }

    #[test]
    fn test_render_containers() {
        let value = Literal::dict([
            ("ids", Literal::from(vec![1, 2])),
            ("pair", Literal::Tuple(vec![Literal::None])),
            ("empty", Literal::Tuple(vec![])),
        ]);
        assert_eq!(
            value.to_string(),
            "{'ids': [1, 2], 'pair': (None,), 'empty': ()}"
        );
    }

    #[test]
    fn test_to_text_rejects_non_finite() {
        let value = Literal::from(vec![Literal::Float(f64::INFINITY)]);
        assert!(matches!(
            value.to_text(),
            Err(LiteralError::NonFiniteFloat(_))
        ));
        assert_eq!(value.to_string(), "[inf]");
    }
}
