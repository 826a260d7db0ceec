//! Recursive descent parser for the literal grammar
//!
//! Accepts what `repr` produces plus the common hand-written variations:
//! `u`/`r` string prefixes, adjacent string concatenation, hex/octal/binary
//! integers, `_` digit separators, trailing commas and free whitespace.

use super::errors::{LiteralError, LiteralResult};
use super::value::{is_hashable, DictBuilder, Literal};

/// Containers nested deeper than this are rejected instead of recursing on.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses one literal. The whole input must be consumed, apart from
/// surrounding whitespace.
pub fn parse(input: &str) -> LiteralResult<Literal> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(LiteralError::TrailingInput { offset: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(found) => LiteralError::UnexpectedChar {
                found,
                offset: self.pos,
            },
            None => LiteralError::UnexpectedEnd { offset: self.pos },
        }
    }

    fn expect(&mut self, wanted: char) -> LiteralResult<()> {
        if self.peek() == Some(wanted) {
            self.pos += wanted.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_value(&mut self, depth: usize) -> LiteralResult<Literal> {
        if depth > MAX_NESTING_DEPTH {
            return Err(LiteralError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                offset: self.pos,
            });
        }

        if self.string_prefix_len().is_some() {
            return self.parse_strings();
        }

        match self.peek() {
            Some('[') => self.parse_list(depth),
            Some('(') => self.parse_parenthesized(depth),
            Some('{') => self.parse_dict(depth),
            Some('+') | Some('-') => self.parse_signed_number(),
            Some(c) if c.is_ascii_digit() => self.parse_number(false),
            Some('.') if matches!(self.peek_nth(1), Some(d) if d.is_ascii_digit()) => {
                self.parse_number(false)
            }
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_name(),
            _ => Err(self.unexpected()),
        }
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    /// Parses comma separated values up to `close`, allowing a trailing
    /// comma. The opening bracket has already been consumed.
    fn parse_items(&mut self, close: char, depth: usize) -> LiteralResult<Vec<Literal>> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(items);
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(c) if c == close => {}
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_list(&mut self, depth: usize) -> LiteralResult<Literal> {
        self.expect('[')?;
        Ok(Literal::List(self.parse_items(']', depth)?))
    }

    /// `()` is the empty tuple, `(x)` is just `x`, `(x,)` and `(x, y)` are
    /// tuples.
    fn parse_parenthesized(&mut self, depth: usize) -> LiteralResult<Literal> {
        self.expect('(')?;
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.pos += 1;
            return Ok(Literal::Tuple(Vec::new()));
        }

        let first = self.parse_value(depth + 1)?;
        self.skip_whitespace();
        match self.peek() {
            Some(')') => {
                self.pos += 1;
                Ok(first)
            }
            Some(',') => {
                self.pos += 1;
                let mut items = vec![first];
                items.extend(self.parse_items(')', depth)?);
                Ok(Literal::Tuple(items))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_dict(&mut self, depth: usize) -> LiteralResult<Literal> {
        let start = self.pos;
        self.expect('{')?;
        let mut entries = DictBuilder::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(entries.finish());
            }

            let key_start = self.pos;
            let key = self.parse_value(depth + 1)?;
            self.skip_whitespace();
            match self.peek() {
                Some(':') => self.pos += 1,
                Some(',') | Some('}') if entries.is_empty() => {
                    return Err(LiteralError::Unsupported {
                        what: "set literal".to_string(),
                        offset: start,
                    });
                }
                _ => return Err(self.unexpected()),
            }
            if !is_hashable(&key) {
                return Err(LiteralError::Unsupported {
                    what: format!("unhashable dict key of type {}", key.kind()),
                    offset: key_start,
                });
            }

            self.skip_whitespace();
            let value = self.parse_value(depth + 1)?;
            entries.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('}') => {}
                _ => return Err(self.unexpected()),
            }
        }
    }

    // ------------------------------------------------------------------
    // Names
    // ------------------------------------------------------------------

    fn parse_name(&mut self) -> LiteralResult<Literal> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }

        let name = &self.input[start..self.pos];
        match name {
            "None" => Ok(Literal::None),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            _ => {
                let what = match self.peek() {
                    Some('\'') | Some('"') => format!("string prefix {:?}", name),
                    Some('(') => format!("call to {:?}", name),
                    _ => format!("name {:?}", name),
                };
                Err(LiteralError::Unsupported {
                    what,
                    offset: start,
                })
            }
        }
    }

    // ------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------

    fn parse_signed_number(&mut self) -> LiteralResult<Literal> {
        let negative = self.bump() == Some('-');
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c.is_ascii_digit() || c == '.' => self.parse_number(negative),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_number(&mut self, negative: bool) -> LiteralResult<Literal> {
        let start = self.pos;
        let radix = match self.rest().get(..2) {
            Some("0x") | Some("0X") => Some(16),
            Some("0o") | Some("0O") => Some(8),
            Some("0b") | Some("0B") => Some(2),
            _ => None,
        };

        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign =
                (c == '+' || c == '-') && (prev == 'e' || prev == 'E') && radix.is_none();
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                self.pos += 1;
                prev = c;
            } else {
                break;
            }
        }

        let text = &self.input[start..self.pos];
        let invalid = || LiteralError::InvalidNumber {
            text: text.to_string(),
            offset: start,
        };

        if text.ends_with('j') || text.ends_with('J') {
            return Err(LiteralError::Unsupported {
                what: "complex number".to_string(),
                offset: start,
            });
        }
        if !valid_underscores(text) {
            return Err(invalid());
        }
        let digits: String = text.chars().filter(|c| *c != '_').collect();

        if let Some(radix) = radix {
            let body = &digits[2..];
            if body.is_empty() {
                return Err(invalid());
            }
            return to_int(i128::from_str_radix(body, radix), negative, text, start);
        }

        let is_float = digits.contains(|c| matches!(c, '.' | 'e' | 'E'));
        if is_float {
            if !digits
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
            {
                return Err(invalid());
            }
            let value: f64 = digits.parse().map_err(|_| invalid())?;
            return Ok(Literal::Float(if negative { -value } else { value }));
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        // Decimal integers other than zero may not carry leading zeros.
        if digits.len() > 1 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
            return Err(invalid());
        }
        to_int(digits.parse::<i128>(), negative, text, start)
    }

    // ------------------------------------------------------------------
    // Strings
    // ------------------------------------------------------------------

    /// Length of the prefix in front of a string quote at the current
    /// position (`'x'` → 0, `u'x'` → 1), or `None` if no string starts here.
    fn string_prefix_len(&self) -> Option<usize> {
        match (self.peek(), self.peek_nth(1)) {
            (Some('\'') | Some('"'), _) => Some(0),
            (Some('u' | 'U' | 'r' | 'R'), Some('\'' | '"')) => Some(1),
            _ => None,
        }
    }

    /// Parses one or more adjacent string literals and concatenates them.
    fn parse_strings(&mut self) -> LiteralResult<Literal> {
        let mut out = String::new();
        loop {
            self.parse_string_into(&mut out)?;
            let before = self.pos;
            self.skip_whitespace();
            if self.string_prefix_len().is_none() {
                self.pos = before;
                return Ok(Literal::Str(out));
            }
        }
    }

    fn parse_string_into(&mut self, out: &mut String) -> LiteralResult<()> {
        let raw = match self.peek() {
            Some('r') | Some('R') => {
                self.pos += 1;
                true
            }
            Some('u') | Some('U') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let start = self.pos;
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(LiteralError::UnexpectedEnd { offset: start }),
        };
        let triple: String = std::iter::repeat(quote).take(2).collect();
        if self.rest().starts_with(&triple) {
            return Err(LiteralError::Unsupported {
                what: "triple-quoted string".to_string(),
                offset: start,
            });
        }

        loop {
            let offset = self.pos;
            match self.bump() {
                None => return Err(LiteralError::UnexpectedEnd { offset }),
                Some(c) if c == quote => return Ok(()),
                Some('\n') => {
                    return Err(LiteralError::UnexpectedChar {
                        found: '\n',
                        offset,
                    })
                }
                Some('\\') if raw => {
                    out.push('\\');
                    match self.bump() {
                        Some(c) => out.push(c),
                        None => return Err(LiteralError::UnexpectedEnd { offset: self.pos }),
                    }
                }
                Some('\\') => self.parse_escape_into(out, offset)?,
                Some(c) => out.push(c),
            }
        }
    }

    /// Decodes the escape after a backslash at `offset`.
    fn parse_escape_into(&mut self, out: &mut String, offset: usize) -> LiteralResult<()> {
        let c = match self.bump() {
            Some(c) => c,
            None => return Err(LiteralError::UnexpectedEnd { offset: self.pos }),
        };

        match c {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            self.pos += 1;
                        }
                        None => break,
                    }
                }
                out.push(to_char(code, offset)?);
            }
            'x' => out.push(self.parse_hex_escape(2, offset)?),
            'u' => out.push(self.parse_hex_escape(4, offset)?),
            'U' => out.push(self.parse_hex_escape(8, offset)?),
            'N' => {
                return Err(LiteralError::Unsupported {
                    what: "named unicode escape".to_string(),
                    offset,
                })
            }
            // Unknown escapes keep the backslash.
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn parse_hex_escape(&mut self, len: usize, offset: usize) -> LiteralResult<char> {
        let digits = self
            .rest()
            .get(..len)
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or(LiteralError::InvalidEscape {
                offset,
                reason: "truncated hex escape",
            })?;
        let code = u32::from_str_radix(digits, 16).map_err(|_| LiteralError::InvalidEscape {
            offset,
            reason: "truncated hex escape",
        })?;
        self.pos += len;
        to_char(code, offset)
    }
}

fn to_char(code: u32, offset: usize) -> LiteralResult<char> {
    char::from_u32(code).ok_or(LiteralError::InvalidEscape {
        offset,
        reason: "not a unicode scalar value",
    })
}

fn to_int(
    parsed: Result<i128, std::num::ParseIntError>,
    negative: bool,
    text: &str,
    offset: usize,
) -> LiteralResult<Literal> {
    let magnitude = parsed.map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            LiteralError::IntegerOverflow {
                text: text.to_string(),
                offset,
            }
        }
        _ => LiteralError::InvalidNumber {
            text: text.to_string(),
            offset,
        },
    })?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value)
        .map(Literal::Int)
        .map_err(|_| LiteralError::IntegerOverflow {
            text: text.to_string(),
            offset,
        })
}

/// Underscores must sit between two digits.
fn valid_underscores(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.iter().enumerate().all(|(i, c)| {
        *c != '_'
            || (i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_alphanumeric()
                && chars[i + 1].is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Literal {
        Literal::from(value)
    }

    #[test]
    fn test_parse_constants() {
        assert_eq!(parse("None").unwrap(), Literal::None);
        assert_eq!(parse(" True ").unwrap(), Literal::Bool(true));
        assert_eq!(parse("False").unwrap(), Literal::Bool(false));
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse("0").unwrap(), Literal::Int(0));
        assert_eq!(parse("-17").unwrap(), Literal::Int(-17));
        assert_eq!(parse("+5").unwrap(), Literal::Int(5));
        assert_eq!(parse("- 3").unwrap(), Literal::Int(-3));
        assert_eq!(parse("1_000_000").unwrap(), Literal::Int(1_000_000));
        assert_eq!(parse("0xff").unwrap(), Literal::Int(255));
        assert_eq!(parse("0o17").unwrap(), Literal::Int(15));
        assert_eq!(parse("-0b101").unwrap(), Literal::Int(-5));
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Literal::Int(i64::MIN)
        );
    }

    #[test]
    fn test_parse_integer_overflow() {
        assert!(matches!(
            parse("9223372036854775808"),
            Err(LiteralError::IntegerOverflow { .. })
        ));
        assert!(matches!(
            parse("123456789012345678901234567890123456789012"),
            Err(LiteralError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_numbers() {
        assert!(matches!(parse("01"), Err(LiteralError::InvalidNumber { .. })));
        assert!(matches!(parse("1__0"), Err(LiteralError::InvalidNumber { .. })));
        assert!(matches!(parse("12abc"), Err(LiteralError::InvalidNumber { .. })));
        assert!(matches!(parse("0x"), Err(LiteralError::InvalidNumber { .. })));
        assert!(matches!(parse("3j"), Err(LiteralError::Unsupported { .. })));
        assert_eq!(parse("00").unwrap(), Literal::Int(0));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse("1.5").unwrap(), Literal::Float(1.5));
        assert_eq!(parse("-0.25").unwrap(), Literal::Float(-0.25));
        assert_eq!(parse(".5").unwrap(), Literal::Float(0.5));
        assert_eq!(parse("2.").unwrap(), Literal::Float(2.0));
        assert_eq!(parse("1e+16").unwrap(), Literal::Float(1e16));
        assert_eq!(parse("1.5e-07").unwrap(), Literal::Float(1.5e-7));
        assert_eq!(parse("1_0.5").unwrap(), Literal::Float(10.5));
    }

    #[test]
    fn test_parse_strings_and_escapes() {
        assert_eq!(parse("'abc'").unwrap(), s("abc"));
        assert_eq!(parse("\"it's\"").unwrap(), s("it's"));
        assert_eq!(parse(r"'a\'b'").unwrap(), s("a'b"));
        assert_eq!(parse(r"'\n\t\\'").unwrap(), s("\n\t\\"));
        assert_eq!(parse(r"'\x00\x7f'").unwrap(), s("\0\x7f"));
        assert_eq!(parse(r"'\u00fc\U0001F600'").unwrap(), s("ü😀"));
        assert_eq!(parse(r"'\101\0'").unwrap(), s("A\0"));
        assert_eq!(parse(r"'\d'").unwrap(), s("\\d"));
        assert_eq!(parse("u'unicode'").unwrap(), s("unicode"));
        assert!(parse(r"r'C:\temp\'").is_err());
        assert_eq!(parse(r"r'C:\temp'").unwrap(), s("C:\\temp"));
        assert_eq!(parse("'Grüße'").unwrap(), s("Grüße"));
    }

    #[test]
    fn test_parse_adjacent_strings_concatenate() {
        assert_eq!(parse("'ab' \"cd\"  u'ef'").unwrap(), s("abcdef"));
        assert_eq!(
            parse("['a' 'b', 'c']").unwrap(),
            Literal::List(vec![s("ab"), s("c")])
        );
    }

    #[test]
    fn test_parse_string_errors() {
        assert!(matches!(
            parse("'unterminated"),
            Err(LiteralError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            parse("'line\nbreak'"),
            Err(LiteralError::UnexpectedChar { found: '\n', .. })
        ));
        assert!(matches!(
            parse(r"'\x4'"),
            Err(LiteralError::InvalidEscape { .. })
        ));
        assert!(matches!(
            parse("'''doc'''"),
            Err(LiteralError::Unsupported { .. })
        ));
        assert!(matches!(
            parse("b'bytes'"),
            Err(LiteralError::Unsupported { .. })
        ));
        assert_eq!(parse("''").unwrap(), s(""));
    }

    #[test]
    fn test_parse_containers() {
        assert_eq!(parse("[]").unwrap(), Literal::List(vec![]));
        assert_eq!(
            parse("[1, [2, 3],]").unwrap(),
            Literal::List(vec![
                Literal::Int(1),
                Literal::List(vec![Literal::Int(2), Literal::Int(3)])
            ])
        );
        assert_eq!(parse("()").unwrap(), Literal::Tuple(vec![]));
        assert_eq!(parse("(1)").unwrap(), Literal::Int(1));
        assert_eq!(parse("(1,)").unwrap(), Literal::Tuple(vec![Literal::Int(1)]));
        assert_eq!(
            parse("(1, 'a')").unwrap(),
            Literal::Tuple(vec![Literal::Int(1), s("a")])
        );
        assert_eq!(
            parse("{'a': 1, 2: None, (1, 2): [],}").unwrap(),
            Literal::Dict(vec![
                (s("a"), Literal::Int(1)),
                (Literal::Int(2), Literal::None),
                (
                    Literal::Tuple(vec![Literal::Int(1), Literal::Int(2)]),
                    Literal::List(vec![])
                ),
            ])
        );
    }

    #[test]
    fn test_parse_dict_duplicate_keys_last_wins() {
        assert_eq!(
            parse("{'a': 1, 'b': 2, 'a': 3}").unwrap(),
            Literal::dict([("a", 3), ("b", 2)])
        );
    }

    #[test]
    fn test_parse_dict_merges_equal_numeric_keys() {
        assert_eq!(
            parse("{True: 1, 1: 2}").unwrap(),
            Literal::Dict(vec![(Literal::Bool(true), Literal::Int(2))])
        );
        assert_eq!(
            parse("{1.0: 'a', 1: 'b'}").unwrap(),
            Literal::Dict(vec![(Literal::Float(1.0), s("b"))])
        );
        assert_eq!(
            parse("{(1, 'x'): 1, (True, 'x'): 2, 0: 3, False: 4}").unwrap(),
            Literal::Dict(vec![
                (Literal::Tuple(vec![Literal::Int(1), s("x")]), Literal::Int(2)),
                (Literal::Int(0), Literal::Int(4)),
            ])
        );
    }

    #[test]
    fn test_parse_dict_rejects_unhashable_keys() {
        assert!(matches!(
            parse("{'a': 1, [1]: 2}"),
            Err(LiteralError::Unsupported { offset: 9, .. })
        ));
        assert!(matches!(
            parse("{(1, {}): 2}"),
            Err(LiteralError::Unsupported { offset: 1, .. })
        ));
    }

    #[test]
    fn test_parse_large_dict_in_linear_time() {
        let n = 100_000;
        let body: Vec<String> = (0..n).map(|i| format!("{}: {}", i, i)).collect();
        let text = format!("{{{}, 0: -1}}", body.join(", "));

        let started = std::time::Instant::now();
        let value = parse(&text).unwrap();
        let elapsed = started.elapsed();

        let entries = value.as_dict().unwrap();
        assert_eq!(entries.len(), n);
        assert_eq!(entries[0], (Literal::Int(0), Literal::Int(-1)));
        assert_eq!(entries[n - 1].1, Literal::Int(n as i64 - 1));
        // Quadratic key checks take minutes at this size, even optimized.
        assert!(
            elapsed < std::time::Duration::from_secs(10),
            "parsing {} keys took {:?}",
            n,
            elapsed
        );
    }

    #[test]
    fn test_parse_whitespace_and_newlines_inside_containers() {
        assert_eq!(
            parse("{\n  'a': [\n    1,\n  ],\n}\n").unwrap(),
            Literal::dict([("a", Literal::from(vec![1]))])
        );
    }

    #[test]
    fn test_parse_rejects_code() {
        assert!(matches!(
            parse("__import__('os')"),
            Err(LiteralError::Unsupported { .. })
        ));
        assert!(matches!(parse("{1, 2}"), Err(LiteralError::Unsupported { .. })));
        assert!(matches!(parse("1 + 2"), Err(LiteralError::TrailingInput { .. })));
        assert!(matches!(parse("--1"), Err(LiteralError::UnexpectedChar { .. })));
        assert!(matches!(parse(""), Err(LiteralError::UnexpectedEnd { .. })));
        assert!(matches!(parse("[1 2]"), Err(LiteralError::UnexpectedChar { .. })));
    }

    #[test]
    fn test_parse_depth_limit() {
        let ok = format!("{}{}", "[".repeat(MAX_NESTING_DEPTH), "]".repeat(MAX_NESTING_DEPTH));
        assert!(parse(&ok).is_ok());

        let deep = format!(
            "{}{}",
            "[".repeat(MAX_NESTING_DEPTH + 2),
            "]".repeat(MAX_NESTING_DEPTH + 2)
        );
        assert!(matches!(parse(&deep), Err(LiteralError::TooDeep { .. })));
    }

    #[test]
    fn test_render_then_parse_preserves_value() {
        let value = Literal::dict([
            ("text", Literal::from("quote ' \" and \\ and \0 and \u{2028}")),
            ("float", Literal::Float(-1.25e-10)),
            ("big", Literal::Int(i64::MAX)),
            (
                "nested",
                Literal::Tuple(vec![Literal::None, Literal::Bool(false)]),
            ),
        ]);
        let text = value.to_text().unwrap();
        assert_eq!(parse(&text).unwrap(), value);
    }
}
