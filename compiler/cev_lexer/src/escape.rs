//! Escape-sequence processing for string and byte-string literals.

/// Why a literal body could not be unescaped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EscapeError {
    /// `\x`, `\u` or `\U` not followed by enough hex digits.
    TruncatedHex,
    /// `\u`/`\U` naming a value that is not a Unicode scalar.
    InvalidCodePoint,
    /// A non-ASCII character inside a byte-string literal.
    NonAsciiByte,
}

/// Split a raw literal slice into its prefix flags and quoted body.
///
/// Returns `(is_raw, body)`; the caller has already checked the slice shape.
pub(crate) fn split_literal(slice: &str) -> (bool, &str) {
    let quote = slice.find(['"', '\'']).unwrap_or(0);
    let prefix = &slice[..quote];
    let is_raw = prefix.contains(['r', 'R']);
    let body = slice.get(quote + 1..slice.len() - 1).unwrap_or("");
    (is_raw, body)
}

/// Destination for decoded literal content.
trait Sink {
    fn push_char(&mut self, c: char) -> Result<(), EscapeError>;
    fn push_byte(&mut self, b: u8) -> Result<(), EscapeError>;
    const ALLOWS_UNICODE_ESCAPES: bool;
}

impl Sink for String {
    fn push_char(&mut self, c: char) -> Result<(), EscapeError> {
        self.push(c);
        Ok(())
    }

    // `\xHH` in a text literal names the code point U+00HH.
    fn push_byte(&mut self, b: u8) -> Result<(), EscapeError> {
        self.push(char::from(b));
        Ok(())
    }

    const ALLOWS_UNICODE_ESCAPES: bool = true;
}

impl Sink for Vec<u8> {
    fn push_char(&mut self, c: char) -> Result<(), EscapeError> {
        let b = u8::try_from(c).map_err(|_| EscapeError::NonAsciiByte)?;
        if !b.is_ascii() {
            return Err(EscapeError::NonAsciiByte);
        }
        self.push(b);
        Ok(())
    }

    fn push_byte(&mut self, b: u8) -> Result<(), EscapeError> {
        self.push(b);
        Ok(())
    }

    const ALLOWS_UNICODE_ESCAPES: bool = false;
}

fn read_hex(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
) -> Result<u32, EscapeError> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(EscapeError::TruncatedHex)?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn unescape_into<S: Sink>(body: &str, out: &mut S) -> Result<(), EscapeError> {
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push_char(c)?;
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push_char('\\')?;
            break;
        };
        match escaped {
            '\\' | '\'' | '"' => out.push_char(escaped)?,
            'n' => out.push_char('\n')?,
            't' => out.push_char('\t')?,
            'r' => out.push_char('\r')?,
            'a' => out.push_byte(0x07)?,
            'b' => out.push_byte(0x08)?,
            'f' => out.push_byte(0x0c)?,
            'v' => out.push_byte(0x0b)?,
            'x' => {
                let value = read_hex(&mut chars, 2)?;
                // Two hex digits always fit in a byte.
                out.push_byte(value as u8)?;
            }
            'u' | 'U' if S::ALLOWS_UNICODE_ESCAPES => {
                let digits = if escaped == 'u' { 4 } else { 8 };
                let value = read_hex(&mut chars, digits)?;
                let c = char::from_u32(value).ok_or(EscapeError::InvalidCodePoint)?;
                out.push_char(c)?;
            }
            '0'..='7' => {
                let mut value = escaped.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // At most three octal digits: 0o777 wraps like the host language.
                out.push_byte((value & 0xff) as u8)?;
            }
            // Unknown escapes keep their backslash.
            other => {
                out.push_char('\\')?;
                out.push_char(other)?;
            }
        }
    }
    Ok(())
}

/// Decode the body of a text literal.
pub fn unescape_str(body: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(body.len());
    unescape_into(body, &mut out)?;
    Ok(out)
}

/// Decode the body of a byte-string literal.
pub fn unescape_bytes(body: &str) -> Result<Vec<u8>, EscapeError> {
    let mut out = Vec::with_capacity(body.len());
    unescape_into(body, &mut out)?;
    Ok(out)
}

/// Bytes of a raw byte-string body, which must be ASCII.
pub fn raw_bytes(body: &str) -> Result<Vec<u8>, EscapeError> {
    if body.is_ascii() {
        Ok(body.as_bytes().to_vec())
    } else {
        Err(EscapeError::NonAsciiByte)
    }
}
