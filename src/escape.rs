/// Decoding of C-style escapes in command-line operands.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown escape '\\{escape}' at byte {offset}")]
    UnknownEscape { escape: char, offset: usize },
    #[error("'\\x' at byte {offset} must be followed by two hex digits")]
    TruncatedHex { offset: usize },
    #[error("trailing backslash at byte {offset}")]
    TrailingBackslash { offset: usize },
}

/// Turns `\0`, `\\`, `\n`, `\t`, `\r` and `\xHH` into their byte values.
/// Everything else is copied through as UTF-8.
pub fn decode_operand(text: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;

    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte != b'\\' {
            out.push(byte);
            idx += 1;
            continue;
        }

        let offset = idx;
        let escape = match bytes.get(idx + 1) {
            Some(escape) => *escape,
            None => return Err(DecodeError::TrailingBackslash { offset }),
        };

        match escape {
            b'0' => out.push(0),
            b'\\' => out.push(b'\\'),
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'x' => {
                let high = bytes.get(idx + 2).and_then(|b| hex_value(*b));
                let low = bytes.get(idx + 3).and_then(|b| hex_value(*b));
                match (high, low) {
                    (Some(high), Some(low)) => out.push((high << 4) | low),
                    _ => return Err(DecodeError::TruncatedHex { offset }),
                }
                idx += 4;
                continue;
            }
            _ => {
                let escape = text[idx + 1..].chars().next().unwrap_or('?');
                return Err(DecodeError::UnknownEscape { escape, offset });
            }
        }

        idx += 2;
    }

    Ok(out)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
