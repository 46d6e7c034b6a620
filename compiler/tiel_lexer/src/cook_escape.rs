//! String literal scanning and escape processing.
//!
//! Valid escapes: `\"` `\\` `\n` `\t` `\r` `\0`. Strings may span lines.

/// Outcome of scanning a string body. All offsets are relative to the byte
/// after the opening quote; `consumed` includes the closing quote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StringScan {
    Closed {
        cooked: String,
        consumed: usize,
    },
    Unterminated {
        consumed: usize,
    },
    InvalidEscape {
        escape: char,
        offset: usize,
        consumed: usize,
    },
}

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Scan from just after an opening `"` up to and including the closing `"`.
pub(crate) fn scan_string(rest: &str) -> StringScan {
    let mut cooked = String::new();
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                return StringScan::Closed {
                    cooked,
                    consumed: i + 1,
                }
            }
            '\\' => match chars.next() {
                Some((j, escaped)) => match resolve_escape(escaped) {
                    Some(resolved) => cooked.push(resolved),
                    None => {
                        return StringScan::InvalidEscape {
                            escape: escaped,
                            offset: i,
                            consumed: j + escaped.len_utf8(),
                        }
                    }
                },
                None => break,
            },
            c => cooked.push(c),
        }
    }

    StringScan::Unterminated {
        consumed: rest.len(),
    }
}

#[cfg(test)]
mod tests;
