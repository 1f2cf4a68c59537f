/// Width in bytes of the code point starting at `bytes[0]`.
///
/// Invalid or truncated sequences count as one byte, so a caller stepping
/// through arbitrary bytes always makes progress. Returns 0 only for an
/// empty slice.
pub(crate) fn char_width(bytes: &[u8]) -> usize {
    let Some(&lead) = bytes.first() else {
        return 0;
    };
    let width = match lead {
        0x00..=0x7F => return 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return 1,
    };
    match bytes.get(..width).map(std::str::from_utf8) {
        Some(Ok(_)) => width,
        _ => 1,
    }
}

pub(crate) fn encode_chars<I>(chars: I, initial_capacity: usize) -> Vec<u8>
where
    I: IntoIterator<Item = char>,
{
    let mut out = Vec::with_capacity(initial_capacity);
    let mut scratch = [0u8; 4];
    for ch in chars {
        out.extend_from_slice(ch.encode_utf8(&mut scratch).as_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_multibyte_widths() {
        assert_eq!(char_width(b""), 0);
        assert_eq!(char_width(b"a"), 1);
        assert_eq!(char_width("é".as_bytes()), 2);
        assert_eq!(char_width("日本".as_bytes()), 3);
        assert_eq!(char_width("🦀".as_bytes()), 4);
    }

    #[test]
    fn invalid_sequences_step_one_byte() {
        assert_eq!(char_width(&[0xFF, b'a']), 1);
        assert_eq!(char_width(&[0x80]), 1);
        // truncated three-byte sequence
        assert_eq!(char_width(&[0xE6, 0x97]), 1);
        // lead byte followed by a non-continuation byte
        assert_eq!(char_width(&[0xC3, b'a']), 1);
    }

    #[test]
    fn encodes_chars() {
        let bytes = encode_chars("añ🦀".chars(), 1);
        assert_eq!(bytes, "añ🦀".as_bytes());
    }
}
