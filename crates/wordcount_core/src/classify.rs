/// Whitespace in the C locale sense: space, `\t`, `\n`, vertical tab, form feed, `\r`.
///
/// Classification is on the unsigned byte value, so nothing at or above 0x80
/// is ever a separator.
pub fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
