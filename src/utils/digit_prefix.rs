/// Length of the leading run of non-digit characters, i.e. the index of the
/// first ASCII digit, or `characters.len()` when there's no digit at all.
///
/// ```not_rust
/// "$1,000" -> 1
/// "-€5"    -> 2
/// "n/a"    -> 3
/// ```
pub fn digit_prefix_len(characters: &[char]) -> usize {
    characters
        .iter()
        .position(char::is_ascii_digit)
        .unwrap_or(characters.len())
}
