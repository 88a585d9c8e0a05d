//! Masking of personal data in debug output.

/// Character substituted for hidden characters.
pub const MASK: char = '*';

/// Hide all but the first and last `keep` characters of `value`.
///
/// Values no longer than `2 * keep` characters are masked in full. The
/// result always has the same number of characters as the input.
///
/// # Examples
/// ```
/// use directory_backend::domain::mask::mask;
///
/// assert_eq!(mask("H P Lovecraft", 2), "H *********ft");
/// assert_eq!(mask("Name", 2), "****");
/// ```
#[must_use]
pub fn mask(value: &str, keep: usize) -> String {
    let length = value.chars().count();
    if length <= keep.saturating_mul(2) {
        return std::iter::repeat_n(MASK, length).collect();
    }
    let tail_start = length - keep;
    value
        .chars()
        .enumerate()
        .map(|(index, character)| {
            if index < keep || index >= tail_start {
                character
            } else {
                MASK
            }
        })
        .collect()
}
