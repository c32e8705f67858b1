//! Numeral formatting for counter values.

/// Widest numeral `pad` will produce. Larger requested widths are clamped.
pub const MAX_WIDTH: usize = 256;

/// Number of decimal digits needed to print `value`.
///
/// Zero is one digit wide.
#[must_use]
pub fn decimal_width(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Left-pads `value` with `'0'` up to `width` characters.
///
/// Values already wider than `width` are returned in full, never truncated.
/// `width` is clamped to [`MAX_WIDTH`].
#[must_use]
pub fn pad(value: u64, width: usize) -> String {
    let width = width.min(MAX_WIDTH);
    format!("{value:0>width$}")
}
