//! Profile color palette.

/// Color names a user's stored palette index maps onto.
pub const PROFILE_COLORS: [&str; 9] = [
    "red", "brown", "orange", "yellow", "mint", "green", "aqua", "blue", "purple",
];

/// Color used when a user has no usable palette index.
pub const FALLBACK_COLOR: &str = "green";

/// Maps a stored palette index to a color name.
///
/// Registration draws indices from 0 to 9 inclusive, one past the end of the
/// palette, so out-of-range values are expected and map to the fallback.
pub fn color_for(index: Option<i64>) -> &'static str {
    index
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| PROFILE_COLORS.get(i).copied())
        .unwrap_or(FALLBACK_COLOR)
}
