//! Graph utility functions and helpers.

/// Longest product label drawn under a bar before it is truncated.
pub const MAX_LABEL_CHARS: usize = 18;

/// Upper bound of the value axis, leaving headroom for the labels drawn
/// above the bars.
pub fn axis_ceiling(max_value: u64) -> u64 {
    let headroom = max_value.div_ceil(6).max(1);
    max_value.saturating_add(headroom)
}
