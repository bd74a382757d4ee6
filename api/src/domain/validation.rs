//! Field validation rules
//!
//! Lengths are counted in Unicode scalar values, so "あ" is one character.
//! Values are checked exactly as given; nothing is trimmed or normalised.

use std::ops::RangeInclusive;

/// Category name: 1 to 32 characters
pub const CATEGORY_NAME_LEN: RangeInclusive<usize> = 1..=32;

/// Product name: 1 to 10 characters
pub const PRODUCT_NAME_LEN: RangeInclusive<usize> = 1..=10;

/// Product description: 1 to 50 characters
pub const PRODUCT_DESCRIPTION_LEN: RangeInclusive<usize> = 1..=50;

/// User email: 1 to 50 characters
pub const USER_EMAIL_LEN: RangeInclusive<usize> = 1..=50;

/// User name: 1 to 10 characters
pub const USER_NAME_LEN: RangeInclusive<usize> = 1..=10;

/// Check that `value` has a character count inside `bounds` (inclusive on both ends)
pub fn length_within(value: &str, bounds: &RangeInclusive<usize>) -> bool {
    bounds.contains(&value.chars().count())
}
