//! Emoji code-point table
//!
//! The table is deliberately broad and its entries overlap. A code point is
//! emoji if it falls inside any entry, whatever it actually depicts.

/// Inclusive `(low, high)` code-point ranges treated as emoji.
///
/// Single code points are stored as one-element ranges.
pub static EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x1F1E0, 0x1F1FF), // regional indicators (flags)
    (0x2500, 0x2BEF),   // box drawing through misc symbols and arrows
    (0x2702, 0x27B0),   // dingbats
    (0x24C2, 0x1F251),  // enclosed characters and everything up to them
    (0x1F926, 0x1F937), // supplemental emoticons
    (0x10000, 0x10FFFF),
    (0x2640, 0x2640), // female sign
    (0x2642, 0x2642), // male sign
    (0x2600, 0x2B55), // weather and misc symbols
    (0x200D, 0x200D), // zero-width joiner
    (0x23CF, 0x23CF),
    (0x23E9, 0x23E9),
    (0x231A, 0x231A),
    (0xFE0F, 0xFE0F), // emoji presentation selector
    (0x3030, 0x3030), // wavy dash
];

/// Returns `true` if `c` falls inside any entry of [`EMOJI_RANGES`].
///
/// # Example
///
/// ```
/// use demoji_core::is_emoji;
///
/// assert!(is_emoji('🎉'));
/// assert!(!is_emoji('ü'));
/// ```
#[inline]
pub fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    EMOJI_RANGES
        .iter()
        .any(|&(low, high)| (low..=high).contains(&cp))
}
