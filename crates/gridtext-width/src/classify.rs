#![forbid(unsafe_code)]

//! Codepoint width classification tables.
//!
//! Three pure predicates decide how a single codepoint contributes to
//! terminal display width: always two columns, zero columns, or one column
//! with an upgrade to two when the emoji presentation selector follows.
//! The tables are data, not logic: sorted closed `(start, end)` intervals
//! over Unicode scalar values, looked up by binary search.
//!
//! # Invariants
//!
//! 1. Every table is sorted by interval start and pairwise disjoint,
//!    within itself and against the other two tables.
//! 2. Interval bounds are exact and closed — no range runs open-ended into
//!    a neighboring block. In particular the Private Use Area (U+E000..
//!    U+F8FF) stays out of the double-width table even though it sits
//!    between the Hangul syllables and the CJK compatibility ideographs.
//! 3. The emoji presentation selector (U+FE0F) lies inside the
//!    variation-selector block of the zero-width table. Scanners test for
//!    it *before* consulting [`classify`], because it is a stateful
//!    upgrade trigger rather than an ordinary zero-width codepoint.
//!
//! Codepoints in none of the tables are single-width, including unassigned
//! ones; classification never fails.

use std::cmp::Ordering;

/// U+FE0F VARIATION SELECTOR-16: requests emoji (double-width)
/// presentation of the immediately preceding codepoint.
pub const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';

/// Display width class of a single codepoint.
///
/// Derived, never stored. The emoji presentation selector is not a class
/// of its own: it classifies as [`ZeroWidth`](WidthClass::ZeroWidth) here
/// and is intercepted by the scanners before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// Occupies no display column (combining marks, joiners, selectors).
    ZeroWidth,
    /// Always occupies two display columns.
    DoubleWidth,
    /// One column by default, two when followed by the presentation
    /// selector.
    PresentationUpgradable,
    /// One display column.
    SingleWidth,
}

impl WidthClass {
    /// Columns this class contributes on its own, before any selector
    /// upgrade.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::ZeroWidth => 0,
            Self::DoubleWidth => 2,
            Self::PresentationUpgradable | Self::SingleWidth => 1,
        }
    }
}

/// Closed codepoint interval, both ends inclusive.
type Interval = (u32, u32);

/// Codepoints whose East Asian Width is Wide or Fullwidth.
///
/// CJK and Hangul blocks, fullwidth forms, and the emoji that render
/// double-width without a presentation selector. Supplementary-plane
/// pictograph blocks are swept whole; the CJK ideograph extensions are
/// listed block-exact so nothing bleeds past U+323AF.
static DOUBLE_WIDTH: &[Interval] = &[
    (0x1100, 0x115F),   // Hangul Jamo leading consonants
    (0x231A, 0x231B),   // watch, hourglass
    (0x2329, 0x232A),   // angle brackets
    (0x23E9, 0x23EC),   // fast-forward .. fast down buttons
    (0x23F0, 0x23F0),   // alarm clock
    (0x23F3, 0x23F3),   // hourglass with flowing sand
    (0x25FD, 0x25FE),   // medium small squares
    (0x2614, 0x2615),   // umbrella with rain drops, hot beverage
    (0x2648, 0x2653),   // zodiac signs
    (0x267F, 0x267F),   // wheelchair symbol
    (0x2693, 0x2693),   // anchor
    (0x26A1, 0x26A1),   // high voltage
    (0x26AA, 0x26AB),   // white and black circles
    (0x26BD, 0x26BE),   // soccer ball, baseball
    (0x26C4, 0x26C5),   // snowman without snow, sun behind cloud
    (0x26CE, 0x26CE),   // ophiuchus
    (0x26D4, 0x26D4),   // no entry
    (0x26EA, 0x26EA),   // church
    (0x26F2, 0x26F3),   // fountain, flag in hole
    (0x26F5, 0x26F5),   // sailboat
    (0x26FA, 0x26FA),   // tent
    (0x26FD, 0x26FD),   // fuel pump
    (0x2705, 0x2705),   // check mark button
    (0x270A, 0x270B),   // raised fist, raised hand
    (0x2728, 0x2728),   // sparkles
    (0x274C, 0x274C),   // cross mark
    (0x274E, 0x274E),   // cross mark button
    (0x2753, 0x2755),   // ornamental question and exclamation marks
    (0x2757, 0x2757),   // heavy exclamation mark symbol
    (0x2795, 0x2797),   // heavy plus, minus, division signs
    (0x27B0, 0x27B0),   // curly loop
    (0x27BF, 0x27BF),   // double curly loop
    (0x2B1B, 0x2B1C),   // large squares
    (0x2B50, 0x2B50),   // white medium star
    (0x2B55, 0x2B55),   // heavy large circle
    (0x2E80, 0x303E),   // CJK radicals .. CJK symbols and punctuation
    (0x3041, 0x33FF),   // hiragana .. CJK compatibility
    (0x3400, 0x4DBF),   // CJK unified ideographs extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE52),   // CJK compatibility forms, small form variants
    (0xFE54, 0xFE66),   // small form variants
    (0xFE68, 0xFE6B),   // small form variants
    (0xFF01, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
    (0x1F004, 0x1F004), // mahjong tile red dragon
    (0x1F0CF, 0x1F0CF), // playing card black joker
    (0x1F18E, 0x1F18E), // negative squared AB
    (0x1F191, 0x1F19A), // squared CL .. squared VS
    (0x1F200, 0x1F202), // squared katakana
    (0x1F210, 0x1F23B), // squared CJK ideographs
    (0x1F240, 0x1F248), // tortoise-shell bracketed CJK
    (0x1F250, 0x1F251), // circled ideographs
    (0x1F260, 0x1F265), // rounded symbols
    (0x1F300, 0x1F64F), // pictographs, emoticons
    (0x1F680, 0x1F6FF), // transport and map symbols
    (0x1F7E0, 0x1F7EB), // colored circles and squares
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
    (0x20000, 0x2A6DF), // CJK unified ideographs extension B
    (0x2A700, 0x2EE5F), // CJK extensions C through F, I
    (0x2F800, 0x2FA1F), // CJK compatibility ideographs supplement
    (0x30000, 0x323AF), // CJK extensions G, H
];

/// Codepoints that are single-width by default but render double-width
/// when immediately followed by [`EMOJI_PRESENTATION_SELECTOR`].
///
/// East-Asian-Width-Neutral emoji-capable symbols: warning signs, arrows,
/// weather glyphs, suit and tool symbols. Disjoint from `DOUBLE_WIDTH`;
/// the Wide entries of the same blocks (for example U+26A1 high voltage)
/// live there instead.
static PRESENTATION_UPGRADABLE: &[Interval] = &[
    (0x00A9, 0x00A9), // copyright sign
    (0x00AE, 0x00AE), // registered sign
    (0x203C, 0x203C), // double exclamation mark
    (0x2049, 0x2049), // exclamation question mark
    (0x2122, 0x2122), // trade mark sign
    (0x2139, 0x2139), // information source
    (0x2194, 0x2199), // bidirectional and diagonal arrows
    (0x21A9, 0x21AA), // hooked arrows
    (0x2328, 0x2328), // keyboard
    (0x23CF, 0x23CF), // eject symbol
    (0x23ED, 0x23EF), // skip and play/pause controls
    (0x23F1, 0x23F2), // stopwatch, timer clock
    (0x23F8, 0x23FA), // pause, stop, record
    (0x24C2, 0x24C2), // circled latin capital letter M
    (0x25AA, 0x25AB), // small squares
    (0x25B6, 0x25B6), // play triangle
    (0x25C0, 0x25C0), // reverse triangle
    (0x25FB, 0x25FC), // medium squares
    (0x2600, 0x2604), // sun, clouds, umbrella, snowman, comet
    (0x260E, 0x260E), // telephone
    (0x2611, 0x2611), // ballot box with check
    (0x2618, 0x2618), // shamrock
    (0x261D, 0x261D), // index pointing up
    (0x2620, 0x2620), // skull and crossbones
    (0x2622, 0x2623), // radioactive, biohazard
    (0x2626, 0x2626), // orthodox cross
    (0x262A, 0x262A), // star and crescent
    (0x262E, 0x262F), // peace symbol, yin yang
    (0x2638, 0x263A), // wheel of dharma, frowning and smiling faces
    (0x2640, 0x2640), // female sign
    (0x2642, 0x2642), // male sign
    (0x265F, 0x2660), // chess pawn, spade suit
    (0x2663, 0x2663), // club suit
    (0x2665, 0x2666), // heart and diamond suits
    (0x2668, 0x2668), // hot springs
    (0x267B, 0x267B), // recycling symbol
    (0x267E, 0x267E), // permanent paper sign (infinity)
    (0x2692, 0x2692), // hammer and pick
    (0x2694, 0x2697), // crossed swords .. alembic
    (0x2699, 0x2699), // gear
    (0x269B, 0x269C), // atom symbol, fleur-de-lis
    (0x26A0, 0x26A0), // warning sign
    (0x26A7, 0x26A7), // transgender symbol
    (0x26B0, 0x26B1), // coffin, funeral urn
    (0x26C8, 0x26C8), // thunder cloud and rain
    (0x26CF, 0x26CF), // pick
    (0x26D1, 0x26D1), // rescue worker's helmet
    (0x26D3, 0x26D3), // chains
    (0x26E9, 0x26E9), // shinto shrine
    (0x26F0, 0x26F1), // mountain, umbrella on ground
    (0x26F4, 0x26F4), // ferry
    (0x26F7, 0x26F9), // skier, ice skate, person with ball
    (0x2702, 0x2702), // scissors
    (0x2708, 0x2709), // airplane, envelope
    (0x270C, 0x270D), // victory hand, writing hand
    (0x270F, 0x270F), // pencil
    (0x2712, 0x2712), // black nib
    (0x2714, 0x2714), // heavy check mark
    (0x2716, 0x2716), // heavy multiplication x
    (0x271D, 0x271D), // latin cross
    (0x2721, 0x2721), // star of david
    (0x2733, 0x2734), // eight-spoked asterisk, eight-pointed star
    (0x2744, 0x2744), // snowflake
    (0x2747, 0x2747), // sparkle
    (0x2763, 0x2764), // heart exclamation, heavy black heart
    (0x27A1, 0x27A1), // black rightwards arrow
    (0x2934, 0x2935), // arrows curving up and down
    (0x2B05, 0x2B07), // leftwards, upwards, downwards block arrows
];

/// Codepoints that occupy no display column.
///
/// Combining-mark blocks (Latin, Cyrillic, Hebrew, Arabic, symbol and
/// half-mark variants), the zero-width space/joiner/non-joiner, the byte
/// order mark, and both variation-selector blocks. U+FE0F sits inside the
/// primary variation-selector range; see the module invariants.
static ZERO_WIDTH: &[Interval] = &[
    (0x0300, 0x036F),   // combining diacritical marks
    (0x0483, 0x0489),   // combining cyrillic marks
    (0x0591, 0x05BD),   // hebrew accents and points
    (0x05BF, 0x05BF),   // hebrew point rafe
    (0x05C1, 0x05C2),   // hebrew points shin dot, sin dot
    (0x05C4, 0x05C5),   // hebrew marks upper dot, lower dot
    (0x05C7, 0x05C7),   // hebrew point qamats qatan
    (0x0610, 0x061A),   // arabic signs
    (0x064B, 0x065F),   // arabic diacritics
    (0x0670, 0x0670),   // arabic letter superscript alef
    (0x06D6, 0x06DC),   // arabic small high signs
    (0x06DF, 0x06E4),   // arabic marks
    (0x06E7, 0x06E8),   // arabic small high yeh, noon
    (0x06EA, 0x06ED),   // arabic empty centre marks
    (0x1AB0, 0x1AFF),   // combining diacritical marks extended
    (0x1DC0, 0x1DFF),   // combining diacritical marks supplement
    (0x200B, 0x200D),   // zero width space, non-joiner, joiner
    (0x20D0, 0x20FF),   // combining marks for symbols
    (0xFE00, 0xFE0F),   // variation selectors
    (0xFE20, 0xFE2F),   // combining half marks
    (0xFEFF, 0xFEFF),   // zero width no-break space (byte order mark)
    (0xE0100, 0xE01EF), // variation selectors supplement
];

/// Binary-search membership in a sorted table of closed intervals.
#[inline]
fn in_table(table: &[Interval], cp: u32) -> bool {
    table
        .binary_search_by(|&(start, end)| {
            if end < cp {
                Ordering::Less
            } else if start > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Whether the codepoint always occupies two display columns.
#[inline]
#[must_use]
pub fn is_double_width(c: char) -> bool {
    in_table(DOUBLE_WIDTH, c as u32)
}

/// Whether the codepoint is single-width but upgrades to double-width
/// when immediately followed by the presentation selector.
#[inline]
#[must_use]
pub fn is_presentation_upgradable(c: char) -> bool {
    in_table(PRESENTATION_UPGRADABLE, c as u32)
}

/// Whether the codepoint occupies no display column.
///
/// True for the full variation-selector blocks, including U+FE0F; callers
/// that care about the upgrade semantics intercept the selector first.
#[inline]
#[must_use]
pub fn is_zero_width(c: char) -> bool {
    in_table(ZERO_WIDTH, c as u32)
}

/// Classify a codepoint into exactly one width class.
///
/// Checks run in fixed priority: zero-width, then double-width, then
/// presentation-upgradable, else single-width. The tables are disjoint,
/// so the order only matters as documentation of intent.
#[must_use]
pub fn classify(c: char) -> WidthClass {
    let cp = c as u32;
    if in_table(ZERO_WIDTH, cp) {
        WidthClass::ZeroWidth
    } else if in_table(DOUBLE_WIDTH, cp) {
        WidthClass::DoubleWidth
    } else if in_table(PRESENTATION_UPGRADABLE, cp) {
        WidthClass::PresentationUpgradable
    } else {
        WidthClass::SingleWidth
    }
}
