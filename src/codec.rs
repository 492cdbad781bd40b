// Glyph <-> code point conversion and the classifier's emoji vocabulary.
// The detection SDK hands glyphs back as JS strings, so the decode side
// works on UTF-16 units the way the page's display text does.

use crate::types::EmojiCode;

/// Code points for every emoji the detection SDK can classify.
pub const EMOJI_VOCABULARY: [u32; 13] = [
    128528, // 😐 neutral
    9786,   // ☺ smiley (BMP, single UTF-16 unit)
    128515, // 😃
    128524, // 😌
    128527, // 😏
    128521, // 😉
    128535, // 😗
    128539, // 😛
    128540, // 😜
    128542, // 😞
    128545, // 😡
    128563, // 😳
    128561, // 😱
];

/// Decode a displayed glyph to its code point.
///
/// One UTF-16 unit: the unit's value. Two or more: the standard surrogate
/// pair combination over the first two units. Input is not validated —
/// a malformed pair wraps into a value that fails to equal any target,
/// and an empty glyph decodes to 0.
pub fn decode(glyph: &str) -> u32 {
    let mut units = glyph.encode_utf16();
    match (units.next(), units.next()) {
        (Some(unit), None) => unit as u32,
        (Some(high), Some(low)) => (high as u32)
            .wrapping_sub(0xD800)
            .wrapping_mul(0x400)
            .wrapping_add((low as u32).wrapping_sub(0xDC00))
            .wrapping_add(0x10000),
        (None, _) => 0,
    }
}

/// Encode a code point as a displayable glyph. Values outside the Unicode
/// scalar range yield an empty string; no known-emoji check is applied.
pub fn encode(code: u32) -> String {
    char::from_u32(code).map(String::from).unwrap_or_default()
}

/// Glyph for a typed emoji code.
pub fn glyph(code: EmojiCode) -> String {
    encode(code.as_u32())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_unit_glyph() {
        assert_eq!(decode("☺"), 9786);
        assert_eq!(decode("a"), 97);
    }

    #[test]
    fn decodes_surrogate_pair() {
        assert_eq!(decode("😃"), 128515);
        assert_eq!(decode("😱"), 128561);
    }

    #[test]
    fn empty_glyph_decodes_to_zero() {
        assert_eq!(decode(""), 0);
    }

    #[test]
    fn extra_units_are_ignored() {
        // Only the first two UTF-16 units are read, like the page's decoder.
        assert_eq!(decode("😃😡"), 128515);
    }

    #[test]
    fn encodes_astral_and_bmp() {
        assert_eq!(encode(128515), "😃");
        assert_eq!(encode(9786), "☺");
    }

    #[test]
    fn unencodable_value_yields_empty_string() {
        assert_eq!(encode(0xD800), "");
        assert_eq!(encode(0x110000), "");
    }

    #[test]
    fn vocabulary_round_trips() {
        for &code in &EMOJI_VOCABULARY {
            assert_eq!(decode(&encode(code)), code, "code point {code}");
        }
    }
}
