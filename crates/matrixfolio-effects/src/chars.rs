//! Character sets for the rain effects.

/// Digits plus the katakana syllabary, as in the film.
pub const RAIN_CHARS: &[char] = &[
    '0', '1', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ',
    'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン',
];

/// Single-cell fallback for glyph slots too narrow for katakana.
pub const NARROW_RAIN_CHARS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Characters of the boot screen backdrop.
pub const BINARY_CHARS: &[char] = &['0', '1'];

/// Display width of a rain glyph in terminal cells.
pub fn glyph_cells(ch: char) -> u16 {
    if ch.is_ascii() { 1 } else { 2 }
}
