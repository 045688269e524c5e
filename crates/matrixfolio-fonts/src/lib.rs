//! Block letter fonts for the matrixfolio boot banner.

/// Height of every glyph in lines.
pub const GLYPH_HEIGHT: usize = 7;

/// Letter M
pub const LETTER_M: [&str; GLYPH_HEIGHT] = [
    "██   ██",
    "███ ███",
    "███████",
    "██ █ ██",
    "██   ██",
    "██   ██",
    "██   ██",
];

/// Letter A
pub const LETTER_A: [&str; GLYPH_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
    "██  ██",
];

/// Letter T
pub const LETTER_T: [&str; GLYPH_HEIGHT] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter R
pub const LETTER_R: [&str; GLYPH_HEIGHT] = [
    "█████ ",
    "██  ██",
    "██  ██",
    "█████ ",
    "██ ██ ",
    "██  ██",
    "██  ██",
];

/// Letter I
pub const LETTER_I: [&str; GLYPH_HEIGHT] = [
    "████",
    " ██ ",
    " ██ ",
    " ██ ",
    " ██ ",
    " ██ ",
    "████",
];

/// Letter X
pub const LETTER_X: [&str; GLYPH_HEIGHT] = [
    "██  ██",
    "██  ██",
    " ████ ",
    "  ██  ",
    " ████ ",
    "██  ██",
    "██  ██",
];

/// Blank used for spaces and letters without a glyph.
pub const BLANK: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

/// Look up the glyph for a character, case-insensitively.
pub fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    match ch.to_ascii_uppercase() {
        'M' => &LETTER_M,
        'A' => &LETTER_A,
        'T' => &LETTER_T,
        'R' => &LETTER_R,
        'I' => &LETTER_I,
        'X' => &LETTER_X,
        _ => &BLANK,
    }
}

/// Build large block letter art for `text`.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, each representing one line of the
/// art. Letters are separated by a single column of space.
pub fn build_banner(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];

    for (i, ch) in text.chars().enumerate() {
        let art = glyph(ch);
        for (row, line) in lines.iter_mut().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(art[row]);
        }
    }

    lines
}

/// Display width of the banner for `text`, in cells.
pub fn banner_width(text: &str) -> usize {
    build_banner(text)
        .first()
        .map(|line| line.chars().count())
        .unwrap_or(0)
}
