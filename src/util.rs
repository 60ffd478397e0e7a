use crate::glyphs;

/// `"1 file"`, `"0 files"`, `"2 files"`.
pub fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn pad(glyph: &str, left: usize, right: usize) -> String {
    format!(
        "{}{glyph}{}",
        glyphs::SPACE.repeat(left),
        glyphs::SPACE.repeat(right)
    )
}
