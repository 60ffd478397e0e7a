pub const ARROW_UP: &str = "\u{2191}";
pub const ARROW_DOWN: &str = "\u{2193}";
pub const ARROW_LEFT: &str = "\u{2190}";
pub const DOT: &str = "\u{2022}";
pub const SPACE: &str = " ";
