//! src/view/icons.rs
//! ============================================================================
//! # Glyphs used by the cocktail views

pub const LIKED: &str = "♥";
pub const NOT_LIKED: &str = "♡";
pub const COCKTAIL: &str = "🍸";
pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";

pub const fn heart(liked: bool) -> &'static str {
    if liked { LIKED } else { NOT_LIKED }
}

pub const fn checkbox(checked: bool) -> &'static str {
    if checked { CHECKED } else { UNCHECKED }
}
