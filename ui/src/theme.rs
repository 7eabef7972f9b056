/// Shared stylesheet, inlined by every launcher with `document::Style`.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
