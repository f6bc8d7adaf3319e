use colored::Color;

pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const UP: Color = Color::Green;
pub const DOWN: Color = Color::Red;
pub const ANNOTATION: Color = Color::Cyan;
