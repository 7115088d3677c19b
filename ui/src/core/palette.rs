//! Static category color table.

use api::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#RRGGBB`, usable in CSS and SVG.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const SLEEP: Rgb = Rgb::from_hex(0x2C3E50);
pub const STUDY: Rgb = Rgb::from_hex(0xE67E22);
pub const SCREEN: Rgb = Rgb::from_hex(0xE74C3C);
pub const EXERCISE: Rgb = Rgb::from_hex(0x27AE60);
pub const SOCIAL: Rgb = Rgb::from_hex(0xF1C40F);
/// Fallback for unknown names and the unused part of the timeline.
pub const OTHERS: Rgb = Rgb::from_hex(0x95A5A6);

pub fn color_for(category: Category) -> Rgb {
    color_for_name(category.name())
}

/// Look a color up by category name; anything unknown gets [`OTHERS`].
pub fn color_for_name(name: &str) -> Rgb {
    match name {
        "Sleep" => SLEEP,
        "Study" => STUDY,
        "Screen" => SCREEN,
        "Exercise" => EXERCISE,
        "Social" => SOCIAL,
        _ => OTHERS,
    }
}
