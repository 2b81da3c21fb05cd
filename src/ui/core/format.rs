//! Surface/texture pixel formats and color quantization between them.

use crate::ui::core::style::{Color, Style};
use serde::{Deserialize, Serialize};

pub const COLOR_SUPPORT_ENV: &str = "INGAME_MESSAGE_COLOR_SUPPORT";

/// Color depth a surface or texture stores. Surfaces and the textures they are uploaded to
/// must agree on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    #[serde(alias = "rgb", alias = "24bit")]
    TrueColor,
    #[serde(alias = "256")]
    Ansi256,
    #[serde(alias = "16")]
    Ansi16,
}

impl PixelFormat {
    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::TrueColor => "truecolor",
            PixelFormat::Ansi256 => "ansi256",
            PixelFormat::Ansi16 => "ansi16",
        }
    }
}

pub fn detect_pixel_format() -> PixelFormat {
    if let Ok(value) = std::env::var(COLOR_SUPPORT_ENV) {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return PixelFormat::TrueColor,
            "256" | "ansi256" => return PixelFormat::Ansi256,
            "16" | "ansi16" | "basic" => return PixelFormat::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();

    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || colorterm.contains("direct")
        || term.contains("truecolor")
        || term.contains("24bit")
        || term.contains("direct")
    {
        return PixelFormat::TrueColor;
    }

    if term.contains("256color") {
        return PixelFormat::Ansi256;
    }

    PixelFormat::Ansi16
}

pub fn map_style(style: Style, format: PixelFormat) -> Style {
    Style {
        fg: style.fg.map(|c| map_color(c, format)),
        bg: style.bg.map(|c| map_color(c, format)),
        mods: style.mods,
    }
}

pub fn map_color(color: Color, format: PixelFormat) -> Color {
    match (format, color) {
        (PixelFormat::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (PixelFormat::Ansi256, Color::Rgb(r, g, b)) => Color::Indexed(rgb_to_ansi256_index(r, g, b)),
        (PixelFormat::Ansi256, Color::Indexed(i)) => Color::Indexed(i),
        (PixelFormat::Ansi16, Color::Rgb(r, g, b)) => Color::Indexed(rgb_to_ansi16_index(r, g, b)),
        (PixelFormat::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (PixelFormat::Ansi16, Color::Indexed(i)) => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
    }
}

pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Reset => None,
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Indexed(i) => Some(ansi256_index_to_rgb(i)),
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    // ANSI 0..15 are terminal-theme-dependent; match against the fixed 16..255 cube/ramp only.
    let mut best_index = 16u8;
    let mut best_distance = u32::MAX;

    for index in 16u16..=255u16 {
        let index_u8 = index as u8;
        let (pr, pg, pb) = ansi256_index_to_rgb(index_u8);
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index_u8;
        }
    }

    best_index
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for (index, (pr, pg, pb)) in ANSI16_RGB.iter().copied().enumerate() {
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }

    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = i32::from(r1) - i32::from(r2);
    let dg = i32::from(g1) - i32::from(g2);
    let db = i32::from(b1) - i32::from(b2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/format.rs"]
mod tests;
