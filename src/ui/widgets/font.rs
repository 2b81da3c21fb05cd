//! Bitmap font loading (BDF) and glyph coverage.
//!
//! Only what the cell renderer needs is read: the font name, its nominal size, the default
//! character and which code points have glyphs. Uncovered characters render as the default
//! character.

use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use unicode_width::UnicodeWidthStr;

const FALLBACK_CHAR: char = '?';

static FONT_SUBSYSTEM: Once = Once::new();

/// One-time, process-wide font subsystem setup. Returns `true` on the call that did it.
pub fn init_font_subsystem() -> bool {
    let mut first = false;
    FONT_SUBSYSTEM.call_once(|| {
        tracing::debug!("font subsystem initialized");
        first = true;
    });
    first
}

#[derive(Debug)]
pub enum FontError {
    Io { path: PathBuf, source: io::Error },
    InvalidFormat { path: PathBuf, reason: String },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io { path, source } => {
                write!(f, "cannot read font {}: {source}", path.display())
            }
            FontError::InvalidFormat { path, reason } => {
                write!(f, "invalid font {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io { source, .. } => Some(source),
            FontError::InvalidFormat { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    path: PathBuf,
    point_size: u16,
    nominal_size: Option<u16>,
    coverage: FxHashSet<u32>,
    default_char: char,
}

impl Font {
    pub fn load(path: &Path, point_size: u16) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // BDF keywords are ASCII; COMMENT/COPYRIGHT values are often Latin-1.
        let data = String::from_utf8_lossy(&bytes);
        let font = Self::parse_bdf(&data, path, point_size)?;
        tracing::debug!(
            font = %font.name,
            path = %path.display(),
            glyphs = font.coverage.len(),
            "font loaded"
        );
        Ok(font)
    }

    pub fn parse_bdf(data: &str, path: &Path, point_size: u16) -> Result<Self, FontError> {
        let invalid = |reason: &str| FontError::InvalidFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let mut lines = data.lines().map(str::trim).filter(|l| !l.is_empty());
        match lines.next() {
            Some(first) if first.starts_with("STARTFONT") => {}
            _ => return Err(invalid("missing STARTFONT header")),
        }

        let mut name = String::new();
        let mut nominal_size = None;
        let mut default_code = None;
        let mut coverage = FxHashSet::default();
        for line in lines {
            let mut parts = line.split_whitespace();
            let keyword = parts.next().unwrap_or_default();
            match keyword {
                "FONT" => name = line["FONT".len()..].trim().to_string(),
                "SIZE" => nominal_size = parts.next().and_then(|v| v.parse::<u16>().ok()),
                "DEFAULT_CHAR" => default_code = parts.next().and_then(|v| v.parse::<u32>().ok()),
                "ENCODING" => {
                    // Negative encodings are unmapped glyphs.
                    if let Some(code) = parts.next().and_then(|v| v.parse::<u32>().ok()) {
                        coverage.insert(code);
                    }
                }
                "ENDFONT" => break,
                _ => {}
            }
        }

        if coverage.is_empty() {
            return Err(invalid("no encoded glyphs"));
        }

        let default_char = default_code
            .filter(|code| coverage.contains(code))
            .and_then(char::from_u32)
            .unwrap_or(FALLBACK_CHAR);

        if nominal_size.is_some_and(|size| size != point_size) {
            tracing::warn!(
                path = %path.display(),
                requested = point_size,
                nominal = ?nominal_size,
                "bitmap font loaded at a size it was not drawn for"
            );
        }

        Ok(Self {
            name,
            path: path.to_path_buf(),
            point_size,
            nominal_size,
            coverage,
            default_char,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn point_size(&self) -> u16 {
        self.point_size
    }

    pub fn nominal_size(&self) -> Option<u16> {
        self.nominal_size
    }

    pub fn has_glyph(&self, ch: char) -> bool {
        ch == ' ' || self.coverage.contains(&(ch as u32))
    }

    pub fn glyph(&self, ch: char) -> char {
        if self.has_glyph(ch) {
            ch
        } else {
            self.default_char
        }
    }

    /// `text` as it will appear on screen; control characters are dropped.
    pub fn render_text(&self, text: &str) -> String {
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| self.glyph(ch))
            .collect()
    }

    pub fn text_width(&self, text: &str) -> u16 {
        self.render_text(text).width().min(u16::MAX as usize) as u16
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/font.rs"]
mod tests;
