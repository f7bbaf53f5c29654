//! Menu Fonts
//!
//! The body and title fonts load independently. A font that fails to open
//! leaves its slot empty and the drawing that depends on it is skipped.

use crate::gui::layout::{FontLayout, FontSpec};
use sdl2::ttf::{Font, Sdl2TtfContext};

/// The two fonts the menu draws with, each optional
pub struct MenuFonts<'ttf> {
    /// Button labels
    pub body: Option<Font<'ttf, 'static>>,

    /// Menu title
    pub title: Option<Font<'ttf, 'static>>,
}

impl<'ttf> MenuFonts<'ttf> {
    /// Opens both fonts, logging a warning for each one that fails
    pub fn load(ttf: &'ttf Sdl2TtfContext, layout: &FontLayout) -> Self {
        MenuFonts {
            body: open_font(ttf, &layout.body),
            title: open_font(ttf, &layout.title),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.body.is_none() || self.title.is_none()
    }
}

#[cfg(test)]
impl MenuFonts<'_> {
    /// A font set with nothing loaded
    pub fn none() -> Self {
        MenuFonts {
            body: None,
            title: None,
        }
    }
}

fn open_font<'ttf>(ttf: &'ttf Sdl2TtfContext, spec: &FontSpec) -> Option<Font<'ttf, 'static>> {
    match ttf.load_font(&spec.path, spec.point_size) {
        Ok(font) => {
            log::debug!("Loaded font {} at {}pt", spec.path, spec.point_size);
            Some(font)
        }
        Err(e) => {
            log::warn!("Failed to load font {}: {}", spec.path, e);
            None
        }
    }
}
