//! Button Widget
//!
//! A labelled rectangle with a hover flag. The fill colour follows the hover
//! flag, the outline is always drawn, and the label is centered inside.

use super::layout::MenuAction;
use crate::text::draw_text_centered_in;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};
use sdl2::ttf::Font;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill when the pointer is outside the button
    pub fill_color: Color,

    /// Fill when the pointer is over the button
    pub hover_color: Color,

    /// One pixel outline
    pub border_color: Color,

    /// Label color
    pub text_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            fill_color: Color::RGB(70, 120, 200),   // Darker blue
            hover_color: Color::RGB(100, 150, 255), // Lighter blue
            border_color: Color::RGB(255, 255, 255),
            text_color: Color::RGB(255, 255, 255),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: MenuAction,
    pub hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, action: MenuAction) -> Self {
        Button {
            rect,
            label: label.into(),
            action,
            hovered: false,
        }
    }

    /// Point-in-rect test that includes all four edges
    ///
    /// `Rect::contains_point` excludes the right and bottom edges; this one
    /// counts `x == right()` and `y == bottom()` as inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.rect.x()
            && x <= self.rect.right()
            && y >= self.rect.y()
            && y <= self.rect.bottom()
    }

    /// Draws the background and outline only
    pub fn render_frame<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        style: &ButtonStyle,
    ) -> Result<(), String> {
        let fill = if self.hovered {
            style.hover_color
        } else {
            style.fill_color
        };

        canvas.set_draw_color(fill);
        canvas.fill_rect(self.rect)?;

        canvas.set_draw_color(style.border_color);
        canvas.draw_rect(self.rect)?;

        Ok(())
    }

    /// Draws the frame and the centered label
    ///
    /// A label that fails to rasterize is logged and skipped; the frame is
    /// still drawn.
    pub fn render<T: RenderTarget>(
        &self,
        canvas: &mut Canvas<T>,
        texture_creator: &TextureCreator<T::Context>,
        font: &Font<'_, '_>,
        style: &ButtonStyle,
    ) -> Result<(), String> {
        self.render_frame(canvas, style)?;

        if let Err(e) = draw_text_centered_in(
            canvas,
            texture_creator,
            font,
            &self.label,
            style.text_color,
            self.rect,
        ) {
            log::warn!("Skipping label \"{}\": {}", self.label, e);
        }

        Ok(())
    }
}
