//! TrueType Text Rendering
//!
//! Rasterizes strings with SDL2_ttf and blits them onto any render target.
//! Every call creates a fresh surface and texture and drops both before it
//! returns, so nothing outlives the frame it was drawn in.

use crate::error::TextError;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};
use sdl2::ttf::Font;

/// Draws `text` centered inside `bounds`
///
/// # Example
///
/// ```rust
/// draw_text_centered_in(
///     &mut canvas,
///     &texture_creator,
///     &font,
///     "PLAY",
///     Color::RGB(255, 255, 255),
///     Rect::new(250, 200, 300, 60),
/// )?;
/// ```
pub fn draw_text_centered_in<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    texture_creator: &TextureCreator<T::Context>,
    font: &Font<'_, '_>,
    text: &str,
    color: Color,
    bounds: Rect,
) -> Result<(), TextError> {
    draw_text_with(canvas, texture_creator, font, text, color, |w, h| {
        centered_in(bounds, w, h)
    })
}

/// Draws `text` horizontally centered on `center_x` with its top edge at `y`
pub fn draw_text_centered_x<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    texture_creator: &TextureCreator<T::Context>,
    font: &Font<'_, '_>,
    text: &str,
    color: Color,
    center_x: i32,
    y: i32,
) -> Result<(), TextError> {
    draw_text_with(canvas, texture_creator, font, text, color, |w, h| {
        centered_x(center_x, y, w, h)
    })
}

fn draw_text_with<T, F>(
    canvas: &mut Canvas<T>,
    texture_creator: &TextureCreator<T::Context>,
    font: &Font<'_, '_>,
    text: &str,
    color: Color,
    place: F,
) -> Result<(), TextError>
where
    T: RenderTarget,
    F: FnOnce(u32, u32) -> Rect,
{
    let surface = font.render(text).blended(color)?;
    let target = place(surface.width(), surface.height());
    let texture = texture_creator.create_texture_from_surface(&surface)?;

    canvas
        .copy(&texture, None, target)
        .map_err(TextError::Copy)
}

/// Destination rect for a `width`x`height` bitmap centered in `bounds`
///
/// Uses integer division, so odd leftovers round toward the top-left.
pub fn centered_in(bounds: Rect, width: u32, height: u32) -> Rect {
    let x = bounds.x() + (bounds.width() as i32 - width as i32) / 2;
    let y = bounds.y() + (bounds.height() as i32 - height as i32) / 2;
    Rect::new(x, y, width, height)
}

/// Destination rect for a bitmap centered on `center_x` with its top at `y`
pub fn centered_x(center_x: i32, y: i32, width: u32, height: u32) -> Rect {
    Rect::new(center_x - width as i32 / 2, y, width, height)
}
