//! Frame Step
//!
//! One pass of the menu loop minus the end-of-frame delay: apply the drained
//! inputs, print click messages, then redraw and present unless the menu has
//! terminated.

use crate::error::RunError;
use crate::fonts::MenuFonts;
use crate::gui::MainMenu;
use crate::input_system::MenuInput;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame was drawn and presented
    Continue,
    /// Menu terminated; nothing was drawn
    Finished,
}

pub fn run_frame<T, I, W>(
    menu: &mut MainMenu,
    inputs: I,
    canvas: &mut Canvas<T>,
    texture_creator: &TextureCreator<T::Context>,
    fonts: &MenuFonts<'_>,
    out: &mut W,
) -> Result<FrameOutcome, RunError>
where
    T: RenderTarget,
    I: IntoIterator<Item = MenuInput>,
    W: Write,
{
    for line in menu.handle_inputs(inputs) {
        writeln!(out, "{}", line)?;
    }

    if !menu.is_running() {
        return Ok(FrameOutcome::Finished);
    }

    menu.render(canvas, texture_creator, fonts)
        .map_err(RunError::Render)?;
    canvas.present();

    Ok(FrameOutcome::Continue)
}
