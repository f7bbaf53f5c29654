//! Platform Resources
//!
//! Owns every SDL2 resource the menu needs for its whole lifetime: the SDL
//! context, the video and TTF subsystems, the window canvas, its texture
//! creator and the event pump. Dropping [`Platform`] releases all of them,
//! whichever way the program leaves the frame loop.

use crate::error::StartupError;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Game Menu";

/// Scoped bundle of SDL2 resources
///
/// Fields drop in declaration order, so the canvas and its texture creator
/// go before the subsystems that back them. Fonts borrow `ttf` and must be
/// dropped before the bundle (they are locals declared after it in `run`).
pub struct Platform {
    pub canvas: Canvas<Window>,
    pub texture_creator: TextureCreator<WindowContext>,
    pub event_pump: EventPump,
    pub ttf: Sdl2TtfContext,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl Platform {
    /// Initializes SDL, SDL_ttf, the window and its accelerated renderer
    pub fn init() -> Result<Self, StartupError> {
        let sdl = sdl2::init().map_err(StartupError::Sdl)?;
        let video = sdl.video().map_err(StartupError::Sdl)?;
        let ttf = sdl2::ttf::init().map_err(|e| StartupError::Ttf(e.to_string()))?;

        let window = video
            .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
            .position_centered()
            .build()
            .map_err(|e| StartupError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| StartupError::Renderer(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl.event_pump().map_err(StartupError::EventPump)?;

        log::info!(
            "Opened {}x{} window \"{}\"",
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WINDOW_TITLE
        );

        Ok(Platform {
            canvas,
            texture_creator,
            event_pump,
            ttf,
            _video: video,
            _sdl: sdl,
        })
    }
}
