use std::time::Duration;

mod error;
mod fonts;
mod frame;
mod gui;
mod input_system;
mod platform;
mod text;

use error::{RunError, StartupError};
use fonts::MenuFonts;
use frame::{FrameOutcome, run_frame};
use gui::{MainMenu, MenuLayout};
use input_system::InputSystem;
use platform::{Platform, WINDOW_WIDTH};

/// Fixed end-of-frame delay (~60 FPS, no drift correction)
const FRAME_DELAY: Duration = Duration::from_millis(16);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        println!("{}", e);
        std::process::exit(1);
    }
}

/// Opens the window and runs the menu until quit or EXIT
///
/// Every SDL2 resource lives in `platform` and the fonts borrow its TTF
/// context; both are dropped on return, on the error path too.
fn run() -> Result<(), RunError> {
    let layout = MenuLayout::builtin().map_err(StartupError::from)?;

    let mut platform = Platform::init()?;
    let Platform {
        canvas,
        texture_creator,
        event_pump,
        ttf,
        ..
    } = &mut platform;

    let fonts = MenuFonts::load(&*ttf, &layout.fonts);
    if fonts.is_degraded() {
        log::warn!("Running with missing fonts; title or buttons will not be drawn");
    }

    let mut menu = MainMenu::new(&layout, WINDOW_WIDTH);
    let input_system = InputSystem::new();

    log::info!("Menu ready with {} buttons", menu.buttons().len());

    let mut stdout = std::io::stdout();

    loop {
        let inputs = input_system.poll_events(event_pump);
        let outcome = run_frame(
            &mut menu,
            inputs,
            canvas,
            &*texture_creator,
            &fonts,
            &mut stdout,
        )?;

        if outcome == FrameOutcome::Finished {
            break;
        }

        std::thread::sleep(FRAME_DELAY);
    }

    log::debug!("Left frame loop in state {:?}", menu.state());
    Ok(())
}
