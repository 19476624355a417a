use game::Game;
use raycaster::{Config, Map};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::time::{Duration, Instant};

mod game;

// helper trait to convert strings into std::error types
trait StringToAnyhow<T> {
    fn ah(self) -> anyhow::Result<T>;
}

impl<T> StringToAnyhow<T> for Result<T, String> {
    fn ah(self) -> anyhow::Result<T> {
        self.map_err(|err| anyhow::anyhow!("{err}"))
    }
}

const TARGET_FPS: u64 = 30;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("RAYCASTER_LOG");

    let config = Config::default();
    config.validate()?;

    let map = match std::env::args().nth(1) {
        Some(path) => Map::load(path, config.tile_size)?,
        None => {
            log::info!("no map given, using the classic layout");
            Map::classic(config.tile_size)?
        }
    };

    // sdl boilerplate
    log::info!("initializing sdl2");
    let sdl_ctx = sdl2::init().ah()?;
    log::info!("initializing video");
    let video = sdl_ctx.video().ah()?;

    log::info!("initializing window");
    let mut window = video
        .window("Raycaster", config.window_width, config.window_height)
        .position_centered()
        .build()?;
    window.set_resizable(false);

    log::info!("creating canvas");
    let canvas = window.into_canvas().build()?;
    log::info!("pumping events");
    let mut events = sdl_ctx.event_pump().ah()?;

    log::info!("initializing game state");
    let mut game = Game::new(canvas, map, config)?;

    let delta = Duration::from_millis(1_000 / TARGET_FPS);

    'main_loop: loop {
        let prev = Instant::now();

        // handle events
        for ev in events.poll_iter() {
            match ev {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'main_loop,
                Event::KeyDown {
                    keycode: Some(k), ..
                } => game.key(k),
                _ => {}
            }
        }

        // draw game
        if game.update {
            if let Err(err) = game.draw() {
                log::error!("error while drawing frame: {err}");
                Err(err)?;
            }
            game.canvas.present();
            game.update = false;
        }

        let diff = prev.elapsed();
        if diff < delta {
            std::thread::sleep(delta - diff);
        }
    }

    log::info!("shutting down");

    Ok(())
}
