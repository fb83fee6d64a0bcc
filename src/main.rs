//! Homerun Derby entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent, TouchEvent};

    use homerun_derby::platform::web::{DomHud, PerformanceClock};
    use homerun_derby::platform::{Clock, Hud};
    use homerun_derby::renderer::CanvasSurface;
    use homerun_derby::{Config, Field, Game, LoopControl};

    /// Everything one page session needs
    struct App {
        game: Game,
        surface: CanvasSurface,
        hud: DomHud,
        clock: PerformanceClock,
        /// A requestAnimationFrame callback is outstanding
        looping: bool,
    }

    impl App {
        fn swing(&mut self) {
            let now = self.clock.now_ms();
            let App { game, hud, .. } = self;
            game.swing(now, hud as &mut dyn Hud);
        }
    }

    fn read_config(canvas: &HtmlCanvasElement) -> Config {
        let mut config = match canvas.get_attribute("data-config") {
            Some(json) => Config::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("Bad data-config ({}), using defaults", e).into());
                Config::default()
            }),
            None => Config::default(),
        };
        config.field = Field::new(canvas.width() as f32, canvas.height() as f32);
        config
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = read_config(&canvas);
        let level = config.log_filter().to_level().unwrap_or(log::Level::Error);
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::info!("Homerun Derby starting...");

        let batter = document
            .get_element_by_id("player")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
        let surface = CanvasSurface::new(&canvas, batter)?;
        let hud = DomHud::new(document);
        let clock = PerformanceClock::new();

        let seed = config.seed_or(js_sys::Date::now());
        let app = Rc::new(RefCell::new(App {
            game: Game::new(&config, seed),
            surface,
            hud,
            clock,
            looping: false,
        }));

        // Restart button routes back here
        {
            let weak = Rc::downgrade(&app);
            app.borrow_mut().hud.set_restart_handler(move || restart(&weak));
        }

        setup_input_handlers(&canvas, app.clone())?;

        {
            let mut a = app.borrow_mut();
            let now = a.clock.now_ms();
            let App { game, hud, .. } = &mut *a;
            game.start(now, hud as &mut dyn Hud);
        }
        ensure_loop(&app);

        log::info!("Homerun Derby running! (seed {})", seed);
        Ok(())
    }

    fn restart(weak: &Weak<RefCell<App>>) {
        let Some(app) = weak.upgrade() else {
            return;
        };
        {
            let mut a = app.borrow_mut();
            let now = a.clock.now_ms();
            let App { game, hud, .. } = &mut *a;
            game.restart(now, hud as &mut dyn Hud);
        }
        ensure_loop(&app);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Click swings the bat
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().swing();
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tap swings too (and suppresses the synthetic click)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().swing();
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Start requesting frames unless a request is already outstanding
    fn ensure_loop(app: &Rc<RefCell<App>>) {
        if app.borrow().looping {
            return;
        }
        app.borrow_mut().looping = true;
        request_animation_frame(app.clone());
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed");
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut a = app.borrow_mut();
            let now = a.clock.now_ms();
            let App {
                game, surface, hud, ..
            } = &mut *a;
            game.frame(now, surface, hud as &mut dyn Hud)
        };

        match control {
            LoopControl::Continue => request_animation_frame(app),
            LoopControl::Stop => {
                app.borrow_mut().looping = false;
                log::info!("Frame loop stopped");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use homerun_derby::platform::{Clock, LogHud, ManualClock};
    use homerun_derby::renderer::NullSurface;
    use homerun_derby::{Config, Game, LoopControl};
    use rand::{Rng, SeedableRng};

    let config = match std::env::args().nth(1) {
        Some(json) => match Config::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid config: {}", e);
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_default_env()
        .init();
    log::info!("Homerun Derby (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = config.seed.unwrap_or(12345);

    // Demo batter: swings at random moments while the ball is in the zone
    let mut batter = rand_pcg::Pcg32::seed_from_u64(seed ^ 0x5eed);
    let clock = ManualClock::new(0.0);
    let mut game = Game::new(&config, seed);
    let mut hud = LogHud::default();
    let mut surface = NullSurface;

    game.start(clock.now_ms(), &mut hud);
    loop {
        clock.advance(homerun_derby::consts::SIM_STEP_MS);
        let state = game.state();
        let in_zone = state
            .ball
            .as_ref()
            .is_some_and(|b| !b.is_hit() && b.is_in_hit_zone(&state.field));
        if in_zone && !state.is_swinging && batter.random_bool(0.02) {
            game.swing(clock.now_ms(), &mut hud);
        }
        if game.frame(clock.now_ms(), &mut surface, &mut hud) == LoopControl::Stop {
            break;
        }
    }

    let summary = game.summary();
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Summary serialization failed: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
