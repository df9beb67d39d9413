//! Hen Flap entry point
//!
//! On the web: wires DOM input, animation frames and audio to the game.
//! Natively: runs a headless demo round flown by the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, MouseEvent, Window};

    use hen_flap::audio::WebAudioCue;
    use hen_flap::input::InputEvent;
    use hen_flap::platform::{DomPresenter, WebFrameScheduler};
    use hen_flap::{Game, GameConfig};

    type WebGame = Game<WebFrameScheduler, WebAudioCue, DomPresenter>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hen Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let config = GameConfig::load();
        let volume = config.volume;
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            config,
            seed,
            WebFrameScheduler::new(window.clone()),
            WebAudioCue::new(volume),
            DomPresenter::new(document.clone()),
        )));

        // Every listener below is registered exactly once
        install_frame_callback(&game);
        setup_input_handlers(&window, &document, game.clone());
        setup_restart_button(&document, game.clone());
        setup_teardown(&window, game);

        log::info!("Hen Flap running!");
    }

    fn install_frame_callback(game: &Rc<RefCell<WebGame>>) {
        let weak = Rc::downgrade(game);
        let closure = Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            if let Some(game) = weak.upgrade() {
                game.borrow_mut().on_frame();
            }
        });
        game.borrow_mut().scheduler_mut().set_callback(closure);
    }

    fn setup_input_handlers(window: &Window, document: &Document, game: Rc<RefCell<WebGame>>) {
        // Click/tap on the play field
        if let Some(field) = document.get_element_by_id("game") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle_input(&InputEvent::Pointer);
            });
            let _ = field.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let code = event.code();
                let mut g = game.borrow_mut();
                if g.router().is_activate_key(&code) {
                    // Keep Space from scrolling the page
                    event.prevent_default();
                }
                g.handle_input(&InputEvent::Key(code));
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<WebGame>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                // The button sits on the play field; its click must not also flap
                event.stop_propagation();
                game.borrow_mut().handle_input(&InputEvent::RestartButton);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_teardown(window: &Window, game: Rc<RefCell<WebGame>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().shutdown();
            log::info!("Frame loop stopped (page hidden)");
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use hen_flap::audio::Silent;
    use hen_flap::frame::ManualScheduler;
    use hen_flap::input::InputEvent;
    use hen_flap::sim::{GamePhase, Snapshot, autopilot};
    use hen_flap::{Game, GameConfig, Presenter};

    /// Give up after this many frames (about five minutes at 60 Hz)
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    /// Logs score changes; full snapshots at trace level
    #[derive(Default)]
    struct LogPresenter {
        last_score: u32,
    }

    impl Presenter for LogPresenter {
        fn present(&mut self, snapshot: &Snapshot) {
            if snapshot.score != self.last_score {
                log::info!("Score: {}", snapshot.score);
                self.last_score = snapshot.score;
            }
        }
    }

    /// Fly one round with the autopilot; returns (score, frames)
    pub fn run(config: GameConfig, seed: u64) -> (u32, u32) {
        let mut game = Game::new(config, seed, ManualScheduler::new(), Silent, LogPresenter::default());
        let activate = InputEvent::Key(game.router().activate_key().to_owned());

        let mut frames = 0;
        while frames < MAX_FRAMES && game.session().phase() != GamePhase::Terminated {
            if autopilot::should_flap(game.session().state(), game.session().config()) {
                game.handle_input(&activate);
            }
            if game.scheduler_mut().next_frame().is_none() {
                break;
            }
            game.on_frame();
            frames += 1;
        }
        (game.session().score(), frames)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hen Flap (native) starting...");
    log::info!("Native mode runs a headless autopilot round - build for wasm32 to play");

    let config = hen_flap::GameConfig::load();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    log::info!("Seed: {}", seed);

    let (score, frames) = demo::run(config, seed);
    println!("Autopilot scored {} in {} frames", score, frames);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
