//! Bee Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop. The
//! browser build wires DOM events to the simulation's intent entry points and
//! drives ticks from requestAnimationFrame; the native build runs a scripted
//! headless session and dumps the final snapshot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_shell {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent, TouchEvent};

    use bee_chase::consts::*;
    use bee_chase::persistence::LocalStorageStore;
    use bee_chase::sim::Phase;
    use bee_chase::{Game, Snapshot, ground_level};

    /// Game instance plus frame-loop bookkeeping
    struct Shell {
        game: Game,
        accumulator: f64,
        last_time: f64,
    }

    impl Shell {
        fn new(seed: u64) -> Self {
            Self {
                game: Game::new(seed, Box::new(LocalStorageStore::new())),
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Forward a normalized input intent; the core ignores whatever
        /// doesn't apply in the current phase
        fn intent(&mut self, now: f64) {
            match self.game.phase {
                Phase::Playing => self.game.on_jump(now),
                Phase::Start | Phase::GameOver => self.game.on_start(now),
            }
        }

        /// Pump timers every frame; run fixed-cadence ticks while playing
        fn update(&mut self, now: f64) {
            self.game.advance_timers(now);

            if self.game.phase != Phase::Playing {
                self.accumulator = 0.0;
                self.last_time = now;
                return;
            }

            let dt = if self.last_time > 0.0 {
                (now - self.last_time).min(250.0)
            } else {
                TICK_MS
            };
            self.last_time = now;
            self.accumulator += dt;

            let mut ticks = 0;
            while self.accumulator >= TICK_MS && ticks < MAX_TICKS_PER_FRAME {
                self.game.tick(now);
                self.accumulator -= TICK_MS;
                ticks += 1;
            }
        }

        /// Push the snapshot into the DOM
        fn render(&self, document: &Document) {
            let snap = self.game.snapshot();

            set_text(document, "score", &snap.score.to_string());
            set_text(document, "high-score", &snap.high_score.to_string());

            place(document, "player", snap.player.pos.x, snap.player.pos.y);
            place(
                document,
                "collectible",
                snap.collectible.pos.x,
                snap.collectible.pos.y,
            );

            if let Some(container) = document.get_element_by_id("obstacles") {
                container.set_inner_html(&obstacle_markup(&snap));
            }

            set_visible(document, "start-screen", snap.phase == Phase::Start);
            set_visible(document, "game-over-screen", snap.phase == Phase::GameOver);
            set_visible(document, "record-banner", snap.is_new_record);
            if snap.phase == Phase::GameOver {
                set_text(document, "final-score", &snap.score.to_string());
            }
        }
    }

    fn obstacle_markup(snap: &Snapshot) -> String {
        snap.obstacles
            .iter()
            .map(|o| {
                format!(
                    "<div class=\"obstacle\" style=\"left:{}px;top:{}px;width:{}px;height:{}px\"></div>",
                    o.pos.x, o.pos.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT
                )
            })
            .collect()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    fn place(document: &Document, id: &str, x: f32, y: f32) {
        if let Some(el) = document.get_element_by_id(id) {
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("left", &format!("{x}px"));
                let _ = style.set_property("top", &format!("{y}px"));
            }
        }
    }

    fn perf_now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bee Chase starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let seed = js_sys::Date::now() as u64;
        let shell = Rc::new(RefCell::new(Shell::new(seed)));

        if let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) {
            shell.borrow_mut().game.set_viewport_height(height as f32);
            if let Some(ground) = document.get_element_by_id("ground") {
                if let Ok(ground) = ground.dyn_into::<HtmlElement>() {
                    let _ = ground
                        .style()
                        .set_property("top", &format!("{}px", ground_level(height as f32)));
                }
            }
        }

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(shell.clone());
        setup_resize_handler(shell.clone());
        request_animation_frame(shell);

        log::info!("Bee Chase running!");
    }

    fn setup_input_handlers(shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard: Space / ArrowUp carry both intents
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        shell.borrow_mut().intent(perf_now());
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch anywhere on screen
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                shell.borrow_mut().intent(perf_now());
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                if let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) {
                    shell.borrow_mut().game.set_viewport_height(height as f32);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame(shell, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(shell: Rc<RefCell<Shell>>, time: f64) {
        {
            let mut s = shell.borrow_mut();
            s.update(time);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                s.render(&document);
            }
        }
        request_animation_frame(shell);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_shell::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bee_chase::consts::*;
    use bee_chase::persistence::FileStore;
    use bee_chase::{Game, Phase};

    env_logger::init();
    log::info!("Bee Chase (native) starting headless demo...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let store = FileStore::new(std::env::temp_dir().join("bee_chase_high_score"));
    let mut game = Game::new(seed, Box::new(store));

    game.on_start(0.0);
    let mut now = 0.0;
    for _ in 0..3000 {
        now += TICK_MS;
        game.advance_timers(now);
        if game.phase != Phase::Playing {
            break;
        }

        // Naive autopilot: hop when an obstacle closes in
        let threat = game
            .obstacles
            .iter()
            .any(|o| o.pos.x > game.player.pos.x && o.pos.x - game.player.pos.x < 120.0);
        if threat {
            game.on_jump(now);
        }

        game.tick(now);
    }

    let snapshot = game.snapshot();
    log::info!(
        "Demo finished after {} ticks with score {}",
        game.time_ticks,
        snapshot.score
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );
}
