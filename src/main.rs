//! Apple Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use apple_dodge::consts::*;
    use apple_dodge::platform::{KeyAction, Letterbox, key_action};
    use apple_dodge::renderer::{Palette, RenderState};
    use apple_dodge::sim::{GameEvent, GameState, InputEvent, TickInput, tick};
    use apple_dodge::{Settings, Tuning};

    const GAME_OVER_TEXT: &str = "Game over! That was supposed to be easy.";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
            let input = TickInput {
                events: Vec::new(),
                idle_mode: settings.demo,
            };
            Self {
                state: GameState::with_tuning(seed, tuning),
                render_state: None,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                input,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Queue an input for the next tick
        fn push_input(&mut self, event: InputEvent) {
            self.input.events.push(event);
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Events are consumed by the first tick that sees them
                self.input.events.clear();
                self.report_events();
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn report_events(&mut self) {
            for event in self.state.take_events() {
                match event {
                    GameEvent::Scored { score } => log::debug!("Score: {}", score),
                    GameEvent::GameOver { score } => log::info!("Final score: {}", score),
                    GameEvent::Spawned { .. } | GameEvent::DifficultyRaised { .. } => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }

            if let Some(el) = document.get_element_by_id("fps") {
                let _ = el
                    .class_list()
                    .toggle_with_force("hidden", !self.settings.show_fps);
                el.set_text_content(Some(&format!("{} fps", self.fps)));
            }

            let over = self.state.is_over();
            if let Some(el) = document.get_element_by_id("game-over-message") {
                el.set_text_content(Some(GAME_OVER_TEXT));
                let _ = el.class_list().toggle_with_force("hidden", !over);
            }
            if let Some(el) = document.get_element_by_id("restart-button") {
                let _ = el.class_list().toggle_with_force("hidden", !over);
            }
        }

        /// Start a fresh session
        fn restart(&mut self, seed: u64) {
            self.state.restart(seed);
            self.accumulator = 0.0;
            self.input.events.clear();
        }
    }

    /// Viewport coordinates for a point given in client (page) pixels
    fn client_to_viewport(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
        let rect = canvas.get_bounding_client_rect();
        let letterbox = Letterbox::fit(canvas.client_width() as f32, canvas.client_height() as f32);
        let p = letterbox.to_viewport(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        );
        (p.x, p.y)
    }

    fn set_cursor(canvas: &HtmlCanvasElement, grabbing: bool) {
        let cursor = if grabbing { "grabbing" } else { "grab" };
        let _ = canvas.style().set_property("cursor", cursor);
    }

    /// Tuning from an inline `<script id="tuning" type="application/json">` block
    fn load_tuning(document: &web_sys::Document) -> Tuning {
        match document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        {
            Some(json) if !json.trim().is_empty() => Tuning::from_json_or_default(&json),
            _ => Tuning::default(),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Apple Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let tuning = load_tuning(&document);
        let palette = Palette::for_settings(&settings);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, tuning, settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, palette).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        set_cursor(&canvas, false);

        request_animation_frame(game);

        log::info!("Apple Dodge running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match key_action(&event.key()) {
                    Some(KeyAction::Move(dir)) => {
                        event.prevent_default();
                        g.push_input(InputEvent::Key(dir));
                    }
                    Some(KeyAction::ToggleDemo) => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    Some(KeyAction::Restart) if g.state.is_over() => {
                        g.restart(js_sys::Date::now() as u64);
                        g.update_hud();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse press starts a drag (only counts if it lands on the paddle)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = client_to_viewport(&canvas_clone, event.client_x(), event.client_y());
                let mut g = game.borrow_mut();
                let on_paddle = g.state.player.rect().contains_point(glam::Vec2::new(x, y));
                g.push_input(InputEvent::PointerDown { x, y });
                if on_paddle && !g.state.is_over() {
                    set_cursor(&canvas_clone, true);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move/release are tracked on the whole document
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, _) = client_to_viewport(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().push_input(InputEvent::PointerMove { x });
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().push_input(InputEvent::PointerUp);
                set_cursor(&canvas_clone, false);
            });
            let _ = document
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) =
                        client_to_viewport(&canvas_clone, touch.client_x(), touch.client_y());
                    game.borrow_mut().push_input(InputEvent::TouchStart { x, y });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move/end
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let (x, _) =
                        client_to_viewport(&canvas_clone, touch.client_x(), touch.client_y());
                    game.borrow_mut().push_input(InputEvent::TouchMove { x });
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().push_input(InputEvent::TouchEnd);
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                let mut g = game.borrow_mut();
                g.restart(seed);
                g.update_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Upper bound on a headless session (10 minutes of game time)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_TICKS: u64 = 30_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use apple_dodge::Tuning;

    env_logger::init();
    log::info!("Apple Dodge (native) starting...");
    log::info!("The playable version runs in the browser - run with `trunk serve`");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(err) => {
                log::warn!("Could not read {}: {}; using default tuning", path, err);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    println!("\nRunning headless demo session (seed {})...", seed);
    run_headless(seed, tuning, HEADLESS_MAX_TICKS);
}

/// Let the autopilot play until it gets hit or time runs out
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, tuning: apple_dodge::Tuning, max_ticks: u64) {
    use apple_dodge::sim::{GameEvent, GameState, TickInput, tick};

    let mut state = GameState::with_tuning(seed, tuning);
    let input = TickInput {
        events: Vec::new(),
        idle_mode: true,
    };

    while !state.is_over() && state.time_ticks < max_ticks {
        tick(&mut state, &input);
        for event in state.take_events() {
            match event {
                GameEvent::Scored { score } if score % 10 == 0 => {
                    log::info!("Score {} at tick {}", score, state.time_ticks);
                }
                GameEvent::DifficultyRaised {
                    fall_speed,
                    spawn_cap,
                    spawn_interval_ms,
                } => log::debug!(
                    "speed {:.2} cap {} interval {:.0} ms",
                    fall_speed,
                    spawn_cap,
                    spawn_interval_ms
                ),
                _ => {}
            }
        }
    }

    let outcome = if state.is_over() { "hit" } else { "time up" };
    println!(
        "Session ended ({}): score {}, {} ticks, fall speed {:.2}, spawn cap {}",
        outcome, state.score, state.time_ticks, state.fall_speed, state.spawn_cap
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
