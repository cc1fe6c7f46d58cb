//! Corn Battles entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use corn_battles::consts::*;
    use corn_battles::highscores::format_date;
    use corn_battles::render::draw_frame;
    use corn_battles::sim::{GameEvent, TickInput};
    use corn_battles::{Screen, Session};

    /// App instance holding all state
    struct App {
        session: Session,
        ctx: CanvasRenderingContext2d,
        /// Held movement keys, sampled once per tick
        up: bool,
        down: bool,
        left: bool,
        right: bool,
        /// Edge-triggered fire request, cleared after each tick
        fire: bool,
        /// Ticks remaining on the current wave notice
        notice_ticks: u32,
    }

    impl App {
        fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self {
                session: Session::new(),
                ctx,
                up: false,
                down: false,
                left: false,
                right: false,
                fire: false,
                notice_ticks: 0,
            }
        }

        /// Run one frame: tick the live run (if any), then render
        fn frame(&mut self, document: &Document) {
            if self.session.screen() != Screen::Game {
                return;
            }

            let now_ms = js_sys::Date::now();
            let input = TickInput {
                up: self.up,
                down: self.down,
                left: self.left,
                right: self.right,
                fire: self.fire,
                now_ms,
            };
            self.fire = false;

            let events = self.session.tick_game(&input, now_ms);
            for event in events {
                match event {
                    GameEvent::WaveStarted { wave, .. } => {
                        set_text(document, "notice", &format!("WAVE {wave}"));
                        show(document, "notice");
                        self.notice_ticks = 90;
                    }
                    GameEvent::GameOver { score, wave } => {
                        set_text(document, "final-score", &score.to_string());
                        set_text(document, "final-wave", &wave.to_string());
                    }
                }
            }

            if self.notice_ticks > 0 {
                self.notice_ticks -= 1;
                if self.notice_ticks == 0 {
                    hide(document, "notice");
                }
            }

            // Render strictly after all of this tick's mutations
            if let Some(game) = self.session.game() {
                draw_frame(&self.ctx, game, now_ms);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Corn Battles starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let app = Rc::new(RefCell::new(App::new(ctx)));

        setup_keyboard(app.clone());
        setup_buttons(app.clone());
        sync_screens(&document, &app.borrow());

        request_animation_frame(app);

        log::info!("Corn Battles running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let document = web_sys::window().unwrap().document().unwrap();
            let mut a = app.borrow_mut();
            let before = a.session.screen();
            a.frame(&document);
            // The death branch can move us off the game screen mid-frame
            if a.session.screen() != before {
                sync_screens(&document, &a);
            }
        }
        request_animation_frame(app);
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().to_lowercase().as_str() {
                    "w" | "arrowup" => a.up = true,
                    "s" | "arrowdown" => a.down = true,
                    "a" | "arrowleft" => a.left = true,
                    "d" | "arrowright" => a.right = true,
                    " " => {
                        event.prevent_default();
                        a.fire = true;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().to_lowercase().as_str() {
                    "w" | "arrowup" => a.up = false,
                    "s" | "arrowdown" => a.down = false,
                    "a" | "arrowleft" => a.left = false,
                    "d" | "arrowright" => a.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Wire a screen-changing button by element id
    fn on_click(app: &Rc<RefCell<App>>, id: &str, action: fn(&mut Session)) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id(id) {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut a = app.borrow_mut();
                action(&mut a.session);
                sync_screens(&document, &a);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let start = |s: &mut Session| s.start_game(js_sys::Date::now() as u64);
        on_click(&app, "start-btn", start);
        on_click(&app, "play-again-btn", start);
        on_click(&app, "records-btn", |s| s.show_records());
        on_click(&app, "over-records-btn", |s| s.show_records());
        on_click(&app, "over-menu-btn", |s| s.exit_to_menu());
        on_click(&app, "records-back-btn", |s| s.exit_to_menu());
        on_click(&app, "exit-btn", |s| s.exit_to_menu());
    }

    /// Show the DOM panel matching the current screen, hide the rest
    fn sync_screens(document: &Document, app: &App) {
        let screen = app.session.screen();
        toggle(document, "menu", screen == Screen::Menu);
        toggle(document, "game", screen == Screen::Game);
        toggle(document, "game-over", screen == Screen::GameOver);
        toggle(document, "records", screen == Screen::Records);

        if screen == Screen::Records {
            render_records(document, app);
        }
        if screen != Screen::Game {
            hide(document, "notice");
        }
    }

    fn render_records(document: &Document, app: &App) {
        let Some(list) = document.get_element_by_id("records-list") else {
            return;
        };
        let board = app.session.leaderboard();
        if board.is_empty() {
            list.set_inner_html("<div class=\"record-row\">No records yet</div>");
            return;
        }
        let mut html = String::new();
        for (i, record) in board.records.iter().enumerate() {
            html.push_str(&format!(
                "<div class=\"record-row\">#{} &mdash; score {}, wave {} &bull; {}</div>",
                i + 1,
                record.score,
                record.wave,
                format_date(record.timestamp)
            ));
        }
        list.set_inner_html(&html);
    }

    fn toggle(document: &Document, id: &str, visible: bool) {
        if visible {
            show(document, id);
        } else {
            hide(document, id);
        }
    }

    fn show(document: &Document, id: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", "");
        }
    }

    fn hide(document: &Document, id: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use corn_battles::sim::TickInput;
    use corn_battles::{Screen, Session};

    env_logger::init();
    log::info!("Corn Battles (native) starting...");
    log::info!("Native mode is a headless smoke run - use `trunk serve` for the web version");

    // Scripted run: hold fire and drift up/down until the run ends
    let mut session = Session::new();
    session.start_game(0xC0FFEE);

    let mut now_ms = 0.0;
    for tick_no in 0..100_000u32 {
        let input = TickInput {
            up: (tick_no / 120).is_multiple_of(2),
            down: !(tick_no / 120).is_multiple_of(2),
            fire: true,
            now_ms,
            ..Default::default()
        };
        session.tick_game(&input, now_ms);
        now_ms += 1000.0 / 60.0;
        if session.screen() != Screen::Game {
            break;
        }
    }

    log::info!(
        "Demo run over: score {}, wave {}",
        session.last_score,
        session.last_wave
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
