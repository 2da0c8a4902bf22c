//! Cosmic Quotes entry point
//!
//! Wires the page collaborators to the sky and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, Window};

    use cosmic_quotes::page::{self, BoundPage, CANVAS_ID, PageElements};
    use cosmic_quotes::renderer::Canvas2d;
    use cosmic_quotes::{QuoteDisplay, Result, Settings, Sky, StartupError};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// The two DOM text slots for the quote
    struct DomQuote {
        text: Element,
        author: Element,
    }

    impl QuoteDisplay for DomQuote {
        fn show_quote(&mut self, text: &str, author: &str) {
            self.text.set_text_content(Some(text));
            self.author.set_text_content(Some(author));
        }
    }

    /// Everything the page callbacks share
    struct App {
        sky: Sky<Pcg32>,
        canvas: Canvas2d,
        quote: DomQuote,
    }

    fn window_size(window: &Window) -> (f64, f64) {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }

    /// Turn raw elements into the 2D canvas and quote slots
    fn bind(elements: PageElements<Element>) -> Result<(Settings, BoundPage<Canvas2d, DomQuote, Element>)> {
        let canvas_el: HtmlCanvasElement = elements
            .canvas
            .dyn_into()
            .map_err(|_| StartupError::NotACanvas { id: CANVAS_ID })?;
        let settings = Settings::from_attribute(canvas_el.get_attribute(Settings::ATTRIBUTE).as_deref())?;
        let canvas = Canvas2d::new(canvas_el)?;
        let quote = DomQuote {
            text: elements.quote_text,
            author: elements.quote_author,
        };
        Ok((
            settings,
            BoundPage {
                canvas,
                quote,
                shuffle: elements.shuffle,
            },
        ))
    }

    pub fn run() -> Result<()> {
        log::info!("Cosmic Quotes starting...");

        let window = web_sys::window().ok_or(StartupError::MissingWindow)?;
        let document = window.document().ok_or(StartupError::MissingDocument)?;

        let seed = js_sys::Date::now() as u64;
        let (width, height) = window_size(&window);
        let (sky, bound) = page::launch(
            |id| document.get_element_by_id(id),
            bind,
            Pcg32::seed_from_u64(seed),
            width,
            height,
        )?;
        log::info!("Sky initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            sky,
            canvas: bound.canvas,
            quote: bound.quote,
        }));

        setup_resize(&window, app.clone());
        setup_shuffle_button(&bound.shuffle, app.clone());

        request_animation_frame(app);

        log::info!("Cosmic Quotes running!");
        Ok(())
    }

    fn setup_resize(window: &Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            app.sky.resize(&mut app.canvas, &mut app.quote, width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_shuffle_button(btn: &Element, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            app.sky.shuffle_stars(&mut app.quote);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            animate(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animate(app: Rc<RefCell<App>>) {
        {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            app.sky.tick(&mut app.canvas);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = wasm_app::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cosmic_quotes::quotes::QuoteSlots;
    use cosmic_quotes::renderer::RecordingCanvas;
    use cosmic_quotes::{Settings, Sky};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Cosmic Quotes (native) starting...");
    log::info!("Native mode draws into a recording canvas - run with `trunk serve` for the web version");

    let settings = match Settings::from_attribute(std::env::var("COSMIC_QUOTES_SETTINGS").ok().as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut canvas = RecordingCanvas::new();
    let mut slots = QuoteSlots::default();
    let mut sky = Sky::start(settings, Pcg32::seed_from_u64(seed), &mut canvas, &mut slots, 800.0, 600.0);
    log::info!("Sky initialized with seed: {}", seed);

    for _ in 0..60 {
        canvas.clear_commands();
        sky.tick(&mut canvas);
    }

    log::info!(
        "Drew {} frames: {} stars, {} constellations, {} commands in last frame",
        sky.frames(),
        sky.field().stars.len(),
        sky.field().constellations.len(),
        canvas.last_frame().len()
    );
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(canvas.last_frame()) {
            Ok(json) => log::debug!("Last frame: {}", json),
            Err(e) => log::warn!("Could not serialize frame: {}", e),
        }
    }

    println!("{}", slots.text);
    println!("{}", slots.author);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
