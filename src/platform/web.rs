//! Browser glue (wasm32 only)

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::error::GameError;
use crate::input::{Input, mouse};
use crate::resources::{ResourceConfig, ResourceRepository, Sprite, key_from_path};
use crate::timing::Clock;

/// Decoded images by key, shared with the canvas surface
pub type SharedImages = Rc<RefCell<HashMap<String, HtmlImageElement>>>;

/// Images fetched through `HtmlImageElement`
#[derive(Clone)]
pub struct WebRepository {
    images: SharedImages,
    /// Keys still in flight
    loading: Rc<RefCell<Vec<String>>>,
}

impl WebRepository {
    /// Start fetching every configured image
    pub fn start(config: &ResourceConfig) -> Result<Self, GameError> {
        let repo = Self {
            images: Rc::new(RefCell::new(HashMap::new())),
            loading: Rc::new(RefCell::new(Vec::new())),
        };
        for path in &config.images {
            repo.start_loading_image(&key_from_path(path), &config.url_for(path))?;
        }
        log::info!("Loading {} images from {}", config.images.len(), config.prefix);
        Ok(repo)
    }

    pub fn images(&self) -> SharedImages {
        self.images.clone()
    }

    fn start_loading_image(&self, key: &str, url: &str) -> Result<(), GameError> {
        let element = HtmlImageElement::new()
            .map_err(|e| GameError::Canvas(format!("cannot create image: {:?}", e)))?;
        self.loading.borrow_mut().push(key.to_string());

        {
            let images = self.images.clone();
            let loading = self.loading.clone();
            let loaded = element.clone();
            let key = key.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                images.borrow_mut().insert(key.clone(), loaded.clone());
                loading.borrow_mut().retain(|k| *k != key);
            });
            element.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        {
            let loading = self.loading.clone();
            let key = key.to_string();
            let url = url.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::warn!("Failed to load image {} from {}", key, url);
                loading.borrow_mut().retain(|k| *k != key);
            });
            element.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        element.set_src(url);
        Ok(())
    }
}

impl ResourceRepository for WebRepository {
    fn image(&self, key: &str) -> Result<Sprite, GameError> {
        self.images
            .borrow()
            .get(key)
            .map(|img| Sprite::new(key, img.natural_width() as f32, img.natural_height() as f32))
            .ok_or_else(|| GameError::AssetNotFound(key.to_string()))
    }

    fn is_loading(&self) -> bool {
        !self.loading.borrow().is_empty()
    }
}

/// `performance.now()`
pub struct PerformanceClock {
    performance: web_sys::Performance,
}

impl PerformanceClock {
    pub fn new() -> Result<Self, GameError> {
        let performance = web_sys::window()
            .and_then(|w| w.performance())
            .ok_or_else(|| GameError::Canvas("performance API unavailable".to_string()))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        self.performance.now()
    }
}

fn window_size(window: &web_sys::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep `input` in sync with the keyboard, mouse and window
pub fn install_input_listeners(input: Rc<RefCell<Input>>) -> Result<(), GameError> {
    let window = web_sys::window().ok_or_else(|| GameError::Canvas("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| GameError::Canvas("no document".to_string()))?;

    input.borrow_mut().window_size = window_size(&window);

    // Keyboard
    {
        let input = input.clone();
        listen(&window, "keydown", move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                input.borrow_mut().key_down(event.key_code());
            }
        });
    }
    {
        let input = input.clone();
        listen(&window, "keyup", move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                input.borrow_mut().key_up(event.key_code());
            }
        });
    }

    // Mouse
    {
        let input = input.clone();
        listen(&window, "mousedown", move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                input.borrow_mut().mouse.buttons = event.buttons();
            }
        });
    }
    {
        let input = input.clone();
        listen(&window, "mouseup", move |_event: web_sys::Event| {
            input.borrow_mut().mouse.buttons = mouse::NOTHING;
        });
    }
    {
        let input = input.clone();
        listen(&window, "mousemove", move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                input.borrow_mut().mouse.position =
                    Vec2::new(event.client_x() as f32, event.client_y() as f32);
            }
        });
    }
    {
        let input = input.clone();
        listen(&document, "mouseenter", move |_event: web_sys::Event| {
            input.borrow_mut().mouse.in_window = true;
        });
    }
    {
        let input = input.clone();
        listen(&document, "mouseleave", move |_event: web_sys::Event| {
            input.borrow_mut().mouse.in_window = false;
        });
    }

    // Window
    {
        let input = input.clone();
        listen(&window, "blur", move |_event: web_sys::Event| {
            input.borrow_mut().release_all();
        });
    }
    {
        let input = input.clone();
        let resized = window.clone();
        listen(&window, "resize", move |_event: web_sys::Event| {
            input.borrow_mut().window_size = window_size(&resized);
        });
    }

    input.borrow_mut().mouse.in_window = true;
    Ok(())
}
