// Page bootstrap. Everything the components share is collected in `AppContext`
// and handed to each of them; a component whose elements are missing simply
// does not start.

use crate::animation::ScheduledTask;
use crate::background::ParticleBackground;
use crate::config::{FieldConfig, TypewriterConfig};
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::storage::{LocalStore, MemoryStore, PreferenceStore};
use crate::theme::{apply_theme, ThemeController, ThemeToggle};
use crate::typewriter;
use crate::utils;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub const THEME_TOGGLE_ID: &str = "themeToggle";

pub struct AppContext {
    pub window: Window,
    pub document: Document,
    pub theme: Rc<ThemeController>,
}

impl AppContext {
    pub fn new(window: Window, document: Document, store: Box<dyn PreferenceStore>) -> Self {
        AppContext {
            window,
            document,
            theme: Rc::new(ThemeController::load(store)),
        }
    }

    pub fn from_browser() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let store: Box<dyn PreferenceStore> = match LocalStore::open(&window) {
            Ok(store) => Box::new(store),
            Err(err) => {
                utils::warn(&format!("theme will not persist: {}", err));
                Box::new(MemoryStore::new())
            }
        };
        Ok(AppContext::new(window, document, store))
    }
}

// Handle to everything `mount_page` started. Dropping it stops the components.
#[wasm_bindgen]
pub struct Page {
    background: Option<ParticleBackground>,
    typewriter: Option<ScheduledTask>,
    theme_listener: Option<Listener>,
}

#[wasm_bindgen]
impl Page {
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.stop();
        }
        if let Some(task) = &self.typewriter {
            task.cancel();
        }
        self.theme_listener = None;
    }
}

impl Page {
    pub fn mount(ctx: &AppContext) -> Page {
        let field_config = FieldConfig::default();
        let background = ParticleBackground::mount_on(
            &ctx.window,
            &ctx.document,
            field_config.canvas_id,
            field_config,
        );

        let typewriter = match typewriter::mount(&ctx.window, &ctx.document, TypewriterConfig::default()) {
            Ok(task) => task,
            Err(err) => {
                utils::warn(&format!("typewriter disabled: {}", err));
                None
            }
        };

        if let Some(body) = ctx.document.body() {
            if let Err(err) = apply_theme(&body, ctx.theme.current()) {
                utils::warn(&format!("could not apply saved theme: {}", err));
            }
        }
        let theme_listener = ThemeToggle::find(&ctx.document, THEME_TOGGLE_ID)
            .and_then(|toggle| match toggle.bind(ctx.theme.clone()) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    utils::warn(&format!("theme toggle disabled: {}", err));
                    None
                }
            });

        Page {
            background,
            typewriter,
            theme_listener,
        }
    }
}

// Mounts every component on the current page.
#[wasm_bindgen]
pub fn mount_page() -> std::result::Result<Page, JsValue> {
    let ctx = AppContext::from_browser()?;
    Ok(Page::mount(&ctx))
}
