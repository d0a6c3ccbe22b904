// Light/dark theme preference and the toggle button that flips it.

use crate::dom::Listener;
use crate::error::Result;
use crate::storage::PreferenceStore;
use crate::utils;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const THEME_KEY: &str = "theme";
pub const LIGHT_CLASS: &str = "light";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    // Only an explicit "light" selects the light theme
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // (sun, moon) icon colors for this theme.
    pub fn icon_colors(&self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#fbbf24", "#94a3b8"),
            Theme::Dark => ("#94a3b8", "#fff"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    current: Cell<Theme>,
}

impl ThemeController {
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(err) => {
                utils::warn(&format!("could not read theme preference: {}", err));
                None
            }
        };
        let current = Cell::new(Theme::from_stored(stored.as_deref()));
        ThemeController { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    // Flips the theme and persists it. The in-memory theme changes even if
    // persisting fails.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.store.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }
}

// Sets or clears the `light` class on `<body>`. Runs at page load whether or not
// the toggle button exists.
pub fn apply_theme(body: &HtmlElement, theme: Theme) -> Result<()> {
    let classes = body.class_list();
    match theme {
        Theme::Light => classes.add_1(LIGHT_CLASS)?,
        Theme::Dark => classes.remove_1(LIGHT_CLASS)?,
    }
    Ok(())
}

// Elements the theme toggle needs, looked up once.
pub struct ThemeToggle {
    body: HtmlElement,
    button: Element,
    sun: Option<HtmlElement>,
    moon: Option<HtmlElement>,
}

impl ThemeToggle {
    pub fn find(document: &Document, button_id: &str) -> Option<ThemeToggle> {
        let body = document.body()?;
        let button = document.get_element_by_id(button_id)?;
        let icon = |selector: &str| {
            button
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        };
        let sun = icon(".fa-sun");
        let moon = icon(".fa-moon");
        Some(ThemeToggle {
            body,
            button,
            sun,
            moon,
        })
    }

    pub fn apply(&self, theme: Theme) -> Result<()> {
        apply_theme(&self.body, theme)
    }

    pub fn tint_icons(&self, theme: Theme) -> Result<()> {
        let (sun_color, moon_color) = theme.icon_colors();
        if let Some(sun) = &self.sun {
            sun.style().set_property("color", sun_color)?;
        }
        if let Some(moon) = &self.moon {
            moon.style().set_property("color", moon_color)?;
        }
        Ok(())
    }

    // Wires the button only; the stored theme is applied by `apply_theme` at mount.
    // The button responds for as long as the returned listener is alive.
    pub fn bind(self, controller: Rc<ThemeController>) -> Result<Listener> {
        let button = self.button.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let theme = match controller.toggle() {
                Ok(theme) => theme,
                Err(err) => {
                    utils::warn(&format!("could not save theme preference: {}", err));
                    controller.current()
                }
            };
            if let Err(err) = self.apply(theme).and_then(|_| self.tint_icons(theme)) {
                utils::warn(&format!("could not apply theme: {}", err));
            }
        }) as Box<dyn FnMut()>);
        Listener::attach(&button, "click", on_click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::storage::MemoryStore;

    struct ReadOnly(Option<String>);

    impl PreferenceStore for ReadOnly {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(self.0.clone())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(FieldError::Js("quota exceeded".into()))
        }
    }

    #[test]
    fn only_light_selects_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn toggle_persists() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        let controller = ThemeController::load(Box::new(store));
        assert_eq!(controller.current(), Theme::Light);

        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
        assert_eq!(
            controller.store.get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(controller.toggle().unwrap(), Theme::Light);
        assert_eq!(
            controller.store.get(THEME_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn toggle_survives_write_failure() {
        let controller = ThemeController::load(Box::new(ReadOnly(None)));
        assert_eq!(controller.current(), Theme::Dark);
        assert!(controller.toggle().is_err());
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn icon_colors_follow_theme() {
        assert_eq!(Theme::Light.icon_colors(), ("#fbbf24", "#94a3b8"));
        assert_eq!(Theme::Dark.icon_colors(), ("#94a3b8", "#fff"));
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
