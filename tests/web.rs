// Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_particles::config::{FieldConfig, TypewriterConfig};
use portfolio_particles::storage::{LocalStore, PreferenceStore};
use portfolio_particles::theme::{
    apply_theme, Theme, ThemeController, ThemeToggle, LIGHT_CLASS, THEME_KEY,
};
use portfolio_particles::{dom, typewriter, AppContext, Page, ParticleBackground};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> (Window, Document) {
    let window = dom::window().unwrap();
    let document = dom::document(&window).unwrap();
    (window, document)
}

fn append(document: &Document, tag: &str, id: &str) -> HtmlElement {
    let el = document.create_element(tag).unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into::<HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_no_op() {
    let (window, document) = page();
    let background = ParticleBackground::mount_on(&window, &document, "noSuchCanvas", FieldConfig::default());
    assert!(background.is_none());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_a_no_op() {
    let (_, document) = page();
    let div = append(&document, "div", "notACanvas");
    assert!(ParticleBackground::mount("notACanvas").is_none());
    div.remove();
}

#[wasm_bindgen_test]
fn mounts_and_stops() {
    let (window, document) = page();
    let canvas = append(&document, "canvas", "testParticleCanvas");
    let mut background =
        ParticleBackground::mount_on(&window, &document, "testParticleCanvas", FieldConfig::default())
            .unwrap();

    let (width, height) = dom::viewport_size(&window).unwrap();
    let expected = (width as f64 * height as f64 / 12000.0).floor() as usize;
    assert_eq!(background.particle_count(), expected);
    assert!(background.is_running());

    background.stop();
    assert!(!background.is_running());
    canvas.remove();
}

#[wasm_bindgen_test]
fn resize_event_resizes_canvas_and_reseeds() {
    let (window, document) = page();
    let canvas = append(&document, "canvas", "resizeParticleCanvas")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let mut background =
        ParticleBackground::mount_on(&window, &document, "resizeParticleCanvas", FieldConfig::default())
            .unwrap();
    let (width, height) = dom::viewport_size(&window).unwrap();
    let expected = (width as f64 * height as f64 / 12000.0).floor() as usize;

    // shrink the canvas behind the background's back; the resize handler restores it
    canvas.set_width(1);
    canvas.set_height(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (width, height));
    assert_eq!(background.particle_count(), expected);

    // once stopped, resize events no longer reach the scene
    background.stop();
    canvas.set_width(1);
    canvas.set_height(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (1, 1));
    assert_eq!(background.particle_count(), expected);
    canvas.remove();
}

#[wasm_bindgen_test]
fn saved_theme_applies_without_toggle_button() {
    let (window, document) = page();
    let body = document.body().unwrap();
    body.class_list().remove_1(LIGHT_CLASS).unwrap();
    assert!(document.get_element_by_id("themeToggle").is_none());

    let store = LocalStore::open(&window).unwrap();
    store.set(THEME_KEY, "light").unwrap();
    let ctx = AppContext::from_browser().unwrap();
    let page = Page::mount(&ctx);
    assert!(body.class_list().contains(LIGHT_CLASS));

    drop(page);
    body.class_list().remove_1(LIGHT_CLASS).unwrap();
    store.set(THEME_KEY, "dark").unwrap();
}

#[wasm_bindgen_test]
fn typewriter_without_target_does_not_start() {
    let (window, document) = page();
    let config = TypewriterConfig {
        selector: ".no-such-headline",
        ..TypewriterConfig::default()
    };
    assert!(typewriter::mount(&window, &document, config).unwrap().is_none());
}

#[wasm_bindgen_test]
fn theme_round_trips_through_local_storage() {
    let (window, document) = page();
    let store = LocalStore::open(&window).unwrap();
    store.set(THEME_KEY, "light").unwrap();

    let controller = Rc::new(ThemeController::load(Box::new(LocalStore::open(&window).unwrap())));
    assert_eq!(controller.current(), Theme::Light);

    let button = append(&document, "button", "testThemeToggle");
    let toggle = ThemeToggle::find(&document, "testThemeToggle").unwrap();
    let body = document.body().unwrap();
    apply_theme(&body, controller.current()).unwrap();
    let listener = toggle.bind(controller.clone()).unwrap();
    assert!(body.class_list().contains(LIGHT_CLASS));

    button.click();
    assert_eq!(controller.current(), Theme::Dark);
    assert!(!body.class_list().contains(LIGHT_CLASS));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    drop(listener);
    button.click();
    assert_eq!(controller.current(), Theme::Dark);
    button.remove();
}
