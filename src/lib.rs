mod utils;

pub mod animation;
pub mod app;
pub mod background;
pub mod color;
pub mod config;
pub mod dom;
pub mod error;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod storage;
pub mod theme;
pub mod typewriter;

use wasm_bindgen::prelude::*;

pub use app::{mount_page, AppContext, Page};
pub use background::ParticleBackground;
pub use error::FieldError;
pub use field::ParticleField;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
