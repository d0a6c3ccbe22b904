// Full-viewport particle background: glues a `ParticleField` to a canvas, the
// frame loop and the window resize event.

use crate::animation::{ScheduledTask, Tick};
use crate::config::FieldConfig;
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::field::ParticleField;
use crate::renderer::CanvasSurface;
use crate::utils::{self, Timer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

struct Scene {
    field: ParticleField,
    surface: CanvasSurface,
}

#[wasm_bindgen]
pub struct ParticleBackground {
    scene: Rc<RefCell<Scene>>,
    task: ScheduledTask,
    on_resize: Option<Listener>,
}

#[wasm_bindgen]
impl ParticleBackground {
    // Mounts onto the canvas with the given id. Returns `undefined` and leaves
    // the page alone when the canvas is missing or unusable.
    pub fn mount(canvas_id: &str) -> Option<ParticleBackground> {
        let window = dom::window().ok()?;
        let document = dom::document(&window).ok()?;
        Self::mount_on(&window, &document, canvas_id, FieldConfig::default())
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.particles().len()
    }

    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    // Cancels the pending frame and detaches the resize listener.
    pub fn stop(&mut self) {
        self.task.cancel();
        self.on_resize = None;
    }
}

impl ParticleBackground {
    pub fn mount_on(
        window: &Window,
        document: &Document,
        canvas_id: &str,
        config: FieldConfig,
    ) -> Option<ParticleBackground> {
        match Self::try_mount(window, document, canvas_id, config) {
            Ok(background) => Some(background),
            Err(err) => {
                utils::warn(&format!("particle background disabled: {}", err));
                None
            }
        }
    }

    fn try_mount(
        window: &Window,
        document: &Document,
        canvas_id: &str,
        config: FieldConfig,
    ) -> Result<ParticleBackground> {
        let surface = CanvasSurface::acquire(document, canvas_id)?;
        let (width, height) = dom::viewport_size(window)?;
        surface.resize(width, height);
        let field = ParticleField::new(width, height, config, &mut rand::thread_rng());
        let scene = Rc::new(RefCell::new(Scene { field, surface }));

        let frame_scene = scene.clone();
        let task = ScheduledTask::spawn(window, Tick::NextFrame, move || {
            let mut scene = frame_scene.borrow_mut();
            let _timer = if config.profile {
                Some(Timer::new("ParticleBackground::frame"))
            } else {
                None
            };
            let Scene { field, surface } = &mut *scene;
            match field.render(surface) {
                Ok(()) => Tick::NextFrame,
                Err(err) => {
                    utils::error(&format!("particle background stopped: {}", err));
                    Tick::Stop
                }
            }
        })?;

        let resize_scene = scene.clone();
        let resize_window = window.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let (width, height) = match dom::viewport_size(&resize_window) {
                Ok(size) => size,
                Err(err) => {
                    utils::warn(&format!("could not read viewport size: {}", err));
                    return;
                }
            };
            let mut scene = resize_scene.borrow_mut();
            scene.surface.resize(width, height);
            scene.field.resize(width, height, &mut rand::thread_rng());
        }) as Box<dyn FnMut()>);
        let on_resize = Listener::attach(window, "resize", on_resize)?;

        utils::log(&format!(
            "particle background: {}x{} with {} particles",
            width,
            height,
            scene.borrow().field.particles().len()
        ));

        Ok(ParticleBackground {
            scene,
            task,
            on_resize: Some(on_resize),
        })
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}
