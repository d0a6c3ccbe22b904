// Self-rescheduling browser tasks. A task body returns a `Tick` saying when it
// wants to run again; the task owns its pending handle and a `CancelToken`, so
// stopping it is one call instead of hunting down whichever closure is queued.

use crate::dom;
use crate::error::Result;
use crate::utils;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use web_sys::Window;

// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tick {
    NextFrame,
    After(i32),
    Stop,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Pending {
    Frame(i32),
    Timeout(i32),
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct ScheduledTask {
    window: Window,
    token: CancelToken,
    pending: Rc<Cell<Option<Pending>>>,
    callback: Callback,
}

impl ScheduledTask {
    // Queues `step` according to `first`, then keeps re-queueing it according to
    // whatever it returns until it returns `Tick::Stop` or the task is cancelled.
    pub fn spawn<F>(window: &Window, first: Tick, mut step: F) -> Result<ScheduledTask>
    where
        F: FnMut() -> Tick + 'static,
    {
        let token = CancelToken::new();
        let pending: Rc<Cell<Option<Pending>>> = Rc::new(Cell::new(None));
        let callback: Callback = Rc::new(RefCell::new(None));

        // The closure only holds a weak handle to itself so dropping the task frees it
        let weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&callback);
        let t = token.clone();
        let p = pending.clone();
        let w = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            p.set(None);
            if t.is_cancelled() {
                return;
            }
            let next = step();
            if t.is_cancelled() {
                return;
            }
            if let Some(cb) = weak.upgrade() {
                if let Some(f) = cb.borrow().as_ref() {
                    match schedule(&w, f, next) {
                        Ok(handle) => p.set(handle),
                        Err(err) => {
                            utils::error(&format!("failed to reschedule task: {}", err));
                            t.cancel();
                        }
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        let handle = match callback.borrow().as_ref() {
            Some(f) => schedule(window, f, first)?,
            None => None,
        };
        pending.set(handle);

        Ok(ScheduledTask {
            window: window.clone(),
            token,
            pending,
            callback,
        })
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.pending.get().is_some()
    }

    pub fn cancel(&self) {
        self.token.cancel();
        match self.pending.take() {
            Some(Pending::Frame(id)) => {
                let _ = self.window.cancel_animation_frame(id);
            }
            Some(Pending::Timeout(id)) => self.window.clear_timeout_with_handle(id),
            None => {}
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(window: &Window, f: &Closure<dyn FnMut()>, tick: Tick) -> Result<Option<Pending>> {
    Ok(match tick {
        Tick::NextFrame => Some(Pending::Frame(dom::request_animation_frame(window, f)?)),
        Tick::After(delay_ms) => Some(Pending::Timeout(dom::set_timeout(window, f, delay_ms)?)),
        Tick::Stop => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
