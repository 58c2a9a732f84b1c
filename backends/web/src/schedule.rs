use estuary::Defer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};

/// Defers render flushes onto the host's microtask queue.
///
/// All tracked mutations within one JavaScript task therefore coalesce into
/// a single render pass at the end of that task, and passes still run
/// before the browser paints.
#[derive(Debug, Default, Clone, Copy)]
pub struct Microtask;

impl Defer for Microtask {
    fn defer(&self, job: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || job());
        web_sys::window()
            .expect_throw("no `window` to schedule render passes on")
            .queue_microtask(callback.unchecked_ref());
    }
}
