//! Binds a [`Recognizer`] to an element's pointer events.
//!
//! `attach` registers `pointerdown`/`pointermove`/`pointerup`/`pointercancel`
//! listeners and returns a [`Detach`] that removes them again. Handlers are
//! read through a shared cell on every notification, so whoever owns the cell
//! can swap them without re-attaching.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, PointerEvent};

use crate::model::{ContactEvent, ContactKind, GestureOptions, Modality, Point};
use crate::recognizer::{GestureHandlers, Recognizer};
use crate::util::clog;

pub type HandlerCell = Rc<RefCell<GestureHandlers>>;

const TOUCH_ACTION: &str = "touch-action";

type Listener = Closure<dyn FnMut(PointerEvent)>;

/// State shared by the four listeners of one attachment.
struct Router {
    recognizer: RefCell<Recognizer>,
    handlers: HandlerCell,
    closed: Cell<bool>,
}

impl Router {
    fn new(handlers: HandlerCell) -> Self {
        Self {
            recognizer: RefCell::new(Recognizer::new()),
            handlers,
            closed: Cell::new(false),
        }
    }

    /// Feeds one notification through the recognizer and hands the snapshots
    /// to the current handlers. Returns how many handler calls were made.
    fn route(&self, event: &ContactEvent) -> usize {
        if self.closed.get() {
            return 0;
        }
        let (snapshots, idle) = {
            let mut rec = self.recognizer.borrow_mut();
            let out = rec.handle(event);
            (out, rec.is_idle())
        };
        if snapshots.is_empty() {
            return 0;
        }
        if idle {
            clog("gesture: all contacts released");
        }
        // Handlers may replace the handler set or detach; never hold a borrow while they run.
        let current = self.handlers.borrow().clone();
        let mut delivered = 0;
        for snap in &snapshots {
            if self.closed.get() {
                break;
            }
            if current.dispatch(snap) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Stops routing and drops every contact. Returns the number dropped.
    fn close(&self) -> usize {
        self.closed.set(true);
        let mut rec = self.recognizer.borrow_mut();
        let dropped = rec.contact_count();
        rec.reset();
        dropped
    }
}

struct Binding {
    target: HtmlElement,
    router: Rc<Router>,
    listeners: Vec<(&'static str, Listener)>,
}

/// Teardown for one attachment. Safe to call any number of times; dropping it
/// also detaches.
pub struct Detach {
    binding: Option<Binding>,
}

impl Detach {
    /// A teardown that has nothing to tear down.
    pub fn inert() -> Self {
        Self { binding: None }
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    pub fn detach(&mut self) {
        let Some(binding) = self.binding.take() else {
            return;
        };
        for (name, cb) in &binding.listeners {
            let _ = binding
                .target
                .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
        let dropped = binding.router.close();
        clog(&format!("gesture: detached, {dropped} live contacts dropped"));
    }
}

impl Drop for Detach {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Starts recognizing gestures on `target`. A missing target yields an inert teardown.
pub fn attach(
    target: Option<&HtmlElement>,
    handlers: HandlerCell,
    options: GestureOptions,
) -> Detach {
    let Some(target) = target else {
        return Detach::inert();
    };
    suppress_touch_action(target);

    let router = Rc::new(Router::new(handlers));
    let mut listeners = Vec::with_capacity(4);
    for kind in [
        ContactKind::Begin,
        ContactKind::Move,
        ContactKind::End,
        ContactKind::Cancel,
    ] {
        let cb = contact_listener(kind, target, &router, options);
        let name = kind.event_name();
        if target
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .is_err()
        {
            clog(&format!("gesture: could not listen for {name}"));
        }
        listeners.push((name, cb));
    }
    clog(&format!(
        "gesture: attached (preventDefault={}, capturePointers={})",
        options.prevent_default, options.capture_pointers
    ));

    Detach {
        binding: Some(Binding {
            target: target.clone(),
            router,
            listeners,
        }),
    }
}

fn contact_listener(
    kind: ContactKind,
    target: &HtmlElement,
    router: &Rc<Router>,
    options: GestureOptions,
) -> Listener {
    let target = target.clone();
    let router = router.clone();
    Closure::wrap(Box::new(move |e: PointerEvent| {
        if options.prevent_default {
            e.prevent_default();
        }
        let modality = Modality::from_pointer_type(&e.pointer_type());
        if !modality.is_tracked() {
            return;
        }
        if kind == ContactKind::Begin && options.capture_pointers {
            capture_pointer(&target, e.pointer_id());
        }
        let event = ContactEvent {
            kind,
            id: e.pointer_id(),
            position: client_position(&e),
            modality,
            timestamp: e.time_stamp(),
        };
        router.route(&event);
    }) as Box<dyn FnMut(_)>)
}

/// `clientX`/`clientY` keep sub-pixel precision in the DOM, but the typed
/// getters truncate to whole pixels. Read the raw properties and fall back to
/// the getters when they are missing.
fn client_position(e: &PointerEvent) -> Point {
    let raw: &JsValue = e.as_ref();
    let read = |name: &str| {
        js_sys::Reflect::get(raw, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
    };
    Point::new(
        coordinate(read("clientX"), e.client_x()),
        coordinate(read("clientY"), e.client_y()),
    )
}

fn coordinate(precise: Option<f64>, whole: i32) -> f64 {
    precise.filter(|v| v.is_finite()).unwrap_or(whole as f64)
}

/// Best effort: platforms without pointer capture keep delivering to `target` as before.
fn capture_pointer(target: &HtmlElement, pointer_id: i32) {
    let element: &JsValue = target.as_ref();
    let supported =
        js_sys::Reflect::has(element, &JsValue::from_str("setPointerCapture")).unwrap_or(false);
    if !supported {
        return;
    }
    if let Err(err) = target.set_pointer_capture(pointer_id) {
        clog(&format!("gesture: pointer capture failed for {pointer_id}: {err:?}"));
    }
}

fn suppress_touch_action(target: &HtmlElement) {
    let style = target.style();
    let current = style.get_property_value(TOUCH_ACTION).unwrap_or_default();
    if let Some(value) = touch_action_override(&current) {
        let _ = style.set_property(TOUCH_ACTION, value);
    }
}

/// The inline value to install, unless the caller already chose one.
fn touch_action_override(current: &str) -> Option<&'static str> {
    if current.trim().is_empty() {
        Some("none")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Phase, Snapshot};
    use yew::Callback;

    #[test]
    fn touch_action_set_only_when_unset() {
        assert_eq!(touch_action_override(""), Some("none"));
        assert_eq!(touch_action_override("  "), Some("none"));
        assert_eq!(touch_action_override("pan-y"), None);
        assert_eq!(touch_action_override("auto"), None);
    }

    #[test]
    fn fractional_coordinates_win() {
        assert_eq!(coordinate(Some(12.75), 12), 12.75);
        assert_eq!(coordinate(None, 12), 12.0);
        assert_eq!(coordinate(Some(f64::NAN), 7), 7.0);
    }

    fn touch(kind: ContactKind, id: i32, x: f64) -> ContactEvent {
        ContactEvent {
            kind,
            id,
            position: Point::new(x, 0.0),
            modality: Modality::Touch,
            timestamp: 0.0,
        }
    }

    fn recording() -> (HandlerCell, Rc<RefCell<Vec<Phase>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = || {
            let seen = seen.clone();
            Some(Callback::from(move |s: Snapshot| seen.borrow_mut().push(s.phase)))
        };
        let handlers = GestureHandlers {
            on_start: record(),
            on_move: record(),
            on_end: record(),
            on_cancel: record(),
        };
        (Rc::new(RefCell::new(handlers)), seen)
    }

    #[test]
    fn closed_router_is_reset_and_silent() {
        let (handlers, seen) = recording();
        let router = Router::new(handlers);
        assert_eq!(router.route(&touch(ContactKind::Begin, 1, 0.0)), 1);
        assert_eq!(router.route(&touch(ContactKind::Begin, 2, 100.0)), 1);
        assert_eq!(router.close(), 2);
        assert!(router.recognizer.borrow().is_idle());
        assert_eq!(router.recognizer.borrow().contact_count(), 0);

        assert_eq!(router.route(&touch(ContactKind::Move, 2, 200.0)), 0);
        assert_eq!(router.route(&touch(ContactKind::Begin, 3, 0.0)), 0);
        assert_eq!(router.route(&touch(ContactKind::End, 1, 0.0)), 0);
        assert_eq!(router.recognizer.borrow().contact_count(), 0);
        assert_eq!(*seen.borrow(), vec![Phase::Start, Phase::Start]);
    }

    #[test]
    fn closing_from_a_handler_stops_the_rest() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handlers: HandlerCell = Rc::new(RefCell::new(GestureHandlers::default()));
        let router = Rc::new(Router::new(handlers.clone()));
        let closer = {
            let router = Rc::downgrade(&router);
            let seen = seen.clone();
            Callback::from(move |s: Snapshot| {
                seen.borrow_mut().push(s.phase);
                if let Some(router) = router.upgrade() {
                    router.close();
                }
            })
        };
        let watcher = {
            let seen = seen.clone();
            Callback::from(move |s: Snapshot| seen.borrow_mut().push(s.phase))
        };
        *handlers.borrow_mut() = GestureHandlers {
            on_start: Some(watcher),
            on_end: Some(closer),
            ..GestureHandlers::default()
        };
        router.route(&touch(ContactKind::Begin, 1, 0.0));
        router.route(&touch(ContactKind::Begin, 2, 100.0));
        // end for 2, then the rebase start for 1, which must not arrive
        assert_eq!(router.route(&touch(ContactKind::End, 2, 100.0)), 1);
        assert_eq!(*seen.borrow(), vec![Phase::Start, Phase::Start, Phase::End]);
        assert!(router.recognizer.borrow().is_idle());
    }

    #[test]
    fn missing_target_detaches_harmlessly() {
        let handlers: HandlerCell = Rc::new(RefCell::new(GestureHandlers::default()));
        let mut detach = attach(None, handlers, GestureOptions::default());
        assert!(!detach.is_attached());
        detach.detach();
        detach.detach();
        assert!(!detach.is_attached());
    }
}
