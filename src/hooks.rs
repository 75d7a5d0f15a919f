use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::attach::attach;
use crate::model::GestureOptions;
use crate::recognizer::GestureHandlers;
use crate::util::clog;

/// Recognizes gestures on the element behind `target` for as long as the
/// component is mounted.
///
/// The handlers passed on each render replace the previous ones in place; only
/// a different `target` or different `options` tears down and re-attaches the
/// listeners.
#[hook]
pub fn use_gesture(target: NodeRef, handlers: GestureHandlers, options: GestureOptions) {
    let latest: Rc<RefCell<GestureHandlers>> = use_mut_ref(GestureHandlers::default);
    *latest.borrow_mut() = handlers;

    use_effect_with((target, options), move |(target, options)| {
        let element = target.cast::<HtmlElement>();
        if element.is_none() {
            clog("gesture: target not mounted, nothing to attach");
        }
        let mut detach = attach(element.as_ref(), latest, *options);
        move || detach.detach()
    });
}
