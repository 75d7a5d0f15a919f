use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::hooks::use_gesture;
use crate::model::{GestureOptions, Point, Snapshot};
use crate::recognizer::GestureHandlers;
use crate::state::ViewState;

const CARD_W: f64 = 240.0;
const CARD_H: f64 = 150.0;

#[derive(Properties, PartialEq, Clone)]
pub struct GesturePadProps {
    pub options: GestureOptions,
    pub on_snapshot: Callback<Snapshot>,
    /// Bumped by the parent to re-center the card.
    pub reset_token: u32,
}

#[function_component(GesturePad)]
pub fn gesture_pad(props: &GesturePadProps) -> Html {
    let canvas_ref = use_node_ref();
    let view = use_mut_ref(ViewState::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Mount: sizing, resize listener, draw closure
    {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let resize_cb = match (window.clone(), canvas) {
                (Some(window), Some(canvas)) => {
                    let fit = {
                        let canvas = canvas.clone();
                        let window = window.clone();
                        move || {
                            let width = window
                                .inner_width()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(800.0);
                            let height = window
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(600.0);
                            canvas.set_width(width.max(0.0) as u32);
                            canvas.set_height(height.max(0.0) as u32);
                        }
                    };
                    fit();
                    view.borrow_mut().reset(Point::new(
                        canvas.width() as f64 * 0.5,
                        canvas.height() as f64 * 0.5,
                    ));
                    let draw: Rc<dyn Fn()> = {
                        let canvas = canvas.clone();
                        let view = view.clone();
                        Rc::new(move || draw_scene(&canvas, &view.borrow()))
                    };
                    draw();
                    *draw_ref.borrow_mut() = Some(draw.clone());
                    let cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                        fit();
                        draw();
                    }) as Box<dyn FnMut(_)>);
                    window
                        .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
                        .ok();
                    Some(cb)
                }
                _ => None,
            };
            move || {
                if let (Some(window), Some(cb)) = (window, resize_cb) {
                    let _ = window
                        .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
                }
                *draw_ref.borrow_mut() = None;
            }
        });
    }

    // Re-center on request
    {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(props.reset_token, move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                view.borrow_mut().reset(Point::new(
                    canvas.width() as f64 * 0.5,
                    canvas.height() as f64 * 0.5,
                ));
            }
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    // Fresh closures every render; the hook swaps them in without re-attaching.
    let apply = {
        let view = view.clone();
        let draw_ref = draw_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let forward = props.on_snapshot.clone();
        Callback::from(move |snap: Snapshot| {
            let local = to_canvas(&canvas_ref, snap);
            view.borrow_mut().apply(&local);
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            forward.emit(snap);
        })
    };
    let handlers = GestureHandlers {
        on_start: Some(apply.clone()),
        on_move: Some(apply.clone()),
        on_end: Some(apply.clone()),
        on_cancel: Some(apply),
    };
    use_gesture(canvas_ref.clone(), handlers, props.options);

    html! {
        <canvas ref={canvas_ref} id="gesture-canvas" style="display:block; width:100%; height:100%;"></canvas>
    }
}

/// Snapshots arrive in client coordinates; the center marker is drawn in canvas space.
fn to_canvas(canvas_ref: &NodeRef, mut snap: Snapshot) -> Snapshot {
    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
        let rect = canvas.get_bounding_client_rect();
        snap.center = snap.center - Point::new(rect.left(), rect.top());
    }
    snap
}

fn draw_scene(canvas: &HtmlCanvasElement, view: &ViewState) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, w, h);

    let [a, b, c, d, e, f] = view.current.matrix();
    ctx.set_transform(a, b, c, d, e, f).ok();
    ctx.set_fill_style_str("#161b22");
    ctx.fill_rect(-CARD_W * 0.5, -CARD_H * 0.5, CARD_W, CARD_H);
    ctx.set_stroke_style_str("#58a6ff");
    ctx.set_line_width(2.0 / view.current.zoom);
    ctx.stroke_rect(-CARD_W * 0.5, -CARD_H * 0.5, CARD_W, CARD_H);
    ctx.set_fill_style_str("#2ea043");
    ctx.fill_rect(-CARD_W * 0.5, -CARD_H * 0.5, CARD_W, 18.0);

    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    if let Some(center) = view.center {
        ctx.begin_path();
        ctx.set_fill_style_str("rgba(240,136,62,0.8)");
        let _ = ctx.arc(center.x, center.y, 10.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

