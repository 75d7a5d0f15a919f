use crate::model::GestureOptions;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub options: GestureOptions,
    pub on_change: Callback<GestureOptions>,
    pub on_reset_view: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_prevent_cb = {
        let cb = props.on_change.clone();
        let opts = props.options;
        Callback::from(move |_| {
            cb.emit(GestureOptions {
                prevent_default: !opts.prevent_default,
                ..opts
            })
        })
    };
    let toggle_capture_cb = {
        let cb = props.on_change.clone();
        let opts = props.options;
        Callback::from(move |_| {
            cb.emit(GestureOptions {
                capture_pointers: !opts.capture_pointers,
                ..opts
            })
        })
    };
    let reset_view_cb = {
        let cb = props.on_reset_view.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.options.prevent_default} onclick={toggle_prevent_cb} />
                    <span>{"Prevent default browser handling"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.options.capture_pointers} onclick={toggle_capture_cb} />
                    <span>{"Capture pointers"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_view_cb} style="flex:1;">{"Reset View"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Changing an option re-binds the canvas listeners and ends any gesture in progress."}</div>
        </div>
    </div>}
}
