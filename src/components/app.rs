use super::{
    event_log::{EventLog, LogAction, SnapshotLog},
    gesture_pad::GesturePad,
    intro_overlay::IntroOverlay,
    settings_modal::SettingsModal,
    snapshot_panel::SnapshotPanel,
};
use crate::model::{GestureOptions, Snapshot};
use crate::util::clog;
use yew::prelude::*;

const OPTIONS_KEY: &str = "tg_gesture_options";
const INTRO_KEY: &str = "tg_intro_seen";

fn load_options() -> GestureOptions {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(OPTIONS_KEY) {
                if let Ok(opts) = serde_json::from_str(&raw) {
                    return opts;
                }
            }
        }
    }
    GestureOptions::default()
}

#[function_component(App)]
pub fn app() -> Html {
    let options = use_state(load_options);
    let log = use_reducer(SnapshotLog::default);
    let open_settings = use_state(|| false);
    let reset_token = use_state(|| 0u32);
    let show_intro = use_state(|| {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                // Show only if key absent
                return store.get_item(INTRO_KEY).ok().flatten().is_none();
            }
        }
        true
    });

    // Persist options
    {
        let opts = *options;
        use_effect_with(opts, move |opts| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(opts) {
                        let _ = store.set_item(OPTIONS_KEY, &s);
                    }
                }
            }
            clog(&format!("options: {:?}", opts));
            || ()
        });
    }

    let on_snapshot = {
        let log = log.clone();
        Callback::from(move |snap: Snapshot| log.dispatch(LogAction::Push(snap)))
    };
    let on_change = {
        let options = options.clone();
        Callback::from(move |opts: GestureOptions| options.set(opts))
    };
    let on_reset_view = {
        let reset_token = reset_token.clone();
        Callback::from(move |_| reset_token.set(reset_token.wrapping_add(1)))
    };
    let on_clear = {
        let log = log.clone();
        Callback::from(move |_| log.dispatch(LogAction::Clear))
    };
    let open_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let hide_intro = {
        let show_intro = show_intro.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item(INTRO_KEY, "1");
                }
            }
            show_intro.set(false);
        })
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <GesturePad options={*options} on_snapshot={on_snapshot} reset_token={*reset_token} />
            <SnapshotPanel latest={log.latest()} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px;">
                <button onclick={open_cb}>{"Settings"}</button>
            </div>
            <EventLog entries={log.entries.clone()} on_clear={on_clear} />
            <SettingsModal
                show={*open_settings}
                on_close={close_cb}
                options={*options}
                on_change={on_change}
                on_reset_view={on_reset_view}
            />
            <IntroOverlay show={*show_intro} hide_intro={hide_intro} />
        </div>
    }
}
