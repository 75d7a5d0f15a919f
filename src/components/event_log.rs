use crate::model::{Phase, Snapshot};
use std::rc::Rc;
use yew::prelude::*;
use yew::Reducible;

/// How many snapshots the log keeps.
pub const LOG_CAPACITY: usize = 12;

#[derive(Properties, PartialEq, Clone)]
pub struct LogRowProps {
    pub snapshot: Snapshot,
}

#[function_component(LogRow)]
pub fn log_row(props: &LogRowProps) -> Html {
    let color = match props.snapshot.phase {
        Phase::Start => "#2ea043",
        Phase::Move => "#58a6ff",
        Phase::End => "#f0883e",
        Phase::Cancel => "#f85149",
    };
    let json = serde_json::to_string(&props.snapshot).unwrap_or_default();
    html! { <div style="display:flex; align-items:flex-start; gap:8px; margin:3px 0;"> <span style={format!("display:inline-block; width:10px; height:10px; margin-top:3px; background:{}; border:1px solid #30363d; border-radius:2px; flex-shrink:0;", color)}></span> <span style="word-break:break-all;">{ json }</span> </div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventLogProps {
    /// Newest first.
    pub entries: Vec<Snapshot>,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn EventLog(props: &EventLogProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; width:380px; max-height:45vh; overflow-y:auto; font-family:monospace; font-size:10px;">
        <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:4px; font-family:sans-serif; font-size:13px;">
            <span style="font-weight:600;">{"Snapshots"}</span>
            <button onclick={clear_cb} style="padding:2px 8px; font-size:11px;">{"Clear"}</button>
        </div>
        { if props.entries.is_empty() { html!{<div style="color:#8b949e;">{"No gestures yet"}</div>} } else { html!{} } }
        { for props.entries.iter().map(|s| html!{ <LogRow snapshot={*s} /> }) }
    </div>}
}

/// Recent snapshots, newest first. A reducer so that several snapshots
/// emitted by one notification all land, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotLog {
    pub entries: Vec<Snapshot>,
}

pub enum LogAction {
    Push(Snapshot),
    Clear,
}

impl SnapshotLog {
    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.first().copied()
    }
}

impl Reducible for SnapshotLog {
    type Action = LogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LogAction::Push(snap) => Rc::new(SnapshotLog {
                entries: std::iter::once(snap)
                    .chain(self.entries.iter().copied())
                    .take(LOG_CAPACITY)
                    .collect(),
            }),
            LogAction::Clear => Rc::new(SnapshotLog::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn snap(t: f64) -> Snapshot {
        Snapshot {
            phase: Phase::Move,
            pointer_count: 1,
            center: Point::ORIGIN,
            delta: Point::ORIGIN,
            translation: Point::ORIGIN,
            distance: None,
            scale: 1.0,
            rotation: 0.0,
            timestamp: t,
        }
    }

    #[test]
    fn log_keeps_newest_first_and_caps() {
        let mut log = Rc::new(SnapshotLog::default());
        for t in 0..20 {
            log = log.reduce(LogAction::Push(snap(t as f64)));
        }
        assert_eq!(log.entries.len(), LOG_CAPACITY);
        assert_eq!(log.latest().map(|s| s.timestamp), Some(19.0));
        assert_eq!(log.entries[LOG_CAPACITY - 1].timestamp, 8.0);
    }

    #[test]
    fn clear_empties_log() {
        let log = Rc::new(SnapshotLog::default())
            .reduce(LogAction::Push(snap(1.0)))
            .reduce(LogAction::Clear);
        assert!(log.entries.is_empty());
        assert_eq!(log.latest(), None);
    }
}
