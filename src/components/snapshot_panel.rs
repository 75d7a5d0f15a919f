use crate::model::Snapshot;
use crate::util::{format_degrees, format_ms, format_point};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SnapshotPanelProps {
    pub latest: Option<Snapshot>,
}

#[function_component]
pub fn SnapshotPanel(props: &SnapshotPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500; color:#8b949e;";
    let value_style =
        "min-width:110px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let Some(s) = props.latest else {
        return html! {
            <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; font-size:14px; opacity:0.7;">
                {"Touch, drag or pinch the canvas"}
            </div>
        };
    };
    let rows: Vec<(&str, String)> = vec![
        ("Phase", s.phase.as_str().to_string()),
        ("Contacts", s.pointer_count.to_string()),
        ("Center", format_point(s.center)),
        ("Delta", format_point(s.delta)),
        ("Translation", format_point(s.translation)),
        (
            "Distance",
            s.distance.map(|d| format!("{:.1}", d)).unwrap_or_else(|| "–".into()),
        ),
        ("Scale", format!("{:.3}", s.scale)),
        ("Rotation", format_degrees(s.rotation)),
        ("Time", format_ms(s.timestamp)),
    ];
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:6px; font-size:14px;">
            { for rows.into_iter().map(|(label, value)| html! {
                <div style={row_style}>
                    <span style={label_style}>{ label }</span>
                    <span style={value_style}>{ value }</span>
                </div>
            }) }
        </div>
    }
}
