use crate::model::{AnimationState, ParamKind, SimulationParameters};
use crate::util::{format_meters, format_optional_meters, format_seconds};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReadoutPanelProps {
    pub params: SimulationParameters,
    pub state: AnimationState,
    pub elapsed: f64,
    pub landing_distance: Option<f64>,
    pub peak_height: Option<f64>,
    pub predicted_range: Option<f64>,
}

#[function_component]
pub fn ReadoutPanel(props: &ReadoutPanelProps) -> Html {
    let row_style = "display:flex; justify-content:space-between; gap:12px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    let state_label = match props.state {
        AnimationState::Idle => "Ready",
        AnimationState::Running => "In flight",
        AnimationState::Paused => "Paused",
        AnimationState::Landed => "Landed",
    };
    let p = &props.params;
    html! {
        <div style="display:flex; flex-direction:column; gap:4px; min-width:240px; font-size:14px;">
            <div style={row_style}>
                <span>{"Speed (m/s)"}</span>
                <span id="speed-value" style={value_style}>{ ParamKind::InitialVelocity.format(p.initial_velocity) }</span>
            </div>
            <div style={row_style}>
                <span>{"Angle (°)"}</span>
                <span id="angle-value" style={value_style}>{ ParamKind::Angle.format(p.angle_deg) }</span>
            </div>
            <div style={row_style}>
                <span>{"Mass (kg)"}</span>
                <span id="mass-value" style={value_style}>{ ParamKind::Mass.format(p.mass) }</span>
            </div>
            <div style={row_style}>
                <span style="opacity:0.7;">{"Drag coeff. (not simulated)"}</span>
                <span style={format!("{} opacity:0.7;", value_style)}>{ format!("{:.2}", p.drag_coefficient) }</span>
            </div>
            <div style={row_style}>
                <span>{"Target (m)"}</span>
                <span style={value_style}>{ format_meters(p.target_distance) }</span>
            </div>
            <div style={row_style}>
                <span>{"Status"}</span>
                <span style={value_style}>{ format!("{} · {}", state_label, format_seconds(props.elapsed)) }</span>
            </div>
            <div style={row_style}>
                <span>{"Peak height (m)"}</span>
                <span style={value_style}>{ format_optional_meters(props.peak_height) }</span>
            </div>
            <div style={row_style}>
                <span>{"Predicted range (m)"}</span>
                <span style={value_style}>{ format_optional_meters(props.predicted_range) }</span>
            </div>
            <div style={row_style}>
                <span style="color:#b62324;">{"Distance (m)"}</span>
                <span id="distance-value" style={format!("{} color:#b62324;", value_style)}>{ format_optional_meters(props.landing_distance) }</span>
            </div>
        </div>
    }
}
