use crate::model::ParamKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ParameterSliderProps {
    pub kind: ParamKind,
    pub value: f64,
    /// Raw slider text; the session decides whether it is a number.
    pub on_change: Callback<(ParamKind, String)>,
}

/// Range input with −/+ step buttons. The buttons clamp to the slider bounds
/// and go through the same change callback as dragging.
#[function_component]
pub fn ParameterSlider(props: &ParameterSliderProps) -> Html {
    let kind = props.kind;
    let range = kind.range();

    let oninput = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((kind, input.value()));
        })
    };
    let step_button = |up: bool| {
        let cb = props.on_change.clone();
        let value = props.value;
        Callback::from(move |_: MouseEvent| {
            cb.emit((kind, kind.nudge(value, up).to_string()));
        })
    };
    let decrease = step_button(false);
    let increase = step_button(true);

    html! {<div style="display:flex; align-items:center; gap:6px;">
        <label style="min-width:150px;">{ kind.label() }</label>
        <button id={format!("{}-decrease", kind.id())} onclick={decrease}>{"−"}</button>
        <input
            type="range"
            id={kind.id()}
            min={range.min.to_string()}
            max={range.max.to_string()}
            step={range.step.to_string()}
            value={props.value.to_string()}
            {oninput}
        />
        <button id={format!("{}-increase", kind.id())} onclick={increase}>{"+"}</button>
        <span style="min-width:56px; text-align:right; font-variant-numeric:tabular-nums;">{ kind.format(props.value) }</span>
    </div>}
}
