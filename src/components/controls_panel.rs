use crate::model::AnimationState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub state: AnimationState,
    pub on_fire: Callback<()>,
    pub on_pause: Callback<()>,
    pub on_resume: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let fire_cb = {
        let cb = props.on_fire.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pause_cb = {
        let cb = props.on_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let resume_cb = {
        let cb = props.on_resume.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let in_flight = matches!(props.state, AnimationState::Running | AnimationState::Paused);
    html! {<div style="display:flex; gap:8px; align-items:center;">
        <button id="fire-button" onclick={fire_cb} disabled={in_flight}>{"Fire"}</button>
        <button id="pause-button" onclick={pause_cb} disabled={props.state != AnimationState::Running}>{"Pause"}</button>
        <button id="play-button" onclick={resume_cb} disabled={props.state != AnimationState::Paused}>{"Resume"}</button>
        <button id="reset-button" onclick={reset_cb}>{"Reset"}</button>
    </div>}
}
