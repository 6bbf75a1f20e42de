use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::{
    controls_panel::ControlsPanel, parameter_slider::ParameterSlider, readout_panel::ReadoutPanel,
};
use crate::config::SimConfig;
use crate::model::{ParamKind, SimSession, kinematics};
use crate::render::{Scene, SceneStyle, render_scene};
use crate::state::{FrameLoop, LabelCadence};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<SimConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let canvas_ref = use_node_ref();
    let session = {
        let config = config.clone();
        use_mut_ref(move || SimSession::new(&config))
    };
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);
    let refresh = use_force_update();

    // Canvas setup, first paint and the frame loop. Torn down on unmount.
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let frame_loop = frame_loop.clone();
        let refresh = refresh.clone();
        let style = SceneStyle::from_config(&config);
        let (width, height) = config.canvas_size_px();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            canvas.set_width(width);
            canvas.set_height(height);

            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
            match ctx {
                Some(ctx) => {
                    let session = session.clone();
                    let draw: Rc<dyn Fn()> = Rc::new(move || {
                        let mut surface = ctx.clone();
                        let s = session.borrow();
                        render_scene(&mut surface, &Scene::from_session(&s, style));
                    });
                    *draw_ref.borrow_mut() = Some(draw.clone());
                    draw();
                }
                None => log::error!("canvas has no 2d context; nothing will be drawn"),
            }

            let on_frame = {
                let session = session.clone();
                let draw_ref = draw_ref.clone();
                let mut cadence = LabelCadence::default();
                move || {
                    let (outcome, elapsed) = {
                        let mut s = session.borrow_mut();
                        let outcome = s.tick();
                        (outcome, s.elapsed())
                    };
                    if let Some(draw) = &*draw_ref.borrow() {
                        draw();
                    }
                    if cadence.due(elapsed, outcome) {
                        refresh.force_update();
                    }
                    outcome
                }
            };
            *frame_loop.borrow_mut() = Some(FrameLoop::new(window, on_frame));
            log::debug!("canvas {}x{} ready", width, height);

            move || {
                frame_loop.borrow_mut().take();
                draw_ref.borrow_mut().take();
            }
        });
    }

    let redraw = {
        let draw_ref = draw_ref.clone();
        move || {
            if let Some(draw) = &*draw_ref.borrow() {
                draw();
            }
        }
    };

    let on_param = {
        let session = session.clone();
        let refresh = refresh.clone();
        let redraw = redraw.clone();
        Callback::from(move |(kind, raw): (ParamKind, String)| {
            let result = session.borrow_mut().set_parameter(kind, &raw);
            match result {
                Ok(value) => log::debug!("{:?} = {}", kind, value),
                Err(e) => log::warn!("ignored slider input: {}", e),
            }
            redraw();
            // re-render even on error so the slider snaps back to the kept value
            refresh.force_update();
        })
    };
    let on_fire = {
        let session = session.clone();
        let frame_loop = frame_loop.clone();
        let refresh = refresh.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            let fired = session.borrow_mut().fire();
            if fired {
                redraw();
                if let Some(fl) = &*frame_loop.borrow() {
                    fl.start();
                }
            }
            refresh.force_update();
        })
    };
    let on_pause = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            if session.borrow_mut().pause() {
                refresh.force_update();
            }
        })
    };
    let on_resume = {
        let session = session.clone();
        let frame_loop = frame_loop.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let resumed = session.borrow_mut().resume();
            if resumed {
                if let Some(fl) = &*frame_loop.borrow() {
                    fl.start();
                }
                refresh.force_update();
            }
        })
    };
    let on_reset = {
        let session = session.clone();
        let frame_loop = frame_loop.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            if let Some(fl) = &*frame_loop.borrow() {
                fl.cancel();
            }
            session.borrow_mut().reset();
            redraw();
            refresh.force_update();
        })
    };

    let (params, state, elapsed, landing, peak) = {
        let s = session.borrow();
        (*s.params(), s.state(), s.elapsed(), s.landing(), s.peak_height())
    };
    let sliders: Html = ParamKind::ALL
        .iter()
        .map(|&kind| {
            html! { <ParameterSlider key={kind.id()} {kind} value={params.get(kind)} on_change={on_param.clone()} /> }
        })
        .collect();

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:12px; padding:12px; font-family:sans-serif;">
            <canvas
                ref={canvas_ref}
                id="simulation-canvas"
                width={config.canvas_width.to_string()}
                height={config.canvas_height.to_string()}
                style="border:1px solid #30363d; max-width:100%;"
            />
            <div style="display:flex; gap:24px; flex-wrap:wrap; align-items:flex-start;">
                <div style="display:flex; flex-direction:column; gap:6px;">
                    { sliders }
                    <ControlsPanel
                        state={state}
                        {on_fire}
                        {on_pause}
                        {on_resume}
                        {on_reset}
                    />
                </div>
                <ReadoutPanel
                    {params}
                    state={state}
                    {elapsed}
                    landing_distance={landing.map(|l| l.horizontal_distance_m)}
                    peak_height={peak}
                    predicted_range={kinematics::predicted_range(&params)}
                />
            </div>
        </div>
    }
}
