use std::rc::Rc;

use cannon_sim::components::{App, AppProps};
use cannon_sim::config::SimConfig;
use cannon_sim::util::init_logging;
use log::LevelFilter;

fn main() {
    init_logging(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    let config = Rc::new(SimConfig::load_from_document());
    log::info!(
        "starting: {}x{} canvas, dt={}s",
        config.canvas_width,
        config.canvas_height,
        config.time_step
    );
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
