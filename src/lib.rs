#![cfg(target_arch = "wasm32")]
use acqmap_core::{Caption, DataSources, GlobeRenderer, GlobeScene, ParameterPanel};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod caption;
mod constants;
mod controls;
mod dom;
mod fetch;
mod frame;
mod leaflet;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("acqmap-web starting");
    Ok(())
}

/// Returned to the page by [`mount_globe`]; stopping it ends the frame loop.
#[wasm_bindgen]
pub struct GlobeHandle {
    running: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl GlobeHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.get()
    }
}

/// Mount the rotating globe on `canvas`, with its controls appended to
/// `controls`. `sources` optionally overrides the data URLs (JSON object
/// with `past-day`, `past-week`, `past-month`, `world`).
#[wasm_bindgen]
pub fn mount_globe(
    canvas: web::HtmlCanvasElement,
    controls: web::HtmlElement,
    sources: Option<String>,
) -> Result<GlobeHandle, JsValue> {
    init_globe(canvas, controls, sources).map_err(|e| {
        log::error!("globe init error: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn init_globe(
    canvas: web::HtmlCanvasElement,
    controls: web::HtmlElement,
    sources: Option<String>,
) -> anyhow::Result<GlobeHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let sources = Rc::new(match sources {
        Some(json) => DataSources::from_json(&json)?,
        None => DataSources::default(),
    });

    let panel = Rc::new(ParameterPanel::default());
    controls::build_panel(&document, &controls, &panel)?;

    let scene = Rc::new(RefCell::new(GlobeScene::new()));
    fetch::load_world(sources.world.clone(), scene.clone());
    fetch::load_quakes(
        sources.clone(),
        panel.time_window.signal().clone(),
        scene.clone(),
    );

    let surface = canvas::CanvasSurface::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        surface,
        panel,
        scene,
        renderer: GlobeRenderer::new(),
        size: None,
    }));
    let running = Rc::new(Cell::new(true));
    frame::start_loop(frame_ctx, running.clone());
    log::info!("[globe] mounted");
    Ok(GlobeHandle { running })
}

/// Mount the Leaflet page: pick the caption from the `l` query parameter,
/// then draw `features` over an OpenStreetMap basemap in `map`.
#[wasm_bindgen]
pub fn mount_acquisitions_map(
    map: web::HtmlElement,
    en_para: web::HtmlElement,
    fr_para: web::HtmlElement,
    features: JsValue,
) -> Result<(), JsValue> {
    let language = dom::query_param(constants::LANGUAGE_PARAM);
    let chosen = Caption::for_language(language.as_deref());
    caption::apply(&en_para, &fr_para, chosen);
    log::info!("[map] caption {:?}", chosen);

    leaflet::mount(&map, &features).map_err(|e| {
        log::error!("map init error: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}
