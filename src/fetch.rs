use acqmap_core::sources::{parse_feature_collection, parse_topology};
use acqmap_core::{Choice, DataSources, GlobeScene, Signal, TimeWindow};
use anyhow::bail;
use gloo_net::http::Request;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        bail!("GET {} returned {}", url, resp.status());
    }
    Ok(resp.text().await?)
}

/// Fetch the boundary dataset once. A failure leaves the land layer empty.
pub fn load_world(url: String, scene: Rc<RefCell<GlobeScene>>) {
    spawn_local(async move {
        let world = match fetch_text(&url).await {
            Ok(body) => parse_topology(&body).map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };
        match world {
            Ok(w) => {
                log::info!("[fetch] world loaded from {}", url);
                scene.borrow_mut().set_world(w);
            }
            Err(e) => log::error!("[fetch] world {}: {:#}", url, e),
        }
    });
}

/// Fetch the features for the selected time window now and again whenever
/// the selection changes. Responses for a window that is no longer selected
/// are dropped.
pub fn load_quakes(
    sources: Rc<DataSources>,
    window: Signal<TimeWindow>,
    scene: Rc<RefCell<GlobeScene>>,
) {
    request_quakes(&sources, &window, &scene, window.get());
    let w = window.clone();
    window.subscribe(move |selected| request_quakes(&sources, &w, &scene, *selected));
}

fn request_quakes(
    sources: &Rc<DataSources>,
    window: &Signal<TimeWindow>,
    scene: &Rc<RefCell<GlobeScene>>,
    requested: TimeWindow,
) {
    let url = sources.url(requested).to_string();
    let window = window.clone();
    let scene = scene.clone();
    spawn_local(async move {
        let quakes = match fetch_text(&url).await {
            Ok(body) => parse_feature_collection(&body).map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };
        match quakes {
            Ok(fc) => {
                let count = fc.len();
                if scene.borrow_mut().accept_quakes(requested, window.get(), fc) {
                    log::info!("[fetch] {} features for {}", count, requested.label());
                } else {
                    log::info!("[fetch] dropping stale {} response", requested.label());
                }
            }
            Err(e) => log::error!("[fetch] {} {}: {:#}", requested.label(), url, e),
        }
    });
}
