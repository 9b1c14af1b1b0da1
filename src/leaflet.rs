//! The Leaflet acquisitions page: basemap, feature overlay with tooltips.
//!
//! Leaflet itself stays in JavaScript; this module binds the handful of
//! `L.*` calls the page needs.

use crate::constants::{MAP_CENTER, MAP_ZOOM, TILE_ATTRIBUTION, TILE_URL};
use crate::dom::js_err;
use acqmap_core::tooltip_html;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn leaflet_map(el: &web::HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: u32) -> LeafletMap;

    type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON, catch)]
    fn geo_json(data: &JsValue, options: &Object) -> Result<Layer, JsValue>;

    #[wasm_bindgen(js_namespace = L)]
    fn marker(latlng: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &Layer, content: &str) -> Layer;
}

pub fn mount(map_el: &web::HtmlElement, features: &JsValue) -> anyhow::Result<()> {
    let map = leaflet_map(map_el).map_err(js_err)?;
    let center = Array::of2(&MAP_CENTER[0].into(), &MAP_CENTER[1].into());
    map.set_view(&center, MAP_ZOOM);

    let tile_options = Object::new();
    set(&tile_options, "attribution", &TILE_ATTRIBUTION.into())?;
    tile_layer(TILE_URL, &tile_options).add_to(&map);

    let style = Closure::wrap(Box::new(feature_style) as Box<dyn FnMut(JsValue) -> JsValue>);
    let on_each =
        Closure::wrap(Box::new(bind_feature_tooltip) as Box<dyn FnMut(JsValue, JsValue)>);
    let point_to_layer = Closure::wrap(Box::new(|_feature: JsValue, latlng: JsValue| -> JsValue {
        marker(&latlng).into()
    }) as Box<dyn FnMut(JsValue, JsValue) -> JsValue>);

    let options = Object::new();
    set(&options, "style", style.as_ref())?;
    set(&options, "onEachFeature", on_each.as_ref())?;
    set(&options, "pointToLayer", point_to_layer.as_ref())?;
    // Leaflet keeps calling these for as long as the layer lives
    style.forget();
    on_each.forget();
    point_to_layer.forget();

    let layer = geo_json(&Array::of1(features), &options).map_err(js_err)?;
    layer.add_to(&map);
    log::info!("[map] overlay added");
    Ok(())
}

fn set(target: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(target, &key.into(), value).map_err(js_err)?;
    Ok(())
}

/// `feature.properties.style`, or `undefined`.
fn feature_style(feature: JsValue) -> JsValue {
    Reflect::get(&feature, &"properties".into())
        .ok()
        .filter(|p| p.is_object())
        .and_then(|p| Reflect::get(&p, &"style".into()).ok())
        .unwrap_or(JsValue::UNDEFINED)
}

fn bind_feature_tooltip(feature: JsValue, layer: JsValue) {
    let html = match feature_from_js(&feature) {
        Ok(f) => tooltip_html(&f),
        Err(e) => {
            log::warn!("[map] unreadable feature: {:#}", e);
            String::new()
        }
    };
    layer.unchecked_into::<Layer>().bind_tooltip(&html);
}

fn feature_from_js(feature: &JsValue) -> anyhow::Result<serde_json::Value> {
    let json: String = js_sys::JSON::stringify(feature)
        .map_err(js_err)?
        .into();
    Ok(serde_json::from_str(&json)?)
}
