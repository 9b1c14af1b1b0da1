//! DOM widgets for the parameter panel.
//!
//! Each widget writes into its control; the control does the clamping, so
//! the widget only reports what the user did.

use crate::constants::{CONTROL_ROW_CLASS, RANGE_STEP};
use crate::dom::{self, js_err};
use acqmap_core::panel::{Choice, ChoiceControl, ColorControl, RangeControl};
use acqmap_core::ParameterPanel;
use web_sys as web;

pub fn build_panel(
    document: &web::Document,
    container: &web::HtmlElement,
    panel: &ParameterPanel,
) -> anyhow::Result<()> {
    add_choice(document, container, panel.time_window.clone())?;
    add_choice(document, container, panel.marker_style.clone())?;
    add_choice(document, container, panel.land_detail.clone())?;
    add_range(document, container, panel.line_width.clone())?;
    add_range(document, container, panel.marker_size.clone())?;
    add_range(document, container, panel.padding.clone())?;
    add_range(document, container, panel.spin_speed.clone())?;
    add_color(document, container, panel.ocean_color.clone())?;
    add_color(document, container, panel.land_color.clone())?;
    add_color(document, container, panel.marker_color.clone())?;
    add_range(document, container, panel.marker_opacity.clone())?;
    Ok(())
}

fn add_row(
    document: &web::Document,
    container: &web::HtmlElement,
    label: &str,
    input: &web::HtmlElement,
    readout: Option<&web::HtmlElement>,
) -> anyhow::Result<()> {
    let row: web::HtmlElement = dom::create(document, "div")?;
    row.set_class_name(CONTROL_ROW_CLASS);
    let text: web::HtmlLabelElement = dom::create(document, "label")?;
    text.set_text_content(Some(label));
    row.append_child(&text).map_err(js_err)?;
    row.append_child(input).map_err(js_err)?;
    if let Some(r) = readout {
        row.append_child(r).map_err(js_err)?;
    }
    container.append_child(&row).map_err(js_err)?;
    Ok(())
}

fn add_choice<T: Choice>(
    document: &web::Document,
    container: &web::HtmlElement,
    control: ChoiceControl<T>,
) -> anyhow::Result<()> {
    let select: web::HtmlSelectElement = dom::create(document, "select")?;
    let current = control.get();
    for choice in T::ALL {
        let option = web::HtmlOptionElement::new_with_text_and_value(choice.label(), choice.label())
            .map_err(js_err)?;
        option.set_selected(*choice == current);
        select.append_child(&option).map_err(js_err)?;
    }
    let sel = select.clone();
    dom::add_listener(&select, "input", move || {
        if let Err(e) = control.set_label(&sel.value()) {
            log::warn!("[controls] {}", e);
        }
    });
    add_row(document, container, T::CONTROL, &select, None)
}

fn add_range(
    document: &web::Document,
    container: &web::HtmlElement,
    control: RangeControl,
) -> anyhow::Result<()> {
    let input: web::HtmlInputElement = dom::create(document, "input")?;
    input.set_type("range");
    input.set_min(&control.min.to_string());
    input.set_max(&control.max.to_string());
    input.set_step(RANGE_STEP);
    input.set_value(&control.get().to_string());

    let readout: web::HtmlElement = dom::create(document, "output")?;
    readout.set_text_content(Some(&format_value(control.get())));

    let inp = input.clone();
    let out = readout.clone();
    let label = control.label;
    dom::add_listener(&input, "input", move || {
        let stored = control.set(inp.value_as_number());
        out.set_text_content(Some(&format_value(stored)));
    });
    add_row(document, container, label, &input, Some(&readout))
}

fn add_color(
    document: &web::Document,
    container: &web::HtmlElement,
    control: ColorControl,
) -> anyhow::Result<()> {
    let input: web::HtmlInputElement = dom::create(document, "input")?;
    input.set_type("color");
    input.set_value(&control.get().to_hex());
    let inp = input.clone();
    let label = control.label;
    dom::add_listener(&input, "input", move || {
        if let Err(e) = control.set_hex(&inp.value()) {
            log::warn!("[controls] {}", e);
        }
    });
    add_row(document, container, label, &input, None)
}

#[inline]
fn format_value(v: f64) -> String {
    format!("{:.2}", v)
}
