// Host-side tests for the parameter panel controls and their signals.

use acqmap_core::panel::{Choice, RangeControl};
use acqmap_core::{LandDetail, MarkerStyle, ParameterPanel, Rgb, TimeWindow};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn defaults_match_the_published_panel() {
    let p = ParameterPanel::default().snapshot();
    assert_eq!(p.time_window, TimeWindow::PastWeek);
    assert_eq!(p.marker_style, MarkerStyle::Projected);
    assert_eq!(p.land_detail, LandDetail::Countries);
    assert_eq!(p.line_width, 0.35);
    assert_eq!(p.marker_size, 10.0);
    assert_eq!(p.padding, 10.0);
    assert_eq!(p.spin_speed, 0.4);
    assert_eq!(p.ocean_color.to_hex(), "#74fbfd");
    assert_eq!(p.land_color.to_hex(), "#fefafa");
    assert_eq!(p.marker_color.to_hex(), "#f11707");
    assert_eq!(p.marker_opacity, 0.25);
}

#[test]
fn declared_bounds() {
    let panel = ParameterPanel::default();
    let bounds: Vec<(&str, f64, f64)> = panel
        .ranges()
        .iter()
        .map(|r| (r.label, r.min, r.max))
        .collect();
    assert_eq!(
        bounds,
        vec![
            ("line width", 0.01, 5.0),
            ("marker size", 1.0, 20.0),
            ("padding", 0.0, 100.0),
            ("spin speed", 0.0, 3.0),
            ("marker opacity", 0.0, 1.0),
        ]
    );
}

#[test]
fn sliders_emit_boundary_values_exactly() {
    let panel = ParameterPanel::default();
    for r in panel.ranges() {
        assert_eq!(r.set(r.min), r.min);
        assert_eq!(r.get(), r.min);
        assert_eq!(r.set(r.max), r.max);
        assert_eq!(r.get(), r.max);
    }
}

#[test]
fn out_of_range_input_is_clamped_and_nan_ignored() {
    let panel = ParameterPanel::default();
    for r in panel.ranges() {
        assert_eq!(r.set(r.max + 1000.0), r.max);
        assert_eq!(r.set(r.min - 1000.0), r.min);
        let before = r.get();
        assert_eq!(r.set(f64::NAN), before);
        assert_eq!(r.set(f64::INFINITY), before);
        assert!(r.get() >= r.min && r.get() <= r.max);
    }
}

#[test]
fn initial_value_outside_range_is_clamped() {
    let r = RangeControl::new("x", 0.0, 1.0, 7.0);
    assert_eq!(r.get(), 1.0);
}

#[test]
fn choices_accept_only_their_labels() {
    let panel = ParameterPanel::default();
    assert_eq!(panel.time_window.set_label("past-day").unwrap(), TimeWindow::PastDay);
    assert_eq!(panel.time_window.get(), TimeWindow::PastDay);
    assert!(panel.time_window.set_label("past-year").is_err());
    assert_eq!(panel.time_window.get(), TimeWindow::PastDay);

    assert_eq!(
        panel.marker_style.set_label("unprojected").unwrap(),
        MarkerStyle::Unprojected
    );
    assert!(panel.land_detail.set_label("oceans").is_err());
    assert_eq!(panel.land_detail.get(), LandDetail::Countries);
}

#[test]
fn choice_labels_round_trip() {
    for w in TimeWindow::ALL {
        assert_eq!(TimeWindow::from_label(w.label()), Some(*w));
    }
    let labels: Vec<&str> = TimeWindow::ALL.iter().map(|w| w.label()).collect();
    assert_eq!(labels, vec!["past-day", "past-week", "past-month"]);
    assert_eq!(LandDetail::Land.object_name(), "land");
    assert_eq!(LandDetail::Countries.object_name(), "countries");
}

#[test]
fn colors_only_take_valid_hex() {
    let panel = ParameterPanel::default();
    assert_eq!(panel.ocean_color.set_hex("#000").unwrap(), Rgb::new(0, 0, 0));
    assert!(panel.ocean_color.set_hex("blue").is_err());
    assert_eq!(panel.ocean_color.get(), Rgb::new(0, 0, 0));
}

#[test]
fn subscribers_see_latest_value_only() {
    let panel = ParameterPanel::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    panel
        .spin_speed
        .signal()
        .subscribe(move |v| sink.borrow_mut().push(*v));
    panel.spin_speed.set(1.0);
    panel.spin_speed.set(9.0);
    assert_eq!(*seen.borrow(), vec![1.0, 3.0]);
    assert_eq!(panel.snapshot().spin_speed, 3.0);
}

#[test]
fn cloned_controls_share_state() {
    let panel = ParameterPanel::default();
    let widget = panel.padding.clone();
    widget.set(42.0);
    assert_eq!(panel.snapshot().padding, 42.0);
}
