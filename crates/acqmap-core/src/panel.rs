//! The user-adjustable parameters of the globe.
//!
//! Every control wraps a [`Signal`] and refuses values outside its declared
//! bounds, so anything read from the panel is always in range.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::signal::Signal;

/// A closed set of labelled options.
pub trait Choice: Copy + PartialEq + 'static {
    const CONTROL: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    PastDay,
    #[default]
    PastWeek,
    PastMonth,
}

impl Choice for TimeWindow {
    const CONTROL: &'static str = "time window";
    const ALL: &'static [Self] = &[Self::PastDay, Self::PastWeek, Self::PastMonth];

    fn label(self) -> &'static str {
        match self {
            Self::PastDay => "past-day",
            Self::PastWeek => "past-week",
            Self::PastMonth => "past-month",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// Geodesic circles on the sphere's surface.
    #[default]
    Projected,
    /// Flat circles at the projected screen position.
    Unprojected,
}

impl Choice for MarkerStyle {
    const CONTROL: &'static str = "marker style";
    const ALL: &'static [Self] = &[Self::Projected, Self::Unprojected];

    fn label(self) -> &'static str {
        match self {
            Self::Projected => "projected",
            Self::Unprojected => "unprojected",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LandDetail {
    #[default]
    Countries,
    Land,
}

impl LandDetail {
    /// Name of the boundary topology object drawn for this choice.
    pub fn object_name(self) -> &'static str {
        self.label()
    }
}

impl Choice for LandDetail {
    const CONTROL: &'static str = "land detail";
    const ALL: &'static [Self] = &[Self::Countries, Self::Land];

    fn label(self) -> &'static str {
        match self {
            Self::Countries => "countries",
            Self::Land => "land",
        }
    }
}

#[derive(Clone)]
pub struct ChoiceControl<T: Choice> {
    signal: Signal<T>,
}

impl<T: Choice> ChoiceControl<T> {
    pub fn new(initial: T) -> Self {
        Self {
            signal: Signal::new(initial),
        }
    }

    pub fn get(&self) -> T {
        self.signal.get()
    }

    pub fn set(&self, value: T) {
        self.signal.set(value);
    }

    /// Select by label; unknown labels leave the current value untouched.
    pub fn set_label(&self, label: &str) -> Result<T> {
        let value = T::from_label(label).ok_or_else(|| Error::UnknownChoice {
            control: T::CONTROL,
            value: label.to_string(),
        })?;
        self.set(value);
        Ok(value)
    }

    pub fn signal(&self) -> &Signal<T> {
        &self.signal
    }
}

/// A numeric slider over a closed range.
#[derive(Clone)]
pub struct RangeControl {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    signal: Signal<f64>,
}

impl RangeControl {
    pub fn new(label: &'static str, min: f64, max: f64, initial: f64) -> Self {
        Self {
            label,
            min,
            max,
            signal: Signal::new(initial.clamp(min, max)),
        }
    }

    pub fn get(&self) -> f64 {
        self.signal.get()
    }

    /// Store `value` clamped to the range and return what was stored.
    /// Non-finite input is ignored.
    pub fn set(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.get();
        }
        let v = value.clamp(self.min, self.max);
        self.signal.set(v);
        v
    }

    pub fn signal(&self) -> &Signal<f64> {
        &self.signal
    }
}

#[derive(Clone)]
pub struct ColorControl {
    pub label: &'static str,
    signal: Signal<Rgb>,
}

impl ColorControl {
    pub fn new(label: &'static str, initial: Rgb) -> Self {
        Self {
            label,
            signal: Signal::new(initial),
        }
    }

    pub fn get(&self) -> Rgb {
        self.signal.get()
    }

    pub fn set(&self, value: Rgb) {
        self.signal.set(value);
    }

    pub fn set_hex(&self, hex: &str) -> Result<Rgb> {
        let c = Rgb::parse_hex(hex)?;
        self.set(c);
        Ok(c)
    }

    pub fn signal(&self) -> &Signal<Rgb> {
        &self.signal
    }
}

/// Everything the renderer reads at the top of a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParameters {
    pub time_window: TimeWindow,
    pub marker_style: MarkerStyle,
    pub land_detail: LandDetail,
    pub line_width: f64,
    pub marker_size: f64,
    pub padding: f64,
    pub spin_speed: f64,
    pub ocean_color: Rgb,
    pub land_color: Rgb,
    pub marker_color: Rgb,
    pub marker_opacity: f64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        ParameterPanel::default().snapshot()
    }
}

pub struct ParameterPanel {
    pub time_window: ChoiceControl<TimeWindow>,
    pub marker_style: ChoiceControl<MarkerStyle>,
    pub land_detail: ChoiceControl<LandDetail>,
    pub line_width: RangeControl,
    pub marker_size: RangeControl,
    pub padding: RangeControl,
    pub spin_speed: RangeControl,
    pub ocean_color: ColorControl,
    pub land_color: ColorControl,
    pub marker_color: ColorControl,
    pub marker_opacity: RangeControl,
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self {
            time_window: ChoiceControl::new(TimeWindow::PastWeek),
            marker_style: ChoiceControl::new(MarkerStyle::Projected),
            land_detail: ChoiceControl::new(LandDetail::Countries),
            line_width: RangeControl::new("line width", 0.01, 5.0, 0.35),
            marker_size: RangeControl::new("marker size", 1.0, 20.0, 10.0),
            padding: RangeControl::new("padding", 0.0, 100.0, 10.0),
            spin_speed: RangeControl::new("spin speed", 0.0, 3.0, 0.4),
            ocean_color: ColorControl::new("ocean color", Rgb::new(0x74, 0xfb, 0xfd)),
            land_color: ColorControl::new("land color", Rgb::new(0xfe, 0xfa, 0xfa)),
            marker_color: ColorControl::new("marker color", Rgb::new(0xf1, 0x17, 0x07)),
            marker_opacity: RangeControl::new("marker opacity", 0.0, 1.0, 0.25),
        }
    }
}

impl ParameterPanel {
    pub fn snapshot(&self) -> RenderParameters {
        RenderParameters {
            time_window: self.time_window.get(),
            marker_style: self.marker_style.get(),
            land_detail: self.land_detail.get(),
            line_width: self.line_width.get(),
            marker_size: self.marker_size.get(),
            padding: self.padding.get(),
            spin_speed: self.spin_speed.get(),
            ocean_color: self.ocean_color.get(),
            land_color: self.land_color.get(),
            marker_color: self.marker_color.get(),
            marker_opacity: self.marker_opacity.get(),
        }
    }

    /// The numeric sliders in display order.
    pub fn ranges(&self) -> [&RangeControl; 5] {
        [
            &self.line_width,
            &self.marker_size,
            &self.padding,
            &self.spin_speed,
            &self.marker_opacity,
        ]
    }
}
