use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{ChartState, DataPoint};

/// Static label of the single chart accessibility element. Also used as the
/// descriptor title.
pub const CHART_ACCESSIBILITY_LABEL: &str = "Chart representing some data";

pub const CATEGORY_AXIS_TITLE: &str = "Labels";
pub const VALUE_AXIS_TITLE: &str = "Values";

pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Default numeric-axis label: `3.0 points`.
///
/// The fractional part is always kept so whole values read the same way the
/// committed `height / 50` values do. Magnitudes printed in exponent form use
/// a signed exponent of at least two digits: `1e+16 points`, `1.5e-07 points`.
#[must_use]
pub fn format_points(value: f64) -> String {
    format!("{} points", value_text(value))
}

fn value_text(value: f64) -> String {
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

fn default_value_formatter() -> ValueFormatterFn {
    Arc::new(format_points)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalAxisDescriptor {
    pub title: String,
    /// Category keys in dataset order; series points align to this by index.
    pub category_order: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct NumericAxisDescriptor {
    pub title: String,
    pub range: (f64, f64),
    pub gridline_positions: Vec<f64>,
    #[serde(skip, default = "default_value_formatter")]
    value_formatter: ValueFormatterFn,
}

impl NumericAxisDescriptor {
    #[must_use]
    pub fn new(title: impl Into<String>, range: (f64, f64)) -> Self {
        Self {
            title: title.into(),
            range,
            gridline_positions: Vec::new(),
            value_formatter: default_value_formatter(),
        }
    }

    #[must_use]
    pub fn with_value_formatter(mut self, formatter: ValueFormatterFn) -> Self {
        self.value_formatter = formatter;
        self
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        (self.value_formatter)(value)
    }
}

impl fmt::Debug for NumericAxisDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericAxisDescriptor")
            .field("title", &self.title)
            .field("range", &self.range)
            .field("gridline_positions", &self.gridline_positions)
            .finish_non_exhaustive()
    }
}

/// Formatters are opaque, so equality only covers the axis data.
impl PartialEq for NumericAxisDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.range == other.range
            && self.gridline_positions == other.gridline_positions
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeriesDescriptor {
    pub name: String,
    pub is_continuous: bool,
    pub points: Vec<SeriesPoint>,
}

/// Structured restatement of the chart for assistive technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityDescriptor {
    pub title: String,
    pub summary: Option<String>,
    pub x_axis: CategoricalAxisDescriptor,
    pub y_axis: NumericAxisDescriptor,
    pub series: Vec<DataSeriesDescriptor>,
}

impl AccessibilityDescriptor {
    /// Flattens the descriptor into one sentence-style string for hosts whose
    /// accessibility layer only takes plain text.
    #[must_use]
    pub fn spoken_summary(&self) -> String {
        let mut text = self.title.clone();
        if let Some(summary) = &self.summary {
            text.push_str(". ");
            text.push_str(summary);
        }
        let points: Vec<&SeriesPoint> = self
            .series
            .iter()
            .flat_map(|series| series.points.iter())
            .collect();
        if points.is_empty() {
            text.push_str(". No data.");
            return text;
        }

        let (min, max) = self.y_axis.range;
        text.push_str(&format!(
            ". {}: {} categories. {} from {} to {}. ",
            self.x_axis.title,
            self.x_axis.category_order.len(),
            self.y_axis.title,
            self.y_axis.format_value(min),
            self.y_axis.format_value(max),
        ));
        let entries: Vec<String> = points
            .iter()
            .map(|point| format!("{}: {}", point.x, self.y_axis.format_value(point.y)))
            .collect();
        text.push_str(&entries.join("; "));
        text.push('.');
        text
    }
}

/// A type that can describe its current data for assistive technology.
pub trait ChartDescriptorProvider {
    fn accessibility_descriptor(&self) -> AccessibilityDescriptor;
}

impl ChartDescriptorProvider for ChartState {
    fn accessibility_descriptor(&self) -> AccessibilityDescriptor {
        encode_accessibility(self)
    }
}

/// Projects the dataset into its accessibility descriptor.
///
/// The category axis and the single series share dataset order; the value
/// axis spans `[min, max]` of the values, `(0, 0)` when there are none.
#[must_use]
pub fn encode_accessibility(state: &ChartState) -> AccessibilityDescriptor {
    let category_order = state.labels().map(str::to_owned).collect();
    let points = state
        .points()
        .iter()
        .map(|point: &DataPoint| SeriesPoint {
            x: point.label().to_owned(),
            y: point.value(),
        })
        .collect();

    AccessibilityDescriptor {
        title: CHART_ACCESSIBILITY_LABEL.to_owned(),
        summary: None,
        x_axis: CategoricalAxisDescriptor {
            title: CATEGORY_AXIS_TITLE.to_owned(),
            category_order,
        },
        y_axis: NumericAxisDescriptor::new(VALUE_AXIS_TITLE, state.value_range()),
        series: vec![DataSeriesDescriptor {
            name: String::new(),
            is_continuous: false,
            points,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_points_keeps_fraction_for_whole_values() {
        assert_eq!(format_points(3.0), "3.0 points");
        assert_eq!(format_points(1.5), "1.5 points");
    }

    #[test]
    fn format_points_signs_and_pads_exponents() {
        assert_eq!(format_points(1e16), "1e+16 points");
        assert_eq!(format_points(2.5e120), "2.5e+120 points");
        assert_eq!(format_points(1.5e-7), "1.5e-07 points");
        assert_eq!(format_points(0.0001), "0.0001 points");
    }

    #[test]
    fn custom_formatter_is_used_by_format_value() {
        let axis = NumericAxisDescriptor::new("Values", (0.0, 1.0))
            .with_value_formatter(Arc::new(|value| format!("{value:.2} pts")));
        assert_eq!(axis.format_value(0.5), "0.50 pts");
    }

    #[test]
    fn empty_dataset_is_spoken_as_no_data() {
        let descriptor = encode_accessibility(&ChartState::from_points(Vec::new()));
        assert_eq!(descriptor.y_axis.range, (0.0, 0.0));
        assert_eq!(
            descriptor.spoken_summary(),
            "Chart representing some data. No data."
        );
    }
}
