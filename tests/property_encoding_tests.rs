use bar_chart_rs::core::{BarHeight, ChartState, Color, DataPoint};
use bar_chart_rs::encode::{encode_accessibility, encode_bars};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = ChartState> {
    prop::collection::vec(("[a-z0-9]{1,4}", 0.0f64..1_000.0), 0..40).prop_map(|entries| {
        let points = entries
            .into_iter()
            .map(|(label, value)| DataPoint::new(label, value, Color::ORANGE).expect("valid point"))
            .collect();
        ChartState::from_points(points)
    })
}

fn arb_color() -> impl Strategy<Value = Color> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(red, green, blue, alpha)| Color::rgba(red, green, blue, alpha))
}

proptest! {
    #[test]
    fn bar_count_matches_point_count(state in arb_state(), unit_height in 0.0f64..200.0) {
        let bars = encode_bars(&state, unit_height).expect("encode");
        prop_assert_eq!(bars.len(), state.len());
    }

    #[test]
    fn bar_height_is_value_times_unit_height(state in arb_state(), unit_height in 0.0f64..200.0) {
        let bars = encode_bars(&state, unit_height).expect("encode");
        for (bar, point) in bars.iter().zip(state.points()) {
            prop_assert_eq!(bar.pixel_height, point.value() * unit_height);
            prop_assert_eq!(bar.label.as_str(), point.label());
            prop_assert_eq!(bar.color, point.color());
        }
    }

    #[test]
    fn category_order_preserves_labels(state in arb_state()) {
        let descriptor = encode_accessibility(&state);
        let labels: Vec<String> = state.labels().map(str::to_owned).collect();
        prop_assert_eq!(&descriptor.x_axis.category_order, &labels);
        let series_labels: Vec<String> =
            descriptor.series[0].points.iter().map(|point| point.x.clone()).collect();
        prop_assert_eq!(series_labels, labels);
    }

    #[test]
    fn value_range_spans_min_and_max(state in arb_state()) {
        let descriptor = encode_accessibility(&state);
        let expected = if state.is_empty() {
            (0.0, 0.0)
        } else {
            let min = state.points().iter().map(DataPoint::value).fold(f64::INFINITY, f64::min);
            let max = state.points().iter().map(DataPoint::value).fold(f64::NEG_INFINITY, f64::max);
            (min, max)
        };
        prop_assert_eq!(descriptor.y_axis.range, expected);
    }

    #[test]
    fn commit_overwrites_uniformly(
        state in arb_state(),
        color in arb_color(),
        raw_height in 10u32..=100
    ) {
        let height = BarHeight::new(f64::from(raw_height)).expect("in range");
        let labels: Vec<String> = state.labels().map(str::to_owned).collect();
        let count = state.len();

        let committed = state.commit(color, height).expect("valid commit");

        prop_assert_eq!(committed.len(), count);
        let committed_labels: Vec<String> = committed.labels().map(str::to_owned).collect();
        prop_assert_eq!(committed_labels, labels);
        for point in committed.points() {
            prop_assert_eq!(point.value(), f64::from(raw_height) / 50.0);
            prop_assert_eq!(point.color(), color);
        }
    }
}
