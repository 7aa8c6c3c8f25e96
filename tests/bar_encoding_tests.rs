use bar_chart_rs::ChartError;
use bar_chart_rs::core::{ChartState, Color, DataPoint};
use bar_chart_rs::encode::{DEFAULT_BAR_WIDTH_PX, encode_bars, encode_bars_with_width};

#[test]
fn first_seed_bar_is_one_hundred_fifty_pixels() {
    let state = ChartState::initialize();
    let bars = encode_bars(&state, 50.0).expect("encode");

    assert_eq!(bars.len(), 18);
    assert_eq!(bars[0].label, "1");
    assert_eq!(bars[0].pixel_height, 150.0);
    assert_eq!(bars[0].color, Color::RED);
    assert_eq!(bars[0].width, DEFAULT_BAR_WIDTH_PX);
    assert_eq!(bars[0].id, state.points()[0].id());
}

#[test]
fn bars_follow_dataset_order_not_label_order() {
    let state = ChartState::from_points(vec![
        DataPoint::new("10", 1.0, Color::RED).expect("p"),
        DataPoint::new("2", 2.0, Color::GREEN).expect("p"),
        DataPoint::new("b", 3.0, Color::BLUE).expect("p"),
        DataPoint::new("a", 4.0, Color::GRAY).expect("p"),
    ]);
    let bars = encode_bars(&state, 10.0).expect("encode");

    let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();
    assert_eq!(labels, ["10", "2", "b", "a"]);
    let heights: Vec<f64> = bars.iter().map(|bar| bar.pixel_height).collect();
    assert_eq!(heights, [10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn zero_value_yields_zero_height_bar() {
    let state = ChartState::from_points(vec![DataPoint::new("z", 0.0, Color::RED).expect("p")]);
    let bars = encode_bars(&state, 50.0).expect("encode");
    assert_eq!(bars[0].pixel_height, 0.0);
}

#[test]
fn empty_dataset_encodes_to_no_bars() {
    let state = ChartState::from_points(Vec::new());
    assert!(encode_bars(&state, 50.0).expect("encode").is_empty());
}

#[test]
fn invalid_unit_height_or_width_is_rejected() {
    let state = ChartState::initialize();

    let err = encode_bars(&state, -1.0).expect_err("negative unit height");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(encode_bars(&state, f64::NAN).is_err());
    assert!(encode_bars_with_width(&state, 50.0, 0.0).is_err());
}

#[test]
fn custom_width_is_applied_to_every_bar() {
    let state = ChartState::initialize();
    let bars = encode_bars_with_width(&state, 50.0, 12.0).expect("encode");
    assert!(bars.iter().all(|bar| bar.width == 12.0));
}
