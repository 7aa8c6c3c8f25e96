use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use bar_chart_rs::ChartError;
use bar_chart_rs::api::{AccessibilityRole, BarVerticalAlignment, ChartView, ChartViewConfig};
use bar_chart_rs::core::{ChartState, Color, DataPoint, Viewport};
use bar_chart_rs::encode::{CHART_ACCESSIBILITY_LABEL, ChartDescriptorProvider};
use bar_chart_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use bar_chart_rs::interaction::EditMode;
use bar_chart_rs::render::NullRenderer;

fn seed_view() -> ChartView<NullRenderer> {
    let config = ChartViewConfig::new(Viewport::new(1_100, 480));
    ChartView::new(NullRenderer::default(), config).expect("view init")
}

#[test]
fn view_rejects_invalid_viewport() {
    let config = ChartViewConfig::new(Viewport::new(0, 480));
    let err = ChartView::new(NullRenderer::default(), config)
        .err()
        .expect("zero width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn control_changes_enter_pending_edit_without_touching_points() {
    let mut view = seed_view();
    let before = view.state().points().to_vec();
    assert_eq!(view.mode(), EditMode::Idle);

    let height = view.set_pending_height(72.6).expect("slider");
    assert_eq!(height.get(), 73.0);
    assert_eq!(view.mode(), EditMode::PendingEdit);

    view.set_pending_color(Color::PINK).expect("color");
    assert_eq!(view.mode(), EditMode::PendingEdit);
    assert_eq!(view.state().points(), before.as_slice());
}

#[test]
fn slider_values_are_clamped_to_bounds() {
    let mut view = seed_view();
    assert_eq!(view.set_pending_height(4.0).expect("low").get(), 10.0);
    assert_eq!(view.set_pending_height(400.0).expect("high").get(), 100.0);
    assert!(view.set_pending_height(f64::NAN).is_err());
}

#[test]
fn confirm_commits_returns_to_idle_and_renders() {
    let mut view = seed_view();
    view.set_pending_height(100.0).expect("slider");
    view.set_pending_color(Color::BLUE).expect("color");

    view.confirm().expect("confirm");

    assert_eq!(view.mode(), EditMode::Idle);
    assert_eq!(view.commit_count(), 1);
    let labels: Vec<&str> = view.state().labels().collect();
    assert_eq!(labels.first().copied(), Some("1"));
    assert_eq!(labels.last().copied(), Some("18"));
    assert!(
        view.state()
            .points()
            .iter()
            .all(|point| point.value() == 2.0 && point.color() == Color::BLUE)
    );
    assert_eq!(view.renderer().frames_rendered, 1);
    assert_eq!(view.renderer().last_rect_count, 18);
}

#[test]
fn confirm_without_edits_still_overwrites_uniformly() {
    let mut view = seed_view();
    view.confirm().expect("confirm");
    assert!(
        view.state()
            .points()
            .iter()
            .all(|point| point.value() == 1.0 && point.color() == Color::BLUE)
    );
}

#[test]
fn render_frame_lays_bars_left_to_right_on_a_baseline() {
    let view = seed_view();
    let config = view.config();
    let frame = view.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.rects.len(), 18);
    assert_eq!(frame.texts.len(), 18);

    let baseline = 480.0 - config.content_padding_px;
    for (index, rect) in frame.rects.iter().enumerate() {
        let expected_x = config.content_padding_px + index as f64 * 40.0;
        assert_relative_eq!(rect.x, expected_x);
        assert_relative_eq!(rect.width, 30.0);
        assert_relative_eq!(rect.y + rect.height, baseline);
        assert_relative_eq!(rect.corner_radius, 8.0);
    }
    assert_relative_eq!(frame.rects[0].height, 150.0);
    assert_eq!(frame.rects[0].fill_color, Color::RED);

    let first_label = &frame.texts[0];
    assert_eq!(first_label.text, "1");
    assert_relative_eq!(first_label.x, config.content_padding_px + 15.0);
}

#[test]
fn centered_alignment_places_bars_on_midline() {
    let config = ChartViewConfig::new(Viewport::new(800, 400))
        .with_vertical_alignment(BarVerticalAlignment::Center);
    let view = ChartView::new(NullRenderer::default(), config).expect("view init");
    let frame = view.build_render_frame().expect("frame");

    for rect in &frame.rects {
        assert_relative_eq!(rect.y + rect.height / 2.0, 200.0);
    }
}

#[test]
fn zero_value_bars_still_render_with_labels() {
    let state = ChartState::from_points(vec![DataPoint::new("z", 0.0, Color::RED).expect("p")]);
    let config = ChartViewConfig::new(Viewport::new(200, 200));
    let mut view = ChartView::with_state(NullRenderer::default(), config, state).expect("view");

    view.render().expect("render");
    assert_eq!(view.renderer().last_rect_count, 1);
    assert_eq!(view.renderer().last_text_count, 1);
}

#[test]
fn content_width_accounts_for_padding_width_and_spacing() {
    let view = seed_view();
    assert_relative_eq!(view.content_width(), 2.0 * 16.0 + 18.0 * 30.0 + 17.0 * 10.0);
}

#[test]
fn accessibility_element_tracks_committed_state() {
    let mut view = seed_view();
    let element = view.accessibility_element();
    assert_eq!(element.role, AccessibilityRole::Chart);
    assert_eq!(element.label, CHART_ACCESSIBILITY_LABEL);
    assert_eq!(element.descriptor.y_axis.range, (2.0, 8.0));

    view.set_pending_height(30.0).expect("slider");
    assert_eq!(view.accessibility_descriptor().y_axis.range, (2.0, 8.0));

    view.confirm().expect("confirm");
    assert_eq!(view.accessibility_descriptor().y_axis.range, (0.6, 0.6));
}

#[derive(Default)]
struct RecordingPlugin {
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

#[test]
fn plugins_observe_the_edit_cycle() {
    let mut view = seed_view();
    let plugin = RecordingPlugin::default();
    let events = Rc::clone(&plugin.events);
    view.register_plugin(Box::new(plugin)).expect("register");

    view.set_pending_height(100.0).expect("slider");
    view.set_pending_color(Color::GREEN).expect("color");
    view.confirm().expect("confirm");

    let events = events.borrow();
    let kinds: Vec<PluginEvent> = events.iter().map(|(event, _)| *event).collect();
    assert_eq!(
        kinds,
        vec![
            PluginEvent::PendingHeightChanged { height: 100.0 },
            PluginEvent::PendingColorChanged {
                color: Color::GREEN
            },
            PluginEvent::Committed {
                points_len: 18,
                value: 2.0
            },
            PluginEvent::Rendered {
                rects: 18,
                texts: 18
            },
        ]
    );
    assert_eq!(events[1].1.edit_mode, EditMode::PendingEdit);
    assert_eq!(events[2].1.edit_mode, EditMode::Idle);
    assert_eq!(events[2].1.value_range, (2.0, 2.0));
}

#[test]
fn plugin_ids_must_be_unique() {
    let mut view = seed_view();
    view.register_plugin(Box::new(RecordingPlugin::default()))
        .expect("first");
    let err = view
        .register_plugin(Box::new(RecordingPlugin::default()))
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert!(view.unregister_plugin("recorder"));
    assert!(!view.has_plugin("recorder"));
    assert_eq!(view.plugin_count(), 0);
}
