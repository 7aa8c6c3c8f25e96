use bar_chart_rs::api::{ChartView, ChartViewConfig};
use bar_chart_rs::core::{ChartState, Viewport};
use bar_chart_rs::platform_gtk::GtkChartAdapter;
use bar_chart_rs::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

const CHART_HEIGHT_PX: u32 = 480;

fn main() {
    let _ = bar_chart_rs::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.bar_chart.demos.gtk_bar_chart")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let view = match build_view() {
        Ok(view) => view,
        Err(err) => {
            eprintln!("failed to initialize chart view: {err}");
            return;
        }
    };
    let adapter = GtkChartAdapter::new(view);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Bar Chart")
        .child(adapter.widget())
        .build();
    window.present();
}

fn build_view() -> bar_chart_rs::ChartResult<ChartView<CairoRenderer>> {
    let state = ChartState::initialize();
    let probe = ChartViewConfig::new(Viewport::new(1, CHART_HEIGHT_PX));
    let width = probe.content_width(state.len()).ceil() as u32;

    let config = ChartViewConfig::new(Viewport::new(width, CHART_HEIGHT_PX));
    let renderer = CairoRenderer::new(width as i32, CHART_HEIGHT_PX as i32)?;
    ChartView::with_state(renderer, config, state)
}
