//! Runs one edit cycle headlessly and prints the resulting view snapshot.

use bar_chart_rs::api::{ChartView, ChartViewConfig};
use bar_chart_rs::core::{Color, Viewport};
use bar_chart_rs::render::NullRenderer;

fn main() -> bar_chart_rs::ChartResult<()> {
    let _ = bar_chart_rs::telemetry::init_default_tracing();

    let config = ChartViewConfig::new(Viewport::new(1_100, 480));
    let mut view = ChartView::new(NullRenderer::default(), config)?;
    view.render()?;

    view.set_pending_height(100.0)?;
    view.set_pending_color(Color::BLUE)?;
    view.confirm()?;

    println!("{}", view.snapshot_json_contract_v1_pretty()?);
    println!("{}", view.accessibility_element().descriptor.spoken_summary());
    Ok(())
}
