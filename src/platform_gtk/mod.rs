//! GTK4 host for [`ChartView`]: a drawing area plus the height slider, color
//! button and "Update Chart" button that drive the edit cycle.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartView;
use crate::core::Color;
use crate::encode::{CHART_ACCESSIBILITY_LABEL, ChartDescriptorProvider};
use crate::render::CairoRenderer;

pub type SharedChartView = Rc<RefCell<ChartView<CairoRenderer>>>;

pub struct GtkChartAdapter {
    view: SharedChartView,
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(view: ChartView<CairoRenderer>) -> Self {
        let view = Rc::new(RefCell::new(view));
        let (content_width, config, pending_height, pending_color) = {
            let view = view.borrow();
            (
                view.content_width(),
                view.config(),
                view.state().pending_height().get(),
                view.state().pending_color(),
            )
        };

        let drawing_area = gtk::DrawingArea::builder()
            // GTK has no chart role; Img is the closest static-graphic role.
            .accessible_role(gtk::AccessibleRole::Img)
            .content_width(content_width.ceil() as i32)
            .content_height(config.viewport.height as i32)
            .build();
        drawing_area.set_draw_func({
            let view = Rc::clone(&view);
            move |_area, context, _width, _height| {
                let Ok(mut view) = view.try_borrow_mut() else {
                    warn!("chart view busy during draw; skipping frame");
                    return;
                };
                if let Err(err) = view.render_on_cairo_context(context) {
                    warn!(error = %err, "chart draw failed");
                }
            }
        });
        update_accessible_properties(&drawing_area, &view);

        let slider_config = config.height_slider;
        let slider = gtk::Scale::with_range(
            gtk::Orientation::Horizontal,
            slider_config.min,
            slider_config.max,
            slider_config.step,
        );
        slider.set_value(pending_height);
        slider.set_width_request(160);
        slider.connect_value_changed({
            let view = Rc::clone(&view);
            move |scale| {
                if let Err(err) = view.borrow_mut().set_pending_height(scale.value()) {
                    warn!(error = %err, "rejected slider value");
                }
            }
        });

        let color_button = build_color_button(&view, pending_color);

        let update_button = gtk::Button::with_label("Update Chart");
        update_button.connect_clicked({
            let view = Rc::clone(&view);
            let drawing_area = drawing_area.clone();
            move |_| {
                if let Err(err) = view.borrow_mut().confirm() {
                    warn!(error = %err, "chart update failed");
                }
                update_accessible_properties(&drawing_area, &view);
                drawing_area.queue_draw();
            }
        });

        let controls = gtk::Box::new(gtk::Orientation::Vertical, 8);
        controls.append(&heading("Adjust Bar Height:"));
        controls.append(&slider);
        controls.append(&heading("Selected Color:"));
        controls.append(&color_button);
        controls.append(&update_button);

        let root = gtk::Box::new(gtk::Orientation::Horizontal, 16);
        root.set_margin_top(16);
        root.set_margin_bottom(16);
        root.set_margin_start(16);
        root.set_margin_end(16);
        root.append(&drawing_area);
        root.append(&controls);

        Self {
            view,
            root,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn view(&self) -> SharedChartView {
        Rc::clone(&self.view)
    }
}

fn heading(text: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.add_css_class("heading");
    label.set_xalign(0.0);
    label
}

// GtkColorButton is deprecated from GTK 4.10 but is the only picker present
// in every version the crate supports.
#[allow(deprecated)]
fn build_color_button(view: &SharedChartView, initial: Color) -> gtk::ColorButton {
    let button = gtk::ColorButton::with_rgba(&color_to_rgba(initial));
    button.connect_color_set({
        let view = Rc::clone(view);
        move |button| {
            let color = rgba_to_color(button.rgba());
            if let Err(err) = view.borrow_mut().set_pending_color(color) {
                warn!(error = %err, "rejected picked color");
            }
        }
    });
    button
}

fn update_accessible_properties(drawing_area: &gtk::DrawingArea, view: &SharedChartView) {
    let summary = view.borrow().accessibility_descriptor().spoken_summary();
    drawing_area.update_property(&[
        gtk::accessible::Property::Label(CHART_ACCESSIBILITY_LABEL),
        gtk::accessible::Property::Description(&summary),
    ]);
}

fn color_to_rgba(color: Color) -> gtk::gdk::RGBA {
    gtk::gdk::RGBA::new(
        color.red as f32,
        color.green as f32,
        color.blue as f32,
        color.alpha as f32,
    )
}

fn rgba_to_color(rgba: gtk::gdk::RGBA) -> Color {
    let channel = |value: f32| f64::from(value).clamp(0.0, 1.0);
    Color::rgba(
        channel(rgba.red()),
        channel(rgba.green()),
        channel(rgba.blue()),
        channel(rgba.alpha()),
    )
}
