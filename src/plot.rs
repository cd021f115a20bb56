//! Plot panel for line and scatter plots.
//!
//! Graphical representations of data are an often-found use case in
//! scientific GUIs. The widget here renders named series of (x, y) points
//! on a canvas with the interactions users expect from a plot window:
//! panning by dragging, zooming with the scroll wheel centred on the
//! cursor, and a toolbar to reset the view or step back and forth through
//! previous views.
//!
//! The caller owns the data. Add series via [`Plot::add_series`], mutate
//! them through [`Plot::series_mut`] and let [`Plot::show`] do the rest:
//!
//! ```no_run
//! # use eguibricks::plot::{Plot, SeriesKind};
//! # fn ui(ui: &mut egui::Ui, plot: &mut Plot) {
//! plot.add_series("signal", SeriesKind::Line)
//!     .points
//!     .extend((0..500).map(|i| {
//!         let t = i as f64 * 0.025;
//!         (t, t.sin())
//!     }));
//! plot.show(ui);
//! # }
//! ```

use egui::{Pos2, Rect, Sense, Stroke, Vec2};

// ─── Colours ─────────────────────────────────────────────────────────────────

mod colors {
    use egui::Color32;

    /// Per-series colours, assigned round-robin.
    pub const SERIES: [Color32; 6] = [
        Color32::from_rgb(70, 130, 180),
        Color32::from_rgb(255, 165, 0),
        Color32::from_rgb(60, 179, 113),
        Color32::from_rgb(186, 85, 211),
        Color32::from_rgb(205, 92, 92),
        Color32::from_rgb(0, 191, 255),
    ];

    pub const GRID: Color32 = Color32::from_rgb(60, 60, 60);
    pub const AXIS_LABEL: Color32 = Color32::from_rgb(170, 170, 170);
    pub const FRAME: Color32 = Color32::from_rgb(100, 100, 100);
    pub const BACKGROUND: Color32 = Color32::from_rgb(30, 30, 30);
}

// ─── Dimensions ──────────────────────────────────────────────────────────────

mod layout {
    /// Fraction of the data span added on each side of the home view.
    pub const HOME_MARGIN: f64 = 0.05;
    /// Approximate number of ticks along each axis.
    pub const TICK_COUNT: f64 = 6.0;
    /// Radius of scatter markers.
    pub const MARKER_RADIUS: f32 = 2.5;
    /// Maximum number of views kept in the history.
    pub const HISTORY_LIMIT: usize = 32;
}

// ─── Data model ──────────────────────────────────────────────────────────────

/// How the points of a series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Points connected in order.
    Line,
    /// Individual markers.
    Scatter,
}

/// A named sequence of (x, y) points.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
}

/// The data rectangle currently mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    /// The view enclosing all finite points of all series, with a margin.
    ///
    /// Falls back to the unit square when there is nothing to enclose, and
    /// widens degenerate spans so the view never collapses.
    fn enclosing(series: &[Series]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for series in series {
            for &(x, y) in &series.points {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }

        if x_min > x_max || y_min > y_max {
            return Self {
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
            };
        }

        let mut bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.widen_degenerate();
        bounds.expand_fraction(layout::HOME_MARGIN);
        bounds
    }

    fn widen_degenerate(&mut self) {
        if self.x_max - self.x_min == 0.0 {
            self.x_min -= 0.5;
            self.x_max += 0.5;
        }
        if self.y_max - self.y_min == 0.0 {
            self.y_min -= 0.5;
            self.y_max += 0.5;
        }
    }

    fn expand_fraction(&mut self, fraction: f64) {
        let dx = (self.x_max - self.x_min) * fraction;
        let dy = (self.y_max - self.y_min) * fraction;
        self.x_min -= dx;
        self.x_max += dx;
        self.y_min -= dy;
        self.y_max += dy;
    }

    /// Map a data point to a screen position within `rect`.
    ///
    /// Screen y grows downwards, data y upwards.
    fn to_screen(&self, rect: Rect, x: f64, y: f64) -> Pos2 {
        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);
        Pos2::new(
            rect.left() + (fx as f32) * rect.width(),
            rect.bottom() - (fy as f32) * rect.height(),
        )
    }

    /// Map a screen position within `rect` back to data coordinates.
    fn to_data(&self, rect: Rect, pos: Pos2) -> (f64, f64) {
        let fx = ((pos.x - rect.left()) / rect.width()) as f64;
        let fy = ((rect.bottom() - pos.y) / rect.height()) as f64;
        (
            self.x_min + fx * (self.x_max - self.x_min),
            self.y_min + fy * (self.y_max - self.y_min),
        )
    }

    /// Shift the view by a screen-space delta.
    fn pan(&mut self, rect: Rect, delta: Vec2) {
        let dx = (delta.x / rect.width()) as f64 * (self.x_max - self.x_min);
        let dy = (delta.y / rect.height()) as f64 * (self.y_max - self.y_min);
        // Dragging right moves the data right, i.e. the view left.
        self.x_min -= dx;
        self.x_max -= dx;
        // Screen y is flipped relative to data y.
        self.y_min += dy;
        self.y_max += dy;
    }

    /// Scale the spans by `factor`, keeping `(x, y)` fixed in place.
    fn zoom_about(&mut self, x: f64, y: f64, factor: f64) {
        self.x_min = x - (x - self.x_min) * factor;
        self.x_max = x + (self.x_max - x) * factor;
        self.y_min = y - (y - self.y_min) * factor;
        self.y_max = y + (self.y_max - y) * factor;
    }
}

/// What happened inside a [`Plot`] during this frame.
pub struct PlotResponse {
    /// Whether the user changed the view this frame.
    pub view_changed: bool,
    /// Response of the canvas area.
    pub response: egui::Response,
}

// ─── Plot ────────────────────────────────────────────────────────────────────

/// Plot widget with pan, zoom and a view history.
///
/// The view starts out following the data (auto-fit). As soon as the user
/// pans or zooms, the view is pinned and the previous one is pushed onto
/// the history, reachable via the back button; home returns to auto-fit.
pub struct Plot {
    series: Vec<Series>,
    /// Pinned view, or `None` while auto-fitting to the data.
    view: Option<ViewBounds>,
    history: Vec<Option<ViewBounds>>,
    future: Vec<Option<ViewBounds>>,
    /// Whether a zoom gesture was active last frame, so one gesture pushes
    /// one history entry however many scroll events it produces.
    zooming: bool,
}

impl Plot {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            view: None,
            history: Vec::new(),
            future: Vec::new(),
            zooming: false,
        }
    }

    /// Add an empty series and return it for filling.
    pub fn add_series(&mut self, name: impl Into<String>, kind: SeriesKind) -> &mut Series {
        self.series.push(Series {
            name: name.into(),
            kind,
            points: Vec::new(),
        });
        self.series.last_mut().unwrap()
    }

    /// Mutable access to a series by name.
    pub fn series_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series.iter_mut().find(|series| series.name == name)
    }

    /// Remove all series.
    pub fn clear(&mut self) {
        self.series.clear();
    }

    /// The view currently shown.
    pub fn view(&self) -> ViewBounds {
        self.view
            .unwrap_or_else(|| ViewBounds::enclosing(&self.series))
    }

    // ─── View history ────────────────────────────────────────────────────

    /// Reset the view to auto-fit, like the initial state.
    pub fn home(&mut self) {
        self.push_history();
        self.view = None;
    }

    /// Undo the last view change.
    pub fn back(&mut self) {
        if let Some(view) = self.history.pop() {
            self.future.push(self.view.take());
            self.view = view;
        }
    }

    /// Redo the last undone view change.
    pub fn forward(&mut self) {
        if let Some(view) = self.future.pop() {
            self.history.push(self.view.take());
            self.view = view;
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.future.is_empty()
    }

    /// Remember the current view; a new change discards the redo stack.
    fn push_history(&mut self) {
        self.future.clear();
        self.history.push(self.view);
        if self.history.len() > layout::HISTORY_LIMIT {
            self.history.remove(0);
        }
    }

    // ─── UI ──────────────────────────────────────────────────────────────

    /// Show the toolbar and the canvas.
    pub fn show(&mut self, ui: &mut egui::Ui) -> PlotResponse {
        let mut view_changed = false;

        ui.horizontal(|ui| {
            if crate::utils::show_button(ui, "Home", None, Some("Reset plot to the full view"))
                .clicked()
            {
                self.home();
                view_changed = true;
            }
            ui.add_enabled_ui(self.can_go_back(), |ui| {
                if crate::utils::show_button(ui, "←", None, Some("Undo last view change"))
                    .clicked()
                {
                    self.back();
                    view_changed = true;
                }
            });
            ui.add_enabled_ui(self.can_go_forward(), |ui| {
                if crate::utils::show_button(ui, "→", None, Some("Redo last view change"))
                    .clicked()
                {
                    self.forward();
                    view_changed = true;
                }
            });
        });

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return PlotResponse {
                view_changed,
                response,
            };
        }

        let mut view = self.view();

        // Zoom with the scroll wheel, centred on the cursor position.
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
        let hover_pos = response.hover_pos();
        if let Some(pos) = hover_pos
            && scroll_delta.y != 0.0
        {
            if !self.zooming {
                self.push_history();
                self.zooming = true;
            }
            let (x, y) = view.to_data(rect, pos);
            let factor = (-scroll_delta.y as f64 * 0.002).exp();
            view.zoom_about(x, y, factor);
            self.view = Some(view);
            view_changed = true;
        } else {
            self.zooming = false;
        }

        // Pan by dragging with the primary button.
        if response.drag_started() {
            self.push_history();
        }
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                view.pan(rect, delta);
                self.view = Some(view);
                view_changed = true;
            }
        }

        self.paint(ui, rect, view);

        PlotResponse {
            view_changed,
            response,
        }
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, view: ViewBounds) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 2.0, colors::BACKGROUND);

        // Grid and tick labels.
        let x_step = nice_step((view.x_max - view.x_min) / layout::TICK_COUNT);
        for x in ticks(view.x_min, view.x_max, x_step) {
            let top = view.to_screen(rect, x, view.y_max);
            let bottom = view.to_screen(rect, x, view.y_min);
            painter.line_segment([top, bottom], Stroke::new(1.0, colors::GRID));
            painter.text(
                Pos2::new(bottom.x, rect.bottom() - 2.0),
                egui::Align2::CENTER_BOTTOM,
                format_tick(x, x_step),
                egui::FontId::proportional(10.0),
                colors::AXIS_LABEL,
            );
        }
        let y_step = nice_step((view.y_max - view.y_min) / layout::TICK_COUNT);
        for y in ticks(view.y_min, view.y_max, y_step) {
            let left = view.to_screen(rect, view.x_min, y);
            let right = view.to_screen(rect, view.x_max, y);
            painter.line_segment([left, right], Stroke::new(1.0, colors::GRID));
            painter.text(
                Pos2::new(rect.left() + 2.0, left.y),
                egui::Align2::LEFT_CENTER,
                format_tick(y, y_step),
                egui::FontId::proportional(10.0),
                colors::AXIS_LABEL,
            );
        }

        // Series, clipped to the canvas by the painter.
        for (index, series) in self.series.iter().enumerate() {
            let color = colors::SERIES[index % colors::SERIES.len()];
            let points: Vec<Pos2> = series
                .points
                .iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|&(x, y)| view.to_screen(rect, x, y))
                .collect();
            match series.kind {
                SeriesKind::Line => {
                    if points.len() >= 2 {
                        painter.add(egui::Shape::line(points, Stroke::new(1.5, color)));
                    }
                }
                SeriesKind::Scatter => {
                    for point in points {
                        painter.circle_filled(point, layout::MARKER_RADIUS, color);
                    }
                }
            }

            // Legend entry, stacked in the top-left corner.
            painter.text(
                Pos2::new(rect.left() + 8.0, rect.top() + 6.0 + 14.0 * index as f32),
                egui::Align2::LEFT_TOP,
                &series.name,
                egui::FontId::proportional(11.0),
                color,
            );
        }

        painter.rect_stroke(
            rect,
            2.0,
            Stroke::new(1.0, colors::FRAME),
            egui::StrokeKind::Inside,
        );
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Ticks ───────────────────────────────────────────────────────────────────

/// Round a raw step to a "nice" value of the form {1, 2, 5} * 10^k.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual < 1.5 {
        1.0
    } else if residual < 3.5 {
        2.0
    } else if residual < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions covering `[min, max]` at multiples of `step`.
fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut result = Vec::new();
    if step <= 0.0 || !min.is_finite() || !max.is_finite() {
        return result;
    }
    let mut tick = (min / step).ceil() * step;
    while tick <= max {
        result.push(tick);
        tick += step;
        if result.len() > 100 {
            break;
        }
    }
    result
}

/// Format a tick label with just enough decimals for the step size.
fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plot() -> Plot {
        let mut plot = Plot::new();
        plot.add_series("signal", SeriesKind::Line)
            .points
            .extend([(0.0, -1.0), (5.0, 1.0), (10.0, 0.0)]);
        plot
    }

    #[test]
    fn test_enclosing_view_covers_data_with_margin() {
        let plot = sample_plot();
        let view = plot.view();
        assert!(view.x_min < 0.0 && view.x_min > -1.0);
        assert!(view.x_max > 10.0 && view.x_max < 11.0);
        assert!(view.y_min < -1.0 && view.y_max > 1.0);
    }

    #[test]
    fn test_enclosing_view_of_empty_plot_is_unit_square() {
        let plot = Plot::new();
        let view = plot.view();
        assert_eq!(view.x_min, 0.0);
        assert_eq!(view.x_max, 1.0);
    }

    #[test]
    fn test_degenerate_spans_are_widened() {
        let mut plot = Plot::new();
        plot.add_series("point", SeriesKind::Scatter)
            .points
            .push((3.0, 4.0));
        let view = plot.view();
        assert!(view.x_max > view.x_min);
        assert!(view.y_max > view.y_min);
    }

    #[test]
    fn test_screen_transform_roundtrip() {
        let view = ViewBounds {
            x_min: -10.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 5.0,
        };
        let rect = Rect::from_min_size(Pos2::new(20.0, 40.0), egui::vec2(400.0, 300.0));

        let pos = view.to_screen(rect, 0.0, 2.5);
        assert_eq!(pos, Pos2::new(220.0, 190.0));

        let (x, y) = view.to_data(rect, pos);
        assert!((x - 0.0).abs() < 1e-4);
        assert!((y - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut view = ViewBounds {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        view.zoom_about(2.0, 8.0, 0.5);
        assert!((view.x_min - 1.0).abs() < 1e-9);
        assert!((view.x_max - 6.0).abs() < 1e-9);
        assert!((view.y_min - 4.0).abs() < 1e-9);
        assert!((view.y_max - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_pan_moves_view_against_drag() {
        let mut view = ViewBounds {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
        // Dragging right by 10 px shifts the view left by one data unit.
        view.pan(rect, egui::vec2(10.0, 0.0));
        assert!((view.x_min + 1.0).abs() < 1e-9);
        assert!((view.x_max - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_history_back_and_forward() {
        let mut plot = sample_plot();
        let initial = plot.view();

        plot.push_history();
        plot.view = Some(ViewBounds {
            x_min: 2.0,
            x_max: 4.0,
            y_min: -0.5,
            y_max: 0.5,
        });
        assert!(plot.can_go_back());

        plot.back();
        assert_eq!(plot.view(), initial);
        assert!(plot.can_go_forward());

        plot.forward();
        assert_eq!(plot.view().x_min, 2.0);
    }

    #[test]
    fn test_new_change_discards_redo_stack() {
        let mut plot = sample_plot();
        plot.push_history();
        plot.view = Some(plot.view());
        plot.back();
        assert!(plot.can_go_forward());
        plot.push_history();
        assert!(!plot.can_go_forward());
    }

    #[test]
    fn test_nice_steps() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(1.8), 2.0);
        assert_eq!(nice_step(4.0), 5.0);
        assert_eq!(nice_step(8.0), 10.0);
        assert_eq!(nice_step(0.03), 0.02);
    }

    #[test]
    fn test_ticks_cover_range() {
        let positions = ticks(-1.0, 1.0, 0.5);
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0], -1.0);
        assert_eq!(*positions.last().unwrap(), 1.0);
    }

    #[test]
    fn test_tick_formatting() {
        assert_eq!(format_tick(5.0, 1.0), "5");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(-2.5, 0.5), "-2.5");
    }
}
