//! Demo application assembling the bricks into a small GUI.
//!
//! A file browser in a side panel, a plot of a damped oscillation in the
//! centre, and a bounded integer field controlling how many periods are
//! plotted. Useful both as a smoke test and as copyable example code.

use eguibricks::filebrowser::FileBrowser;
use eguibricks::mainwindow::{self, Content, MainWindow};
use eguibricks::plot::{Plot, SeriesKind};
use eguibricks::widgets::{self, IntInput};

struct DemoContent {
    plot: Plot,
    periods: IntInput,
    tool: Option<usize>,
}

impl DemoContent {
    fn new() -> Self {
        let mut content = Self {
            plot: Plot::new(),
            // Anything outside 1..=20 periods is corrected on commit.
            periods: IntInput::new(1, 20)
                .expect("range is well-formed")
                .with_value(4),
            tool: None,
        };
        content.replot();
        content
    }

    fn replot(&mut self) {
        let periods = self.periods.value();
        self.plot.clear();
        let series = self.plot.add_series("damped oscillation", SeriesKind::Line);
        for i in 0..=1000 {
            let t = i as f64 / 1000.0 * periods as f64 * std::f64::consts::TAU;
            series.points.push((t, t.sin() * (-t / 10.0).exp()));
        }
    }
}

impl Content for DemoContent {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Periods:");
            if self.periods.show(ui).committed.is_some() {
                self.replot();
            }
            widgets::vline(ui);
            widgets::uncheckable_toggle_group(ui, &mut self.tool, &["Line", "Marker"]);
        });
        widgets::hline(ui);
        self.plot.show(ui);
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting eguibricks demo");

    let browser = FileBrowser::new(std::env::current_dir().unwrap_or_else(|_| ".".into()));

    let window = MainWindow::new(
        eguibricks::package_metadata!(),
        Box::new(DemoContent::new()),
    )
    .with_title("eguibricks demo")
    .with_side_panel(
        "Files",
        Box::new({
            let mut browser = browser;
            move |ui: &mut egui::Ui| {
                let response = browser.show(ui);
                if let Some(selection) = response.selection_changed {
                    log::info!("Selection: {:?}", selection);
                }
            }
        }),
    );

    mainwindow::run(window)
}
