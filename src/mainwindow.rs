//! Main window scaffold with the chrome most applications need.
//!
//! There is usually one main window of a GUI, and much of it is the same
//! every time: a menu bar with File/View/Help menus, a status bar, an About
//! dialog, and window geometry that is saved on close and restored on
//! startup. [`MainWindow`] provides exactly that scaffold; applications
//! supply the actual contents as a [`Content`] implementation (or plain
//! closure) and optionally register side panels, which get their toggle
//! entries in the View menu.
//!
//! ```no_run
//! use eguibricks::mainwindow::{self, MainWindow};
//!
//! let window = MainWindow::new(
//!     eguibricks::package_metadata!(),
//!     Box::new(|ui: &mut egui::Ui| {
//!         ui.label("central widget goes here");
//!     }),
//! );
//! mainwindow::run(window).unwrap();
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::aboutdialog::{AboutDialog, PackageMetadata};
use crate::settings;

const GEOMETRY_FILE: &str = "window.json";

const QUIT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
const ABOUT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::NONE, egui::Key::F1);

/// Content hosted by a [`MainWindow`], centrally or in a side panel.
///
/// Implemented for any `FnMut(&mut egui::Ui)` closure, which covers the
/// simple cases; implement the trait directly to add menus or to veto
/// closing while there is unsaved work.
pub trait Content {
    /// Render the content.
    fn ui(&mut self, ui: &mut egui::Ui);

    /// Add application menus to the menu bar, between File and View.
    fn menus(&mut self, _ui: &mut egui::Ui) {}

    /// Whether it is safe to leave the current state, e.g. close the window.
    ///
    /// Return `false` to keep the window open; typically combined with
    /// showing a "save changes?" dialog from [`ui`](Self::ui).
    fn ok_to_continue(&mut self) -> bool {
        true
    }
}

impl<F: FnMut(&mut egui::Ui)> Content for F {
    fn ui(&mut self, ui: &mut egui::Ui) {
        self(ui)
    }
}

/// Window position and size, persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct WindowGeometry {
    position: Option<[f32; 2]>,
    size: [f32; 2],
}

struct SidePanel {
    title: String,
    content: Box<dyn Content>,
    visible: bool,
}

/// Main GUI window of an application.
///
/// Construct with [`new`](Self::new), add side panels with
/// [`with_side_panel`](Self::with_side_panel) and hand the result to
/// [`run`]. The window persists its geometry under the application name in
/// the user's configuration directory.
pub struct MainWindow {
    metadata: PackageMetadata,
    title: String,
    central: Box<dyn Content>,
    panels: Vec<SidePanel>,
    about: AboutDialog,
    /// Current status bar message and its optional expiry.
    status: Option<(String, Option<Instant>)>,
    /// Most recent geometry reported by the backend, saved on close.
    geometry: Option<WindowGeometry>,
}

impl MainWindow {
    /// Create a main window for the application described by `metadata`.
    ///
    /// The window title and the name of the settings directory both derive
    /// from the package name.
    pub fn new(metadata: PackageMetadata, central: Box<dyn Content>) -> Self {
        let mut window = Self {
            title: metadata.name.to_string(),
            about: AboutDialog::new(metadata),
            metadata,
            central,
            panels: Vec::new(),
            status: None,
            geometry: None,
        };
        window.show_message("Ready", Some(Duration::from_secs(5)));
        window
    }

    /// Override the window title (defaults to the package name).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a side panel, shown on the left and togglable via the View menu.
    pub fn with_side_panel(mut self, title: impl Into<String>, content: Box<dyn Content>) -> Self {
        self.panels.push(SidePanel {
            title: title.into(),
            content,
            visible: true,
        });
        self
    }

    /// Show a message in the status bar, optionally expiring after a while.
    pub fn show_message(&mut self, text: impl Into<String>, timeout: Option<Duration>) {
        self.status = Some((text.into(), timeout.map(|t| Instant::now() + t)));
    }

    /// The current status bar message, dropping it once expired.
    fn current_status(&mut self) -> Option<String> {
        let expired = matches!(
            &self.status,
            Some((_, Some(deadline))) if Instant::now() >= *deadline
        );
        if expired {
            self.status = None;
        }
        self.status.as_ref().map(|(text, _)| text.clone())
    }

    /// Render one frame of the window chrome and its contents.
    ///
    /// Called from the [`eframe::App`] implementation; separate so tests
    /// can drive the window headlessly.
    pub fn ui(&mut self, ctx: &egui::Context) {
        // Keep the latest geometry around for saving on close.
        let (position, size) = ctx.input(|i| {
            let viewport = i.viewport();
            (
                viewport.outer_rect.map(|r| [r.min.x, r.min.y]),
                viewport.inner_rect.map(|r| [r.width(), r.height()]),
            )
        });
        if let Some(size) = size {
            self.geometry = Some(WindowGeometry { position, size });
        }

        // Global shortcuts.
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT_SHORTCUT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&ABOUT_SHORTCUT)) {
            self.about.open = true;
        }

        // Intercept closing: save geometry, or cancel if there is unsaved
        // work the content wants to keep.
        if ctx.input(|i| i.viewport().close_requested()) {
            if self.central.ok_to_continue() {
                self.save_geometry();
            } else {
                log::info!("Close requested but content is not ready; cancelling");
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            }
        }

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        for panel in &mut self.panels {
            if panel.visible {
                egui::SidePanel::left(format!("panel_{}", panel.title))
                    .resizable(true)
                    .show(ctx, |ui| {
                        ui.strong(&panel.title);
                        ui.separator();
                        panel.content.ui(ui);
                    });
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central.ui(ui);
        });

        self.about.show(ctx);

        // Wake up in time to drop an expiring status message.
        if let Some((_, Some(_))) = &self.status {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    /// Render the top menu bar.
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let quit = egui::Button::new("Quit")
                        .shortcut_text(ctx.format_shortcut(&QUIT_SHORTCUT));
                    if ui.add(quit).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                self.central.menus(ui);

                ui.menu_button("View", |ui| {
                    if self.panels.is_empty() {
                        ui.label("No panels");
                    }
                    for panel in &mut self.panels {
                        ui.checkbox(&mut panel.visible, &panel.title);
                    }
                });

                ui.menu_button("Help", |ui| {
                    let about = egui::Button::new("About")
                        .shortcut_text(ctx.format_shortcut(&ABOUT_SHORTCUT));
                    if ui.add(about).clicked() {
                        self.about.open = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the bottom status bar.
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let message = self.current_status();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(message.unwrap_or_default());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!(
                        "{} {}",
                        self.metadata.name, self.metadata.version
                    ));
                });
            });
        });
    }

    fn save_geometry(&self) {
        if let Some(geometry) = &self.geometry {
            settings::save(self.metadata.name, GEOMETRY_FILE, geometry);
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Run a main window as the application, restoring its saved geometry.
pub fn run(window: MainWindow) -> eframe::Result<()> {
    let title = window.title.clone();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(&title)
        .with_min_inner_size([640.0, 480.0])
        .with_app_id(window.metadata.name);

    match settings::load::<WindowGeometry>(window.metadata.name, GEOMETRY_FILE) {
        Some(geometry) => {
            viewport = viewport.with_inner_size(geometry.size);
            if let Some(position) = geometry.position {
                viewport = viewport.with_position(position);
            }
        }
        None => {
            viewport = viewport.with_inner_size([1024.0, 768.0]);
        }
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(window) as Box<dyn eframe::App>)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    fn sample_metadata() -> PackageMetadata {
        PackageMetadata {
            name: "demoapp",
            version: "0.3.1",
            description: "A demo application",
            homepage: "",
            license: "BSD-2-Clause",
            authors: "Jane Doe <jane@example.org>",
        }
    }

    fn sample_window() -> MainWindow {
        MainWindow::new(
            sample_metadata(),
            Box::new(|ui: &mut egui::Ui| {
                ui.label("central");
            }),
        )
    }

    #[test]
    fn test_geometry_roundtrip() {
        let geometry = WindowGeometry {
            position: Some([100.0, 50.0]),
            size: [800.0, 600.0],
        };
        let json = serde_json::to_string(&geometry).unwrap();
        let restored: WindowGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geometry, restored);
    }

    #[test]
    fn test_status_message_expires() {
        let mut window = sample_window();
        window.show_message("Busy", Some(Duration::ZERO));
        assert!(window.current_status().is_none());
    }

    #[test]
    fn test_status_message_without_timeout_stays() {
        let mut window = sample_window();
        window.show_message("Connected", None);
        assert_eq!(window.current_status().as_deref(), Some("Connected"));
        assert_eq!(window.current_status().as_deref(), Some("Connected"));
    }

    #[test]
    fn test_starts_with_ready_message() {
        let mut window = sample_window();
        assert_eq!(window.current_status().as_deref(), Some("Ready"));
    }

    #[test]
    fn test_side_panels_start_visible() {
        let window = sample_window().with_side_panel(
            "Files",
            Box::new(|ui: &mut egui::Ui| {
                ui.label("panel");
            }),
        );
        assert_eq!(window.panels.len(), 1);
        assert!(window.panels[0].visible);
        assert_eq!(window.panels[0].title, "Files");
    }

    #[test]
    fn test_window_renders_headless() {
        let mut harness = Harness::new();
        let mut window = sample_window().with_side_panel(
            "Files",
            Box::new(|ui: &mut egui::Ui| {
                ui.label("panel");
            }),
        );
        harness.run_frames(2, |ctx| window.ui(ctx));
    }
}
