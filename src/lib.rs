//! Building blocks for egui GUIs, focussing on scientific applications.
//!
//! Scientific software keeps needing the same handful of widgets: a file
//! browser to pick data files, a plot panel, a main window with the usual
//! chrome, an About dialog, and input fields that keep numeric parameters
//! within their physical limits. This crate collects them as reusable
//! bricks, so GUIs can be assembled instead of re-implemented.
//!
//! The bricks:
//!
//! * [`validate`]: self-correcting bounded-integer input validation
//! * [`widgets`]: small widgets, among them the validated integer field
//! * [`filebrowser`]: directory navigation with multi file selection
//! * [`plot`]: line and scatter plots with pan, zoom and view history
//! * [`aboutdialog`]: Help-About dialog fed from package metadata
//! * [`mainwindow`]: main window scaffold with menus, status bar and
//!   geometry persistence
//! * [`settings`]: config-dir JSON persistence used by the above
//! * [`utils`]: small general helpers
//! * [`testing`]: headless harness for testing egui widgets
//!
//! See `src/bin/demo.rs` for an application assembling most of them.

pub mod aboutdialog;
pub mod filebrowser;
pub mod mainwindow;
pub mod plot;
pub mod settings;
pub mod testing;
pub mod utils;
pub mod validate;
pub mod widgets;

pub use aboutdialog::{AboutDialog, PackageMetadata};
pub use filebrowser::{FileBrowser, FileBrowserSettings};
pub use mainwindow::{Content, MainWindow};
pub use plot::{Plot, Series, SeriesKind};
pub use validate::{IntValidator, RangeError, Verdict};
pub use widgets::IntInput;
