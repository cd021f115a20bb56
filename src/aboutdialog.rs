//! Help-About dialog for main application windows.
//!
//! Typically, every GUI has a "Help About" dialog displaying some
//! information regarding the application, such as its name and version
//! number, website, licence, authors and debug information. The dialog is
//! as self-contained as possible: everything it shows comes from the
//! package metadata Cargo already knows, captured at compile time with the
//! [`package_metadata!`](crate::package_metadata) macro.
//!
//! ```no_run
//! use eguibricks::aboutdialog::AboutDialog;
//!
//! let mut about = AboutDialog::new(eguibricks::package_metadata!());
//! # let ctx = egui::Context::default();
//! about.open = true;
//! about.show(&ctx);
//! ```
//!
//! Note that the macro has to be invoked in the *application* crate, not in
//! a library, as it captures the metadata of the crate it expands in.

/// Package metadata shown in the About dialog.
///
/// Usually filled by [`package_metadata!`](crate::package_metadata); fill
/// the fields by hand for values that do not come from the manifest.
#[derive(Debug, Clone, Copy)]
pub struct PackageMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    /// Website shown on the About tab; empty hides the link.
    pub homepage: &'static str,
    pub license: &'static str,
    /// Cargo's colon-separated authors list.
    pub authors: &'static str,
}

/// Capture the expanding crate's package metadata at compile time.
#[macro_export]
macro_rules! package_metadata {
    () => {
        $crate::aboutdialog::PackageMetadata {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
            authors: env!("CARGO_PKG_AUTHORS"),
        }
    };
}

impl PackageMetadata {
    /// Individual author entries, e.g. `Jane Doe <jane@example.org>`.
    pub fn author_list(&self) -> Vec<&'static str> {
        self.authors
            .split(':')
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .collect()
    }

    /// First email address found in the authors list, for the contact line.
    pub fn contact_email(&self) -> Option<&'static str> {
        self.authors.split(':').find_map(|author| {
            let start = author.find('<')?;
            let end = author.find('>')?;
            (start + 1 < end).then(|| author[start + 1..end].trim())
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    About,
    Authors,
    DebugInfo,
}

/// Typical "Help About" dialog of a GUI application's main window.
///
/// Set [`open`](Self::open) to `true` to show the dialog and call
/// [`show`](Self::show) every frame; the window's close button resets the
/// flag. [`crate::mainwindow::MainWindow`] wires this up on Help > About.
pub struct AboutDialog {
    /// Whether the dialog is currently shown.
    pub open: bool,
    metadata: PackageMetadata,
    tab: Tab,
}

impl AboutDialog {
    pub fn new(metadata: PackageMetadata) -> Self {
        Self {
            open: false,
            metadata,
            tab: Tab::About,
        }
    }

    /// Render the dialog window while it is open.
    pub fn show(&mut self, ctx: &egui::Context) {
        let metadata = self.metadata;
        let mut tab = self.tab;

        egui::Window::new(format!("About {}", metadata.name))
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.heading(metadata.name);
                ui.label(format!("Version {}", metadata.version));
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.selectable_value(&mut tab, Tab::About, "About");
                    ui.selectable_value(&mut tab, Tab::Authors, "Authors");
                    ui.selectable_value(&mut tab, Tab::DebugInfo, "Debug info");
                });
                ui.separator();

                match tab {
                    Tab::About => Self::about_tab(ui, &metadata),
                    Tab::Authors => Self::authors_tab(ui, &metadata),
                    Tab::DebugInfo => Self::debug_info_tab(ui, &metadata),
                }
            });

        self.tab = tab;
    }

    fn about_tab(ui: &mut egui::Ui, metadata: &PackageMetadata) {
        if !metadata.description.is_empty() {
            ui.label(egui::RichText::new(metadata.description).italics());
            ui.add_space(6.0);
        }
        if !metadata.homepage.is_empty() {
            ui.horizontal(|ui| {
                ui.label("Website:");
                ui.hyperlink_to(metadata.homepage, metadata.homepage)
                    .on_hover_text(format!(
                        "Open {} in your preferred browser (if configured).",
                        metadata.homepage
                    ));
            });
            ui.add_space(6.0);
        }
        ui.label(license_text(metadata));
    }

    fn authors_tab(ui: &mut egui::Ui, metadata: &PackageMetadata) {
        ui.label(format!(
            "The following people contributed to {}:",
            metadata.name
        ));
        ui.add_space(4.0);
        for author in metadata.author_list() {
            // Strip the email part; it has its own contact line below.
            let name = author.split('<').next().unwrap_or(author).trim();
            ui.label(format!("  • {}", name));
        }
        if let Some(email) = metadata.contact_email() {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.label("You may contact the authors or maintainer(s) at:");
                ui.hyperlink_to(email, format!("mailto:{}", email))
                    .on_hover_text(format!(
                        "Send email to {} using your preferred email client (if configured).",
                        email
                    ));
            });
        }
        ui.add_space(6.0);
        ui.separator();
        ui.label(license_text(metadata));
    }

    fn debug_info_tab(ui: &mut egui::Ui, metadata: &PackageMetadata) {
        ui.monospace(format!("{} {}", metadata.name, metadata.version));
        ui.add_space(4.0);
        ui.monospace(format!("OS: {}", std::env::consts::OS));
        ui.monospace(format!("CPU architecture: {}", std::env::consts::ARCH));
        ui.monospace(format!("Build: {}", build_profile()));
        ui.add_space(4.0);
        ui.monospace(format!(
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
    }
}

fn license_text(metadata: &PackageMetadata) -> String {
    format!(
        "License: {} is free software: you can redistribute it and/or \
         modify it under the terms of the {} license.",
        metadata.name, metadata.license
    )
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> PackageMetadata {
        PackageMetadata {
            name: "demoapp",
            version: "0.3.1",
            description: "A demo application",
            homepage: "https://example.org/demoapp",
            license: "BSD-2-Clause",
            authors: "Jane Doe <jane@example.org>:John Doe",
        }
    }

    #[test]
    fn test_author_list_splits_cargo_convention() {
        let metadata = sample_metadata();
        assert_eq!(
            metadata.author_list(),
            vec!["Jane Doe <jane@example.org>", "John Doe"]
        );
    }

    #[test]
    fn test_author_list_of_empty_authors_is_empty() {
        let mut metadata = sample_metadata();
        metadata.authors = "";
        assert!(metadata.author_list().is_empty());
    }

    #[test]
    fn test_contact_email_is_first_email() {
        let metadata = sample_metadata();
        assert_eq!(metadata.contact_email(), Some("jane@example.org"));
    }

    #[test]
    fn test_contact_email_absent() {
        let mut metadata = sample_metadata();
        metadata.authors = "Jane Doe:John Doe";
        assert_eq!(metadata.contact_email(), None);
    }

    #[test]
    fn test_license_text_names_package_and_license() {
        let text = license_text(&sample_metadata());
        assert!(text.contains("demoapp"));
        assert!(text.contains("BSD-2-Clause"));
    }

    #[test]
    fn test_dialog_renders_while_open() {
        let mut harness = crate::testing::Harness::new();
        let mut dialog = AboutDialog::new(sample_metadata());
        dialog.open = true;
        harness.run(|ctx| dialog.show(ctx));
        assert!(dialog.open);
    }
}
