//! File browser widget for selecting (multiple) files from a directory.
//!
//! Sometimes we need a convenient file browser widget displaying a
//! directory and allowing both to navigate the directory hierarchy and to
//! select (multiple) files. All we are usually interested in are the full
//! paths of the selected files, to further operate on that information.
//!
//! On top of the listing itself, the widget provides the controls users
//! expect: buttons for home, back, up and forward, and a line edit showing
//! the current directory. The edit accepts input as well and stays in sync
//! with the listing; entering a non-existing directory simply reverts the
//! edit to the last valid path.
//!
//! Only files can be selected, never directories. Ctrl-click toggles a
//! file in the selection, Shift-click selects a range, and double-clicking
//! a directory makes it the new root.

use std::path::{Path, PathBuf};

/// Display and selection settings for the file listing.
#[derive(Debug, Clone)]
pub struct FileBrowserSettings {
    /// Wildcard patterns for the files to offer, e.g. `*.csv`.
    ///
    /// An empty list offers every file. Directories are never filtered, as
    /// they are needed for navigation.
    pub filters: Vec<String>,
    /// Whether filtered-out files are still shown (greyed out).
    ///
    /// Showing them disabled is the default, making clear that files exist
    /// but are not eligible. Set to `false` to hide them entirely.
    pub filter_disables: bool,
}

impl Default for FileBrowserSettings {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            filter_disables: true,
        }
    }
}

/// What happened inside a [`FileBrowser`] during this frame.
#[derive(Debug, Default)]
pub struct FileBrowserResponse {
    /// New selection, present whenever the selection changed this frame.
    ///
    /// Full paths, in the order the files were selected.
    pub selection_changed: Option<Vec<PathBuf>>,
    /// New root directory, present when the user navigated this frame.
    pub root_changed: Option<PathBuf>,
}

/// One row of the listing.
#[derive(Debug, Clone)]
struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    /// Whether the entry passes the name filters (directories always do).
    enabled: bool,
}

/// File browser widget for selecting (multiple) files from a directory.
///
/// See the [module documentation](self) for the interaction model. The
/// current selection is also available at any time via
/// [`selection`](Self::selection).
pub struct FileBrowser {
    root_path: PathBuf,
    /// Buffer of the current-directory line edit.
    path_edit: String,
    previous_path: Option<PathBuf>,
    next_path: Option<PathBuf>,
    selection: Vec<PathBuf>,
    settings: FileBrowserSettings,
    entries: Vec<Entry>,
    needs_reload: bool,
    /// Index of the last plainly clicked file, the start of a Shift range.
    anchor: Option<usize>,
}

impl FileBrowser {
    /// Create a file browser rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root_path = root.into();
        Self {
            path_edit: root_path.display().to_string(),
            root_path,
            previous_path: None,
            next_path: None,
            selection: Vec::new(),
            settings: FileBrowserSettings::default(),
            entries: Vec::new(),
            needs_reload: true,
            anchor: None,
        }
    }

    /// Replace the display and selection settings.
    pub fn set_settings(&mut self, settings: FileBrowserSettings) {
        self.settings = settings;
        self.refilter();
    }

    /// The current root directory.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Full paths of the currently selected files, in selection order.
    pub fn selection(&self) -> &[PathBuf] {
        &self.selection
    }

    // ─── Navigation ──────────────────────────────────────────────────────

    /// Make `path` the new root directory.
    ///
    /// The previous root becomes the target of the back button. Setting
    /// the current root again is a no-op.
    pub fn set_root_path(&mut self, path: impl Into<PathBuf>) {
        let mut path = path.into();
        if path == self.root_path {
            return;
        }
        // Normalise away trailing separators so the line edit shows the
        // same text the history stores.
        let text = path.to_string_lossy();
        if text.len() > 1 && text.ends_with(std::path::MAIN_SEPARATOR) {
            let trimmed = text
                .trim_end_matches(std::path::MAIN_SEPARATOR)
                .to_string();
            path = PathBuf::from(trimmed);
        }
        self.previous_path = Some(std::mem::replace(&mut self.root_path, path));
        self.path_edit = self.root_path.display().to_string();
        self.needs_reload = true;
        self.anchor = None;
    }

    /// Go to the parent of the current root, if there is one.
    pub fn go_up(&mut self) {
        if let Some(parent) = self.root_path.parent().map(Path::to_path_buf) {
            self.set_root_path(parent);
        }
    }

    /// Go to the user's home directory.
    pub fn go_home(&mut self) {
        if let Some(home) = dirs::home_dir() {
            self.set_root_path(home);
        }
    }

    /// Go back to the previous root directory.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.previous_path.take() {
            self.next_path = Some(self.root_path.clone());
            self.set_root_path(previous);
        }
    }

    /// Revert going back to the previous root directory.
    pub fn go_forward(&mut self) {
        if let Some(next) = self.next_path.take() {
            self.set_root_path(next);
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.previous_path.is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.next_path.is_some()
    }

    /// Apply the path typed into the line edit.
    ///
    /// Existing directories become the new root; anything else reverts the
    /// edit to the current root.
    fn commit_path_edit(&mut self) -> Option<PathBuf> {
        let typed = PathBuf::from(self.path_edit.trim());
        if typed.is_dir() {
            if typed != self.root_path {
                self.set_root_path(typed);
                return Some(self.root_path.clone());
            }
        } else {
            self.path_edit = self.root_path.display().to_string();
        }
        None
    }

    // ─── Listing ─────────────────────────────────────────────────────────

    /// Re-read the root directory into the cached listing.
    ///
    /// Directories sort first, then case-insensitively by name. Dot files
    /// are skipped. A directory that cannot be read lists as empty.
    fn reload(&mut self) {
        self.needs_reload = false;
        self.entries.clear();

        let read_dir = match std::fs::read_dir(&self.root_path) {
            Ok(read_dir) => read_dir,
            Err(err) => {
                log::warn!("Cannot list {}: {}", self.root_path.display(), err);
                return;
            }
        };

        for dir_entry in read_dir.flatten() {
            let path = dir_entry.path();
            let name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            if name.starts_with('.') {
                continue;
            }
            let is_dir = dir_entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            self.entries.push(Entry {
                path,
                name,
                is_dir,
                enabled: true,
            });
        }

        self.entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        self.refilter();
    }

    /// Recompute which entries pass the name filters.
    fn refilter(&mut self) {
        for entry in &mut self.entries {
            entry.enabled = entry.is_dir
                || self.settings.filters.is_empty()
                || self
                    .settings
                    .filters
                    .iter()
                    .any(|filter| name_matches(filter, &entry.name));
        }
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Handle a click on the file at `index`.
    ///
    /// Plain click selects just this file, Ctrl toggles it, Shift selects
    /// the range from the last plainly clicked file. Returns whether the
    /// selection changed.
    fn click_file(&mut self, index: usize, ctrl: bool, shift: bool) -> bool {
        let path = self.entries[index].path.clone();
        let before = self.selection.clone();

        if shift && self.anchor.is_some() {
            let anchor = self.anchor.unwrap();
            let (from, to) = if anchor <= index {
                (anchor, index)
            } else {
                (index, anchor)
            };
            if !ctrl {
                self.selection.clear();
            }
            for i in from..=to {
                let entry = &self.entries[i];
                if !entry.is_dir && entry.enabled && !self.selection.contains(&entry.path) {
                    self.selection.push(entry.path.clone());
                }
            }
        } else if ctrl {
            if let Some(pos) = self.selection.iter().position(|p| *p == path) {
                self.selection.remove(pos);
            } else {
                self.selection.push(path);
            }
            self.anchor = Some(index);
        } else {
            self.selection = vec![path];
            self.anchor = Some(index);
        }

        self.selection != before
    }

    // ─── UI ──────────────────────────────────────────────────────────────

    /// Show the browser; controls on top, the listing below.
    pub fn show(&mut self, ui: &mut egui::Ui) -> FileBrowserResponse {
        let mut response = FileBrowserResponse::default();

        if self.needs_reload {
            self.reload();
        }

        let root_before = self.root_path.clone();
        let mut selection_changed = false;

        ui.horizontal(|ui| {
            if crate::utils::show_button(
                ui,
                "Home",
                None,
                Some("Go to the home directory of the current user"),
            )
            .clicked()
            {
                self.go_home();
            }
            ui.add_enabled_ui(self.can_go_back(), |ui| {
                if crate::utils::show_button(
                    ui,
                    "←",
                    None,
                    Some("Go back to the previous directory"),
                )
                .clicked()
                {
                    self.go_back();
                }
            });
            if crate::utils::show_button(
                ui,
                "↑",
                None,
                Some("Go one directory up in the hierarchy"),
            )
            .clicked()
            {
                self.go_up();
            }
            ui.add_enabled_ui(self.can_go_forward(), |ui| {
                if crate::utils::show_button(
                    ui,
                    "→",
                    None,
                    Some("Revert going back to the previous directory"),
                )
                .clicked()
                {
                    self.go_forward();
                }
            });

            let edit = ui.add_sized(
                [ui.available_width(), ui.spacing().interact_size.y],
                egui::TextEdit::singleline(&mut self.path_edit),
            );
            let edit = edit.on_hover_text(
                "Display/edit the current (root) directory.\n\
                 Only existing directories will be accepted as user input.",
            );
            if edit.lost_focus() {
                self.commit_path_edit();
            }
        });

        // Clicks are collected first and applied after the listing is
        // drawn, to keep the entries borrow and &mut self apart.
        let mut clicked_file: Option<(usize, bool, bool)> = None;
        let mut entered_dir: Option<PathBuf> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let modifiers = ui.input(|i| i.modifiers);
                for (index, entry) in self.entries.iter().enumerate() {
                    if entry.is_dir {
                        let label = egui::RichText::new(format!("{}/", entry.name)).strong();
                        let row = ui.selectable_label(false, label);
                        if row.double_clicked() {
                            entered_dir = Some(entry.path.clone());
                        }
                    } else if entry.enabled {
                        let selected = self.selection.contains(&entry.path);
                        let row = ui.selectable_label(selected, &entry.name);
                        if row.clicked() {
                            clicked_file =
                                Some((index, modifiers.command, modifiers.shift));
                        }
                    } else if self.settings.filter_disables {
                        ui.add_enabled(
                            false,
                            egui::SelectableLabel::new(
                                false,
                                egui::RichText::new(&entry.name).weak(),
                            ),
                        );
                    }
                }
            });

        if let Some((index, ctrl, shift)) = clicked_file {
            selection_changed = self.click_file(index, ctrl, shift);
        }
        if let Some(dir) = entered_dir {
            self.set_root_path(dir);
        }

        if self.root_path != root_before {
            response.root_changed = Some(self.root_path.clone());
        }
        if selection_changed {
            response.selection_changed = Some(self.selection.clone());
        }
        response
    }
}

/// Simple name matching with wildcards.
///
/// Supports:
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - Plain strings: exact match or substring match
pub fn name_matches(pattern: &str, name: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    if !pattern.contains('*') && !pattern.contains('?') {
        return name == pattern || name.contains(pattern);
    }

    // Glob matching via dynamic programming over pattern and name.
    let pattern_bytes = pattern.as_bytes();
    let name_bytes = name.as_bytes();
    let m = pattern_bytes.len();
    let n = name_bytes.len();

    let mut dp = vec![vec![false; n + 1]; m + 1];
    dp[0][0] = true;

    for i in 1..=m {
        if pattern_bytes[i - 1] == b'*' {
            dp[i][0] = dp[i - 1][0];
        }
    }

    for i in 1..=m {
        for j in 1..=n {
            if pattern_bytes[i - 1] == b'*' {
                dp[i][j] = dp[i - 1][j] || dp[i][j - 1];
            } else if pattern_bytes[i - 1] == b'?' || pattern_bytes[i - 1] == name_bytes[j - 1] {
                dp[i][j] = dp[i - 1][j - 1];
            }
        }
    }

    dp[m][n]
}
