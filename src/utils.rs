//! General helpers used by the other modules.
//!
//! Small functions that are more general than any single widget. They are
//! designed with reusability beyond this crate in mind, so applications
//! assembling their own panels can use them directly.

use std::path::{Path, PathBuf};

/// Return the full path to a named image file.
///
/// Images, such as icons, are used in several places in GUIs but are
/// usually stored in a separate directory. Resolving them through one
/// function keeps that organisation in a single place: if the image layout
/// changes, only this code needs to be adapted.
///
/// With `base_dir` set to `None`, the directory of the running executable
/// is used, which matches the common case of images shipped next to the
/// binary. Pass an explicit base directory to resolve images of another
/// package or from a development tree.
pub fn image_path(name: &str, image_dir: &str, base_dir: Option<&Path>) -> PathBuf {
    let base = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    base.join(image_dir).join(name)
}

/// Conveniently show a button with shortcut text and tooltip.
///
/// When a keyboard shortcut is given, it is rendered as the button's
/// shortcut text and appended to the tooltip, so users discover it without
/// reading documentation. Sensible tooltips go a long way towards a
/// user-friendly GUI.
pub fn show_button(
    ui: &mut egui::Ui,
    text: &str,
    shortcut: Option<&str>,
    tooltip: Option<&str>,
) -> egui::Response {
    let mut button = egui::Button::new(text);
    if let Some(shortcut) = shortcut {
        button = button.shortcut_text(shortcut);
    }
    let response = ui.add(button);
    match (tooltip, shortcut) {
        (Some(tip), Some(shortcut)) => {
            response.on_hover_text(format!("{}\nKeyboard shortcut: {}", tip, shortcut))
        }
        (Some(tip), None) => response.on_hover_text(tip),
        _ => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_with_base_dir() {
        let expected = PathBuf::from("/opt/app/images/foo.svg");
        let actual = image_path("foo.svg", "images", Some(Path::new("/opt/app")));
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_image_path_with_image_dir() {
        let expected = PathBuf::from("/opt/app/icons/foo.svg");
        let actual = image_path("foo.svg", "icons", Some(Path::new("/opt/app")));
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_image_path_without_base_dir_is_absolute_or_local() {
        let path = image_path("foo.svg", "images", None);
        assert!(path.ends_with("images/foo.svg"));
    }
}
