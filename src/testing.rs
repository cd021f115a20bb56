//! Helpers for testing egui widgets without a window.
//!
//! Widgets should be tested like every other code, but driving a GUI from a
//! test usually involves faking user interaction. egui can run entirely
//! headless, so a test only needs a context, a way to queue input events
//! and a loop running the UI closure for a few frames. [`Harness`] bundles
//! exactly that, keeping the actual test code short and readable.
//!
//! ```no_run
//! use eguibricks::testing::Harness;
//!
//! let mut harness = Harness::new();
//! harness.enter_text("42");
//! harness.run(|ctx| {
//!     egui::CentralPanel::default().show(ctx, |ui| {
//!         // widget under test
//!         let _ = ui;
//!     });
//! });
//! ```

/// Headless driver for egui UIs.
///
/// Events queued via the helper methods are delivered with the next call to
/// [`run`](Self::run). The context persists across frames, so focus and
/// other widget state behave as in a real application.
pub struct Harness {
    ctx: egui::Context,
    events: Vec<egui::Event>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            events: Vec::new(),
        }
    }

    /// The underlying context, e.g. for inspecting memory or style.
    pub fn ctx(&self) -> &egui::Context {
        &self.ctx
    }

    /// Queue text input, delivered to the focused widget.
    pub fn type_text(&mut self, text: &str) {
        self.events.push(egui::Event::Text(text.to_string()));
    }

    /// Queue a key press and release.
    pub fn press_key(&mut self, key: egui::Key) {
        self.press_key_with(key, egui::Modifiers::NONE);
    }

    /// Queue a key press and release with modifiers held.
    pub fn press_key_with(&mut self, key: egui::Key, modifiers: egui::Modifiers) {
        self.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });
        self.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: false,
            repeat: false,
            modifiers,
        });
    }

    /// Queue replacing the content of the focused line edit.
    ///
    /// Entering text into a line edit is a three-step process: clear the
    /// current text (here: select all), enter the new text, and press
    /// Return so the widget commits. This helper takes care of all three.
    pub fn enter_text(&mut self, text: &str) {
        self.press_key_with(egui::Key::A, egui::Modifiers::COMMAND);
        self.type_text(text);
        self.press_key(egui::Key::Enter);
    }

    /// Run one frame of the given UI, delivering all queued events.
    pub fn run(&mut self, ui_fn: impl FnMut(&egui::Context)) -> egui::FullOutput {
        let mut input = egui::RawInput::default();
        input.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(800.0, 600.0),
        ));
        input.events = std::mem::take(&mut self.events);
        self.ctx.run(input, ui_fn)
    }

    /// Run several frames, e.g. to let focus and commit handling settle.
    pub fn run_frames(&mut self, frames: usize, mut ui_fn: impl FnMut(&egui::Context)) {
        for _ in 0..frames {
            self.run(&mut ui_fn);
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_events_are_delivered_once() {
        let mut harness = Harness::new();
        harness.type_text("abc");

        let mut seen = Vec::new();
        harness.run(|ctx| {
            ctx.input(|i| {
                for event in &i.events {
                    if let egui::Event::Text(text) = event {
                        seen.push(text.clone());
                    }
                }
            });
        });
        assert_eq!(seen, vec!["abc".to_string()]);

        // The queue is drained; the next frame sees no events.
        harness.run(|ctx| {
            ctx.input(|i| assert!(i.events.is_empty()));
        });
    }

    #[test]
    fn test_enter_text_ends_with_return() {
        let mut harness = Harness::new();
        harness.enter_text("42");

        let mut saw_return = false;
        harness.run(|ctx| {
            ctx.input(|i| {
                saw_return = i.key_pressed(egui::Key::Enter);
            });
        });
        assert!(saw_return);
    }
}
