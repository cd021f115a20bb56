//! Small widgets for general use in egui GUIs.
//!
//! A number of small widgets can be built with a few lines from existing
//! egui primitives, but it is convenient to have them in one place:
//!
//! * [`IntInput`]: a line edit restricted to a bounded integer, correcting
//!   out-of-range input on commit instead of rejecting it
//! * [`hline`] / [`vline`]: one-dimensional separators for layouts
//! * [`uncheckable_toggle_group`]: an exclusive toggle row whose selected
//!   entry can be clicked again to deselect it

use crate::validate::{IntValidator, RangeError, Verdict};

/// What happened to an [`IntInput`] during this frame.
pub struct IntInputResponse {
    /// The value committed this frame (focus loss or Return), if any.
    ///
    /// The committed value has already been corrected into range; the
    /// field's text shows exactly this value.
    pub committed: Option<i64>,
    /// Response of the underlying text edit.
    pub response: egui::Response,
}

/// Line edit restricted to an integer within a closed range.
///
/// While typing, edits are only rejected when the text could never become a
/// valid integer (letters, repeated signs). Overshooting the range is
/// allowed mid-edit; once editing ends, the text is corrected to the
/// nearest boundary. The field therefore always ends up holding an
/// in-range number, without fighting the user along the way.
///
/// ```no_run
/// # use eguibricks::widgets::IntInput;
/// # fn ui(ui: &mut egui::Ui, scans: &mut IntInput) {
/// if let Some(count) = scans.show(ui).committed {
///     println!("number of scans: {}", count);
/// }
/// # }
/// ```
pub struct IntInput {
    validator: IntValidator,
    /// Edit buffer bound to the text edit.
    buffer: String,
    /// Last buffer content that was not rejected; edits revert to this.
    last_good: String,
    /// Value of the last commit.
    value: i64,
    desired_width: f32,
}

impl IntInput {
    /// Create an input field for the closed range `[bottom, top]`.
    ///
    /// The field starts out holding `bottom`. Fails if `bottom > top`.
    pub fn new(bottom: i64, top: i64) -> Result<Self, RangeError> {
        let validator = IntValidator::new(bottom, top)?;
        let value = validator.bottom();
        Ok(Self {
            validator,
            buffer: value.to_string(),
            last_good: value.to_string(),
            value,
            desired_width: 80.0,
        })
    }

    /// Set the initial value, corrected into range.
    pub fn with_value(mut self, value: i64) -> Self {
        self.set_value(value);
        self
    }

    /// Set the width of the text edit.
    pub fn with_width(mut self, width: f32) -> Self {
        self.desired_width = width;
        self
    }

    /// The value of the last commit.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Set the value programmatically, corrected into range.
    pub fn set_value(&mut self, value: i64) {
        self.value = self.validator.fixup(&value.to_string());
        self.buffer = self.value.to_string();
        self.last_good = self.buffer.clone();
    }

    /// Commit the current buffer as if editing had ended.
    ///
    /// Applies the same correction as focus loss and returns the value.
    pub fn commit(&mut self) -> i64 {
        self.value = self.validator.fixup(&self.buffer);
        self.buffer = self.value.to_string();
        self.last_good = self.buffer.clone();
        self.value
    }

    /// Show the field, reverting invalid edits and committing on focus loss.
    pub fn show(&mut self, ui: &mut egui::Ui) -> IntInputResponse {
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.buffer).desired_width(self.desired_width),
        );

        if response.changed() {
            if self.validator.validate(&self.buffer) == Verdict::Invalid {
                // Reject the edit by reverting to the last viable text.
                self.buffer = self.last_good.clone();
            } else {
                self.last_good = self.buffer.clone();
            }
        }

        let mut committed = None;
        if response.lost_focus() {
            committed = Some(self.commit());
        }

        IntInputResponse {
            committed,
            response,
        }
    }
}

/// Horizontal line for egui layouts.
///
/// Sometimes there is the need to add a horizontal line to a layout, for
/// instance to visually separate groups of controls within a grid.
pub fn hline(ui: &mut egui::Ui) -> egui::Response {
    ui.add(egui::Separator::default().horizontal())
}

/// Vertical line for egui layouts.
///
/// The counterpart of [`hline`] for horizontal layouts.
pub fn vline(ui: &mut egui::Ui) -> egui::Response {
    ui.add(egui::Separator::default().vertical())
}

/// Exclusive toggle row that allows all buttons to be unchecked.
///
/// By default an exclusive group only lets the user move the selection to
/// another button once one has been checked. Here, clicking the selected
/// button again clears the selection. Returns `true` if the selection
/// changed this frame.
pub fn uncheckable_toggle_group(
    ui: &mut egui::Ui,
    selected: &mut Option<usize>,
    labels: &[&str],
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for (index, label) in labels.iter().enumerate() {
            let is_selected = *selected == Some(index);
            if ui.selectable_label(is_selected, *label).clicked() {
                *selected = if is_selected { None } else { Some(index) };
                changed = true;
            }
        }
    });
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    #[test]
    fn test_int_input_starts_at_bottom() {
        let input = IntInput::new(-10, 10).unwrap();
        assert_eq!(input.value(), -10);
    }

    #[test]
    fn test_int_input_rejects_reversed_range() {
        assert!(IntInput::new(10, -10).is_err());
    }

    #[test]
    fn test_with_value_corrects_into_range() {
        let input = IntInput::new(0, 50).unwrap().with_value(100);
        assert_eq!(input.value(), 50);
    }

    #[test]
    fn test_commit_corrects_buffer() {
        let mut input = IntInput::new(0, 5).unwrap();
        input.buffer = "9".to_string();
        assert_eq!(input.commit(), 5);
        assert_eq!(input.buffer, "5");
        // Committing again is a no-op.
        assert_eq!(input.commit(), 5);
    }

    #[test]
    fn test_commit_of_garbage_falls_back_to_bottom() {
        let mut input = IntInput::new(-10, 10).unwrap();
        input.buffer = String::new();
        assert_eq!(input.commit(), -10);
    }

    #[test]
    fn test_typed_overshoot_is_corrected_on_return() {
        let mut harness = Harness::new();
        let mut input = IntInput::new(0, 50).unwrap();
        let mut committed = None;

        // First frame lays out the field and focuses it.
        harness.run(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                input.show(ui).response.request_focus();
            });
        });

        // Replace the text with an overshooting value and press Return.
        harness.enter_text("99");
        for _ in 0..3 {
            harness.run(|ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(value) = input.show(ui).committed {
                        committed = Some(value);
                    }
                });
            });
        }

        assert_eq!(committed, Some(50));
        assert_eq!(input.value(), 50);
        assert_eq!(input.buffer, "50");
    }

    #[test]
    fn test_typed_garbage_is_reverted() {
        let mut harness = Harness::new();
        let mut input = IntInput::new(0, 50).unwrap().with_value(7);

        harness.run(|ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                input.show(ui).response.request_focus();
            });
        });

        // A letter can never become a valid integer, so the edit reverts.
        harness.type_text("a");
        for _ in 0..2 {
            harness.run(|ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    input.show(ui);
                });
            });
        }

        assert_eq!(input.buffer, "7");
    }
}
