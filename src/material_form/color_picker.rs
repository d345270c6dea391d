//! Color chooser window backing the form's three color buttons.

use eframe::egui;
use glam::Vec3;

use crate::material::ColorSlot;

/// Outcome of a color chooser interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorChoice {
    Confirmed(Vec3),
    Cancelled,
}

/// A color dialog for one channel triple.
///
/// The pending value stays private to the dialog until Select confirms it, so
/// cancelling (the button or closing the window) never touches the material.
pub struct ColorPickerDialog {
    slot: ColorSlot,
    pending: [f32; 3],
    open: bool,
}

impl ColorPickerDialog {
    pub fn new(slot: ColorSlot, initial: Vec3) -> Self {
        Self {
            slot,
            pending: initial.to_array(),
            open: true,
        }
    }

    pub fn slot(&self) -> ColorSlot {
        self.slot
    }

    /// Draws the window and reports the choice once the user resolves it.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ColorChoice> {
        let mut choice = None;
        egui::Window::new(format!("Select {} Color", self.slot.label()))
            .id(egui::Id::new("material_color_picker"))
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.color_edit_button_rgb(&mut self.pending);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Select").clicked() {
                        choice = Some(ColorChoice::Confirmed(Vec3::from_array(self.pending)));
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(ColorChoice::Cancelled);
                    }
                });
            });

        // Closing the window counts as a cancel.
        if choice.is_none() && !self.open {
            choice = Some(ColorChoice::Cancelled);
        }
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_value_starts_at_initial() {
        let dialog = ColorPickerDialog::new(ColorSlot::Diffuse, Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(dialog.slot(), ColorSlot::Diffuse);
        assert_eq!(dialog.pending, [0.25, 0.5, 0.75]);
    }
}
