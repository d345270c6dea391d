//! Accept/Cancel gate around the form's load/extract contract.

use eframe::egui;
use tracing::debug;

use crate::material::Material;

use super::form::MaterialEditForm;

/// How an edit dialog was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Accepted,
    Cancelled,
}

impl EditOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, EditOutcome::Accepted)
    }
}

/// A confirmation flow embedding a [`MaterialEditForm`] in a window.
///
/// The dialog owns the working copy until the user resolves it, which is how
/// a blocking modal translates to immediate mode: the caller's record is only
/// written on Accept. Cancel (button or closing the window) leaves it
/// untouched.
pub struct EditMaterialDialog {
    form: MaterialEditForm,
    open: bool,
}

impl EditMaterialDialog {
    pub fn new(material: &Material) -> Self {
        let mut form = MaterialEditForm::new();
        form.load(material);
        Self { form, open: true }
    }

    pub fn form(&mut self) -> &mut MaterialEditForm {
        &mut self.form
    }

    /// Draws the dialog. Returns the outcome once resolved, overwriting
    /// `material` with the extracted record on Accept; the caller drops the
    /// dialog at that point.
    pub fn show(&mut self, ctx: &egui::Context, material: &mut Material) -> Option<EditOutcome> {
        let mut action = None;
        egui::Window::new("Edit Material")
            .id(egui::Id::new("edit_material_dialog"))
            .open(&mut self.open)
            .collapsible(false)
            .show(ctx, |ui| {
                self.form.show(ui);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Ok").clicked() {
                        action = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(false);
                    }
                });
            });

        if action.is_none() && !self.open {
            action = Some(false);
        }
        action.map(|accepted| self.resolve(accepted, material))
    }

    /// The accept/cancel gate itself, independent of any UI context.
    pub fn resolve(&mut self, accepted: bool, material: &mut Material) -> EditOutcome {
        self.open = false;
        if accepted {
            *material = self.form.extract();
            debug!(name = %material.name, "material edit accepted");
            EditOutcome::Accepted
        } else {
            debug!("material edit cancelled");
            EditOutcome::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::material::ColorSlot;

    fn sample_material() -> Material {
        let mut material = Material::default();
        material.name = "material/floor".to_string();
        material.shininess = 12.0;
        material.alpha = 0.75;
        material.diffuse_texture = "texture/floor_kd".to_string();
        material
    }

    #[test]
    fn accept_overwrites_with_extracted_record() {
        let mut record = sample_material();
        let mut dialog = EditMaterialDialog::new(&record);
        dialog.form().set_color(ColorSlot::Diffuse, Vec3::splat(0.2));
        dialog.form().set_shininess(64.0);

        let expected = {
            let mut probe = EditMaterialDialog::new(&record);
            probe.form().set_color(ColorSlot::Diffuse, Vec3::splat(0.2));
            probe.form().set_shininess(64.0);
            probe.form().extract()
        };

        let outcome = dialog.resolve(true, &mut record);
        assert!(outcome.accepted());
        assert_eq!(record, expected);
        assert_eq!(record.diffuse, Vec3::splat(0.2));
        assert_eq!(record.shininess, 64.0);
    }

    #[test]
    fn cancel_leaves_record_untouched() {
        let mut record = sample_material();
        let before = record.clone();

        let mut dialog = EditMaterialDialog::new(&record);
        dialog.form().set_name("scratch".to_string());
        dialog.form().set_alpha(0.1);

        let outcome = dialog.resolve(false, &mut record);
        assert_eq!(outcome, EditOutcome::Cancelled);
        assert_eq!(record, before);
    }
}
