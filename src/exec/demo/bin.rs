use eframe::egui;
use matedit::{
    material::Material,
    material_form::{dialog::EditMaterialDialog, form::MaterialEditForm, preview::MaterialPreviewPanel},
    surface,
};

fn main() -> eframe::Result<()> {
    surface::install_default_format(surface::SurfaceFormat::default());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(960.0, 640.0))
            .with_min_inner_size(egui::vec2(640.0, 480.0)),
        ..surface::native_options()
    };

    eframe::run_native(
        "Material Edit Demo",
        options,
        Box::new(|_cc| Box::new(DemoApp::new())),
    )
}

struct DemoApp {
    form: MaterialEditForm,
    preview: MaterialPreviewPanel,
    saved: Material,
    dialog: Option<EditMaterialDialog>,
}

impl DemoApp {
    fn new() -> Self {
        let saved = starter_material();
        let mut form = MaterialEditForm::new();
        form.load(&saved);
        let preview = MaterialPreviewPanel::new(&saved);
        Self {
            form,
            preview,
            saved,
            dialog: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("material_form")
            .resizable(true)
            .min_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Material");
                if ui.button("Edit in dialog").clicked() && self.dialog.is_none() {
                    self.dialog = Some(EditMaterialDialog::new(&self.saved));
                }
                ui.separator();
                let response = self.form.show(ui);
                if response.edited {
                    self.preview.refresh(&self.form.extract());
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview.ui(ui);
        });

        if let Some(mut dialog) = self.dialog.take() {
            match dialog.show(ctx, &mut self.saved) {
                Some(outcome) => {
                    if outcome.accepted() {
                        self.form.load(&self.saved);
                        self.preview.refresh(&self.saved);
                    }
                }
                None => self.dialog = Some(dialog),
            }
        }
    }
}

fn starter_material() -> Material {
    let mut material = Material::default();
    material.name = "material/demo".to_string();
    material.diffuse = glam::Vec3::new(0.55, 0.35, 0.2);
    material.shininess = 48.0;
    material
}
