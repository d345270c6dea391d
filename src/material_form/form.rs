//! The material edit form: a working copy of a [`Material`] bound to fields.

use eframe::egui;
use glam::Vec3;
use tracing::debug;

use crate::material::{
    ALPHA_SLIDER_MAX, ALPHA_SLIDER_SCALE, ColorSlot, Material, SHININESS_SLIDER_MAX,
    SHININESS_SLIDER_SCALE, TextureSlot, alpha_to_slider, shininess_to_slider, slider_to_alpha,
    slider_to_shininess,
};

use super::{
    color_picker::{ColorChoice, ColorPickerDialog},
    signal::EditedSignal,
};

/// Per-frame result of drawing the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormResponse {
    /// True when at least one field was committed this frame.
    pub edited: bool,
}

/// A free-text field committed on focus loss, Qt `editingFinished` style.
#[derive(Debug, Default)]
struct TextField {
    buffer: String,
    pending: bool,
}

/// Binds a material working copy to editable fields.
///
/// The form owns its working copy exclusively; the caller loads a record in
/// with [`load`](Self::load) and reads the edited record back with
/// [`extract`](Self::extract). Storage is the caller's responsibility.
/// Committed user changes fire a no-payload "edited" notification, observable
/// through [`FormResponse::edited`] or [`take_edited`](Self::take_edited),
/// which hosts typically use to drive a live preview.
pub struct MaterialEditForm {
    material: Material,
    name: TextField,
    textures: [TextField; 5],
    shininess_raw: u32,
    alpha_raw: u32,
    signal: EditedSignal,
    picker: Option<ColorPickerDialog>,
}

impl Default for MaterialEditForm {
    fn default() -> Self {
        let mut form = Self {
            material: Material::default(),
            name: TextField::default(),
            textures: Default::default(),
            shininess_raw: 0,
            alpha_raw: ALPHA_SLIDER_MAX,
            signal: EditedSignal::default(),
            picker: None,
        };
        form.load(&Material::default());
        form
    }
}

impl MaterialEditForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working copy and refreshes every field from it.
    ///
    /// Runs under a suppression guard so the bulk refresh never surfaces as
    /// an "edited" notification. Any open color picker is dropped since the
    /// value it pointed at no longer exists.
    pub fn load(&mut self, material: &Material) {
        let _guard = self.signal.suppress();
        debug!(name = %material.name, "loading material into edit form");

        self.picker = None;
        self.material = material.clone();

        self.set_name(material.name.clone());
        for slot in ColorSlot::ALL {
            self.set_color(slot, slot.get(material));
        }
        self.set_shininess(material.shininess);
        self.set_alpha(material.alpha);
        for slot in TextureSlot::ALL {
            self.set_texture(slot, slot.get(material).to_string());
        }
    }

    /// Reads all editable fields back into the working copy and returns it.
    ///
    /// Pending (uncommitted) text buffers are committed; the form itself is
    /// left as-is and no notification fires.
    pub fn extract(&mut self) -> Material {
        self.material.name = self.name.buffer.clone();
        self.name.pending = false;

        for slot in TextureSlot::ALL {
            let field = &mut self.textures[slot as usize];
            field.pending = false;
            let value = field.buffer.clone();
            slot.set(&mut self.material, value);
        }

        self.material.shininess = slider_to_shininess(self.shininess_raw);
        self.material.alpha = slider_to_alpha(self.alpha_raw);

        debug!(name = %self.material.name, "extracting material from edit form");
        self.material.clone()
    }

    /// Number of "edited" notifications fired since the last call, draining
    /// the count. [`show`](Self::show) also drains it into its response.
    pub fn take_edited(&self) -> u32 {
        self.signal.take()
    }

    pub fn set_name(&mut self, name: String) {
        self.name.buffer = name.clone();
        self.name.pending = false;
        self.material.name = name;
        self.signal.emit();
    }

    /// Commits a channel triple, clamped to [0, 1] per channel.
    pub fn set_color(&mut self, slot: ColorSlot, color: Vec3) {
        slot.set(&mut self.material, color);
        self.signal.emit();
    }

    pub fn color(&self, slot: ColorSlot) -> Vec3 {
        slot.get(&self.material)
    }

    /// Commits shininess, clamped to [0, 128] and quantized to 1/100.
    pub fn set_shininess(&mut self, value: f32) {
        self.shininess_raw = shininess_to_slider(value);
        self.material.shininess = slider_to_shininess(self.shininess_raw);
        self.signal.emit();
    }

    /// Commits alpha, clamped to [0, 1] and quantized to 1/255.
    pub fn set_alpha(&mut self, value: f32) {
        self.alpha_raw = alpha_to_slider(value);
        self.material.alpha = slider_to_alpha(self.alpha_raw);
        self.signal.emit();
    }

    pub fn set_texture(&mut self, slot: TextureSlot, value: String) {
        let field = &mut self.textures[slot as usize];
        field.buffer = value.clone();
        field.pending = false;
        slot.set(&mut self.material, value);
        self.signal.emit();
    }

    pub fn open_color_picker(&mut self, slot: ColorSlot) {
        self.picker = Some(ColorPickerDialog::new(slot, slot.get(&self.material)));
    }

    pub fn color_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Applies a resolved color choice; a cancel leaves the triple untouched
    /// and fires nothing.
    pub fn apply_color_choice(&mut self, slot: ColorSlot, choice: ColorChoice) {
        match choice {
            ColorChoice::Confirmed(color) => self.set_color(slot, color),
            ColorChoice::Cancelled => {}
        }
    }

    /// Draws the form into `ui` and reports whether anything was committed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> FormResponse {
        ui.label("Name");
        let response = ui.text_edit_singleline(&mut self.name.buffer);
        if response.changed() {
            self.name.pending = true;
        }
        if response.lost_focus() && self.name.pending {
            let name = self.name.buffer.clone();
            self.set_name(name);
        }

        ui.separator();
        ui.label("Colors");
        ui.horizontal(|ui| {
            for slot in ColorSlot::ALL {
                let swatch = color32(slot.get(&self.material));
                if ui.add(egui::Button::new(slot.label()).fill(swatch)).clicked() {
                    self.open_color_picker(slot);
                }
            }
        });

        ui.separator();
        ui.label("Shininess and alpha");
        let response = ui.add(
            egui::Slider::new(&mut self.shininess_raw, 0..=SHININESS_SLIDER_MAX)
                .text("Shininess")
                .custom_formatter(|raw, _| format!("{:.2}", raw / SHININESS_SLIDER_SCALE as f64)),
        );
        if response.changed() {
            self.material.shininess = slider_to_shininess(self.shininess_raw);
            self.signal.emit();
        }
        let response = ui.add(
            egui::Slider::new(&mut self.alpha_raw, 0..=ALPHA_SLIDER_MAX)
                .text("Alpha")
                .custom_formatter(|raw, _| format!("{:.3}", raw / ALPHA_SLIDER_SCALE as f64)),
        );
        if response.changed() {
            self.material.alpha = slider_to_alpha(self.alpha_raw);
            self.signal.emit();
        }

        ui.separator();
        for slot in TextureSlot::ALL {
            ui.label(slot.label());
            ui.horizontal(|ui| {
                let index = slot as usize;
                let response = ui.text_edit_singleline(&mut self.textures[index].buffer);
                if response.changed() {
                    self.textures[index].pending = true;
                }
                if response.lost_focus() && self.textures[index].pending {
                    let value = self.textures[index].buffer.clone();
                    self.set_texture(slot, value);
                }
                if ui.button("Browse").clicked() {
                    if let Some(path) = rfd::FileDialog::new().pick_file() {
                        self.set_texture(slot, path.display().to_string());
                    }
                }
            });
        }

        self.show_color_picker(ui.ctx());

        FormResponse {
            edited: self.signal.take() > 0,
        }
    }

    fn show_color_picker(&mut self, ctx: &egui::Context) {
        if let Some(mut dialog) = self.picker.take() {
            match dialog.show(ctx) {
                Some(choice) => {
                    let slot = dialog.slot();
                    self.apply_color_choice(slot, choice);
                }
                None => self.picker = Some(dialog),
            }
        }
    }
}

fn color32(color: Vec3) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(color.x), channel(color.y), channel(color.z))
}
