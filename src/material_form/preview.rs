//! CPU-shaded sphere preview, refreshed from the form's "edited" events.

use eframe::egui::{self, Color32, ColorImage};
use glam::Vec3;

use crate::material::Material;

const PREVIEW_SIZE: usize = 240;
const SPHERE_RADIUS: f32 = 0.9;
const CHECKER_CELL: usize = 24;

/// Shows the material applied to a Blinn-Phong sphere over a checker
/// background so alpha is visible.
pub struct MaterialPreviewPanel {
    material: Material,
    image: ColorImage,
    texture: Option<egui::TextureHandle>,
    image_changed: bool,
    background_rgb: [f32; 3],
}

impl MaterialPreviewPanel {
    pub fn new(material: &Material) -> Self {
        let background_rgb = [0.35, 0.35, 0.38];
        Self {
            material: material.clone(),
            image: render_sphere(material, background_rgb),
            texture: None,
            image_changed: false,
            background_rgb,
        }
    }

    /// Re-shades the sphere with an updated material.
    pub fn refresh(&mut self, material: &Material) {
        self.material = material.clone();
        self.rerender();
    }

    fn rerender(&mut self) {
        self.image = render_sphere(&self.material, self.background_rgb);
        self.image_changed = true;
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Preview")
            .default_open(true)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Background");
                    if ui.color_edit_button_rgb(&mut self.background_rgb).changed() {
                        self.rerender();
                    }
                });

                self.update_texture(ui);
                if let Some(texture) = &self.texture {
                    let width = ui.available_width().min(PREVIEW_SIZE as f32);
                    let image = egui::Image::new(texture)
                        .fit_to_exact_size(egui::vec2(width, width));
                    ui.add(image);
                }
            });
    }

    fn update_texture(&mut self, ui: &mut egui::Ui) {
        if self.texture.is_none() {
            let handle = ui.ctx().load_texture(
                "material_preview",
                self.image.clone(),
                egui::TextureOptions::LINEAR,
            );
            self.texture = Some(handle);
            return;
        }

        if self.image_changed {
            if let Some(texture) = &mut self.texture {
                texture.set(self.image.clone(), egui::TextureOptions::LINEAR);
            }
            self.image_changed = false;
        }
    }
}

/// Shades one frame of the preview sphere.
fn render_sphere(material: &Material, background_rgb: [f32; 3]) -> ColorImage {
    let mut image = ColorImage::new([PREVIEW_SIZE, PREVIEW_SIZE], Color32::BLACK);
    let light = Vec3::new(-0.4, 0.5, 1.0).normalize();
    let view = Vec3::Z;
    let half = (light + view).normalize();
    let background = Vec3::from_array(background_rgb);

    for y in 0..PREVIEW_SIZE {
        for x in 0..PREVIEW_SIZE {
            let backdrop = checker(x, y, background);
            // Image y grows downward; flip so the light comes from above.
            let px = (x as f32 + 0.5) / PREVIEW_SIZE as f32 * 2.0 - 1.0;
            let py = 1.0 - (y as f32 + 0.5) / PREVIEW_SIZE as f32 * 2.0;

            let rr = SPHERE_RADIUS * SPHERE_RADIUS - px * px - py * py;
            let shaded = if rr > 0.0 {
                let normal = Vec3::new(px, py, rr.sqrt()).normalize();
                let lambert = normal.dot(light).max(0.0);
                let highlight = normal.dot(half).max(0.0).powf(material.shininess.max(1.0));
                let lit = material.ambient
                    + material.diffuse * lambert
                    + material.specular * highlight;
                let lit = lit.clamp(Vec3::ZERO, Vec3::ONE);
                lit * material.alpha + backdrop * (1.0 - material.alpha)
            } else {
                backdrop
            };

            image.pixels[y * PREVIEW_SIZE + x] = to_color32(shaded);
        }
    }

    image
}

fn checker(x: usize, y: usize, background: Vec3) -> Vec3 {
    if (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0 {
        background
    } else {
        background * 0.8
    }
}

fn to_color32(color: Vec3) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(color.x), channel(color.y), channel(color.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKGROUND: [f32; 3] = [0.35, 0.35, 0.38];

    fn pixel(image: &ColorImage, x: usize, y: usize) -> Color32 {
        image.pixels[y * PREVIEW_SIZE + x]
    }

    #[test]
    fn lit_center_is_brighter_than_corner() {
        let image = render_sphere(&Material::default(), BACKGROUND);
        let center = pixel(&image, PREVIEW_SIZE / 2, PREVIEW_SIZE / 2);
        let corner = pixel(&image, 2, PREVIEW_SIZE - 2);
        assert!(center.r() as u32 + center.g() as u32 + center.b() as u32
            > corner.r() as u32 + corner.g() as u32 + corner.b() as u32);
    }

    #[test]
    fn zero_alpha_shows_the_backdrop_through_the_sphere() {
        let mut material = Material::default();
        material.alpha = 0.0;
        let image = render_sphere(&material, BACKGROUND);
        let x = PREVIEW_SIZE / 2;
        let y = PREVIEW_SIZE / 2;
        assert_eq!(pixel(&image, x, y), to_color32(checker(x, y, Vec3::from_array(BACKGROUND))));
    }
}
