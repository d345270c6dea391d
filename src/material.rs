//! The material record edited by the GUI form.
//!
//! A [`Material`] is a flat description of surface appearance consumed by a
//! renderer: three color triples, a shininess exponent, an opacity, and five
//! opaque texture path/key strings. Texture strings are not validated here;
//! resolving them is the owning renderer/asset system's concern. The crate
//! never persists a material itself — the serde helpers exist so callers can.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Shininess slider backing store upper bound (128.0 * 100).
pub const SHININESS_SLIDER_MAX: u32 = 12_800;
/// Shininess is stored on the slider scaled by 100 for 1/100 granularity.
pub const SHININESS_SLIDER_SCALE: f32 = 100.0;
/// Alpha slider backing store upper bound (8-bit).
pub const ALPHA_SLIDER_MAX: u32 = 255;
/// Alpha is stored on the slider scaled by 255.
pub const ALPHA_SLIDER_SCALE: f32 = 255.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,

    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,

    /// Specular exponent, 0.0..=128.0.
    pub shininess: f32,
    /// Opacity, 0.0..=1.0.
    pub alpha: f32,

    pub ambient_texture: String,
    pub diffuse_texture: String,
    pub specular_texture: String,
    pub alpha_texture: String,
    pub bump_texture: String,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(1.0),
            shininess: 32.0,
            alpha: 1.0,
            ambient_texture: String::new(),
            diffuse_texture: String::new(),
            specular_texture: String::new(),
            alpha_texture: String::new(),
            bump_texture: String::new(),
        }
    }
}

impl Material {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The record snapped to the precision the edit form can represent:
    /// shininess to 1/100, alpha to 1/255. Every other field is untouched.
    pub fn quantized(&self) -> Self {
        let mut out = self.clone();
        out.shininess = slider_to_shininess(shininess_to_slider(self.shininess));
        out.alpha = slider_to_alpha(alpha_to_slider(self.alpha));
        out
    }
}

/// Color channels addressed by the form's three color buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Ambient,
    Diffuse,
    Specular,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 3] = [ColorSlot::Ambient, ColorSlot::Diffuse, ColorSlot::Specular];

    pub fn label(&self) -> &'static str {
        match self {
            ColorSlot::Ambient => "Ambient",
            ColorSlot::Diffuse => "Diffuse",
            ColorSlot::Specular => "Specular",
        }
    }

    pub fn get(&self, material: &Material) -> Vec3 {
        match self {
            ColorSlot::Ambient => material.ambient,
            ColorSlot::Diffuse => material.diffuse,
            ColorSlot::Specular => material.specular,
        }
    }

    pub fn set(&self, material: &mut Material, color: Vec3) {
        let slot = match self {
            ColorSlot::Ambient => &mut material.ambient,
            ColorSlot::Diffuse => &mut material.diffuse,
            ColorSlot::Specular => &mut material.specular,
        };
        *slot = clamp_color(color);
    }
}

/// Texture reference strings addressed by the form's five path fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    Ambient,
    Diffuse,
    Specular,
    Alpha,
    Bump,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 5] = [
        TextureSlot::Ambient,
        TextureSlot::Diffuse,
        TextureSlot::Specular,
        TextureSlot::Alpha,
        TextureSlot::Bump,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextureSlot::Ambient => "Ambient texture",
            TextureSlot::Diffuse => "Diffuse texture",
            TextureSlot::Specular => "Specular texture",
            TextureSlot::Alpha => "Alpha texture",
            TextureSlot::Bump => "Bump texture",
        }
    }

    pub fn get<'a>(&self, material: &'a Material) -> &'a str {
        match self {
            TextureSlot::Ambient => &material.ambient_texture,
            TextureSlot::Diffuse => &material.diffuse_texture,
            TextureSlot::Specular => &material.specular_texture,
            TextureSlot::Alpha => &material.alpha_texture,
            TextureSlot::Bump => &material.bump_texture,
        }
    }

    pub fn set(&self, material: &mut Material, value: String) {
        let slot = match self {
            TextureSlot::Ambient => &mut material.ambient_texture,
            TextureSlot::Diffuse => &mut material.diffuse_texture,
            TextureSlot::Specular => &mut material.specular_texture,
            TextureSlot::Alpha => &mut material.alpha_texture,
            TextureSlot::Bump => &mut material.bump_texture,
        };
        *slot = value;
    }
}

pub fn clamp_color(color: Vec3) -> Vec3 {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Maps shininess onto its integer backing store, clamping out-of-range input.
pub fn shininess_to_slider(value: f32) -> u32 {
    let scaled = (value * SHININESS_SLIDER_SCALE).round();
    scaled.clamp(0.0, SHININESS_SLIDER_MAX as f32) as u32
}

pub fn slider_to_shininess(raw: u32) -> f32 {
    raw.min(SHININESS_SLIDER_MAX) as f32 / SHININESS_SLIDER_SCALE
}

/// Maps alpha onto its 8-bit backing store, clamping out-of-range input.
pub fn alpha_to_slider(value: f32) -> u32 {
    let scaled = (value * ALPHA_SLIDER_SCALE).round();
    scaled.clamp(0.0, ALPHA_SLIDER_MAX as f32) as u32
}

pub fn slider_to_alpha(raw: u32) -> f32 {
    raw.min(ALPHA_SLIDER_MAX) as f32 / ALPHA_SLIDER_SCALE
}
