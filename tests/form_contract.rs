use glam::Vec3;
use matedit::{EditMaterialDialog, Material, MaterialEditForm};
use rand::Rng;

fn random_color(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..=1.0),
        rng.gen_range(0.0..=1.0),
        rng.gen_range(0.0..=1.0),
    )
}

fn random_material(rng: &mut impl Rng) -> Material {
    let mut material = Material::default();
    material.name = format!("material/{}", rng.gen_range(0u32..10_000));
    material.ambient = random_color(rng);
    material.diffuse = random_color(rng);
    material.specular = random_color(rng);
    material.shininess = rng.gen_range(0.0..=128.0);
    material.alpha = rng.gen_range(0.0..=1.0);
    material.diffuse_texture = format!("texture/{}_kd", rng.gen_range(0u32..10_000));
    material.bump_texture = format!("texture/{}_bump", rng.gen_range(0u32..10_000));
    material
}

#[test]
fn random_materials_round_trip_at_slider_precision() {
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        let material = random_material(&mut rng);
        let mut form = MaterialEditForm::new();
        form.load(&material);
        let extracted = form.extract();

        assert_eq!(extracted, material.quantized());
        // Quantization is lossy by at most half a slider step.
        assert!((extracted.shininess - material.shininess).abs() <= 0.0051);
        assert!((extracted.alpha - material.alpha).abs() <= 0.5 / 255.0 + 1e-5);
    }
}

#[test]
fn caller_side_json_storage_survives_an_edit_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("material.json");

    let mut record = Material::default();
    record.name = "material/wall".to_string();
    record.diffuse_texture = "texture/wall_kd".to_string();
    std::fs::write(&path, record.to_json_string_pretty().expect("serializes"))
        .expect("writes");

    let mut dialog = EditMaterialDialog::new(&record);
    dialog.form().set_name("material/wall_worn".to_string());
    dialog.form().set_alpha(0.5);
    assert!(dialog.resolve(true, &mut record).accepted());

    std::fs::write(&path, record.to_json_string_pretty().expect("serializes"))
        .expect("writes");
    let raw = std::fs::read_to_string(&path).expect("reads");
    let loaded = Material::from_json_str(&raw).expect("parses");

    assert_eq!(loaded, record);
    assert_eq!(loaded.name, "material/wall_worn");
}

#[test]
fn cancelled_dialog_preserves_the_record_bit_for_bit() {
    let mut rng = rand::thread_rng();
    let mut record = random_material(&mut rng);
    let before = record.clone();

    let mut dialog = EditMaterialDialog::new(&record);
    dialog.form().set_shininess(3.0);
    dialog.form().set_texture(
        matedit::material::TextureSlot::Alpha,
        "texture/scratch".to_string(),
    );
    dialog.resolve(false, &mut record);

    assert_eq!(record, before);
}
