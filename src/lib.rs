pub mod material;
pub mod material_form;
pub mod surface;

pub use material::Material;
pub use material_form::dialog::{EditMaterialDialog, EditOutcome};
pub use material_form::form::MaterialEditForm;
