mod field_group;
mod preset_tip;
mod tip_choice;

pub use field_group::FieldGroup;
pub use preset_tip::PresetTip;
pub use tip_choice::TipChoice;
