mod conformity;
mod designation;

pub use conformity::ConformityCommands;
pub use designation::DesignationCommands;
