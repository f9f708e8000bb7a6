pub mod class_name;
pub mod type_description;

pub use class_name::{binary_name, binary_name_of_resource, internal_name, resource_name};
pub use type_description::TypeDescription;
