pub mod descriptor;
pub mod generate;
pub mod validate;

pub use descriptor::{element_descriptor, is_array_descriptor, normalize};
pub use generate::example;
pub use validate::validate;
