pub mod convert;
pub mod euler;

pub use convert::{convert_position, convert_rotation_euler, convert_rotation_quat, convert_scale};
