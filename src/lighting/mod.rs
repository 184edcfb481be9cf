pub mod color_temperature;

pub use color_temperature::temperature_to_rgb;
