pub mod library;
pub mod resolver;

pub use library::AssetLibrary;
pub use resolver::AssetResolver;
