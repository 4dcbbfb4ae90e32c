pub mod charset;
pub mod error;
pub mod loader;
