pub mod files;

pub use files::{safe_open_file, validate_file_size};
