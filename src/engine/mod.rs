// Batch engine - preset listing, file enumeration, tool invocation

mod encode;
mod error;
mod scan;
mod tool;

pub use encode::{derive_output_path, encode_file};
pub use error::EncodeError;
pub use scan::enumerate_files;
pub use tool::{DEFAULT_TOOL_PATH, HandBrake, TOOL_ENV_VAR, parse_preset_list};
