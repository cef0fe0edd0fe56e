//! Command handlers, one module per family.

mod dirs;
mod misc;
mod prompts;
mod text;

pub use dirs::handle_mkdir;
pub use misc::handle_completions;
pub use prompts::{handle_export_path, handle_import_xyz, handle_import_xyz_dir, handle_input};
pub use text::{handle_csv, handle_depth, handle_now, handle_pad, handle_round, handle_stamp};
