//! # moltool core
//!
//! Interactive input, formatting, and filesystem helpers shared by the
//! molecular-geometry tools.
//!
//! ## Architecture
//!
//! - **format**: padding, numeric rounding, CSV assembly
//! - **time**: date display, intervals, Unix timestamps
//! - **prompt**: validated prompt loop and path prompt loop
//! - **import**: XYZ / SABC import prompts and export-path selection
//! - **fs**: output directory creation
//! - **molecule**: file reader contracts, atom labels, program mode
//! - **console**: in-place line printing, banner text

pub mod console;
pub mod error;
pub mod format;
pub mod fs;
pub mod import;
pub mod molecule;
pub mod prompt;
pub mod time;

pub use error::{MolToolError, Result};
pub use fs::{create_new_directory, DirectoryCreation, DirectoryLayout};
pub use import::{
    exporting_path_input, sabc_file_input, xyz_file_input, xyz_files_input, ExportDecision,
    Imported,
};
pub use molecule::{Atom, ProgramMode, SabcDocument, XyzDocument, XyzFile};
pub use prompt::{Attempt, FileInputSpec, InputKind, InputRange, PromptSpec, Prompter};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
