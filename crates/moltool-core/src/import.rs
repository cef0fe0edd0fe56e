//! Packed prompts for importing structure files and choosing output paths.
//!
//! Each helper is a [`Prompter::file_input`] loop with a format-specific
//! action. Reader errors are printed and the user is asked again.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::molecule::{SabcDocument, XyzDocument};
use crate::prompt::{Attempt, FileInputSpec, Prompter};

/// A loaded file and its short name (file name without extension).
#[derive(Debug, Clone, PartialEq)]
pub struct Imported<T> {
    pub file: T,
    pub name: String,
}

/// Where results should be written, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDecision {
    Skip,
    SaveTo(PathBuf),
}

impl ExportDecision {
    pub fn should_save(&self) -> bool {
        matches!(self, ExportDecision::SaveTo(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportDecision::Skip => None,
            ExportDecision::SaveTo(path) => Some(path),
        }
    }
}

/// Short name for a path: the last component without its extension.
pub fn path_component_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Ask for one `.xyz` file until it loads with at least one atom.
pub fn xyz_file_input<X, R, W>(prompter: &mut Prompter<R, W>) -> Result<Imported<X>>
where
    X: XyzDocument,
    R: BufRead,
    W: Write,
{
    prompter.file_input(&FileInputSpec::new("XYZ file"), |_, path| {
        let path = Path::new(path);
        let file = X::from_path(path)?;
        if !file.has_atoms() {
            return Ok(Attempt::RejectWith(
                "No Atoms in xyz file. Can not proceed.".to_string(),
            ));
        }
        Ok(Attempt::Accept(Imported {
            file,
            name: path_component_name(path),
        }))
    })
}

/// Ask for a directory until it holds at least one `.xyz` file with atoms.
///
/// Files are read in file-name order. Files without atoms are skipped; a
/// file that fails to parse sends the user back to the prompt.
pub fn xyz_files_input<X, R, W>(prompter: &mut Prompter<R, W>) -> Result<Vec<Imported<X>>>
where
    X: XyzDocument,
    R: BufRead,
    W: Write,
{
    let spec = FileInputSpec::new("XYZ files")
        .with_message("the directory path for XYZ files")
        .with_success_message(false);

    prompter.file_input(&spec, |prompter, path| {
        let directory = Path::new(path);
        if !directory.is_dir() {
            return Ok(Attempt::RejectWith(
                "Not a valid directory. Please try again.".to_string(),
            ));
        }

        let mut xyz_paths = match list_xyz_files(directory) {
            Ok(paths) => paths,
            Err(err) => {
                tracing::warn!(path = %directory.display(), error = %err, "directory listing failed");
                return Ok(Attempt::RejectWith(
                    "Error in reading files in the directory".to_string(),
                ));
            }
        };
        xyz_paths.sort();

        let mut imported = Vec::new();
        for xyz_path in xyz_paths {
            let file = X::from_path(&xyz_path)?;
            if !file.has_atoms() {
                tracing::debug!(path = %xyz_path.display(), "skipping xyz file without atoms");
                continue;
            }
            imported.push(Imported {
                file,
                name: path_component_name(&xyz_path),
            });
        }

        if imported.is_empty() {
            return Ok(Attempt::RejectWith(
                "Can't find any valid xyz files in the directory. Can not proceed.".to_string(),
            ));
        }
        prompter.say(&format!("Found {} valid xyz files.", imported.len()))?;
        Ok(Attempt::Accept(imported))
    })
}

fn list_xyz_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "xyz") {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Ask for a SABC file until it is valid and carries substitution data.
pub fn sabc_file_input<S, R, W>(prompter: &mut Prompter<R, W>) -> Result<Imported<S>>
where
    S: SabcDocument,
    R: BufRead,
    W: Write,
{
    prompter.file_input(&FileInputSpec::new("SABC file"), |_, path| {
        let path = Path::new(path);
        let file = S::from_path(path)?;
        if !file.is_valid() {
            return Ok(Attempt::RejectWith("Not a valid SABC file.".to_string()));
        }
        if file.substituted_count().unwrap_or(0) == 0 {
            return Ok(Attempt::RejectWith("No SIS information.".to_string()));
        }
        Ok(Attempt::Accept(Imported {
            file,
            name: path_component_name(path),
        }))
    })
}

/// Ask where results should be exported.
///
/// When `optional` is set an empty answer means "do not save".
pub fn exporting_path_input<R, W>(
    prompter: &mut Prompter<R, W>,
    name: &str,
    optional: bool,
) -> Result<ExportDecision>
where
    R: BufRead,
    W: Write,
{
    let suffix = if optional {
        " (leave empty if not to save)"
    } else {
        ""
    };
    let message = format!("{} exporting Path{}", name, suffix);
    let spec = FileInputSpec::new(name)
        .with_message(message.trim_start())
        .with_success_message(false);

    prompter.file_input(&spec, |prompter, path| {
        if path.is_empty() {
            if optional {
                prompter.say("The results will not be saved.")?;
                return Ok(Attempt::Accept(ExportDecision::Skip));
            }
            return Ok(Attempt::RejectWith(
                "The directory path can not be empty.".to_string(),
            ));
        }

        let directory = PathBuf::from(path);
        if !directory.is_dir() {
            return Ok(Attempt::RejectWith(
                "Not a valid directory. Please try again.".to_string(),
            ));
        }
        prompter.say(&format!("The result will be saved in {}.", directory.display()))?;
        Ok(Attempt::Accept(ExportDecision::SaveTo(directory)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_component_name() {
        assert_eq!(path_component_name(Path::new("/data/benzene.xyz")), "benzene");
        assert_eq!(path_component_name(Path::new("run.v2.sabc")), "run.v2");
        assert_eq!(path_component_name(Path::new("/")), "");
    }

    #[test]
    fn test_list_xyz_files_keeps_only_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("he.xyz"), "1\n\nHe 0 0 0\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.xyz")).unwrap();

        let paths = list_xyz_files(dir.path()).unwrap();
        assert_eq!(paths, vec![dir.path().join("he.xyz")]);
    }

    #[test]
    fn test_list_xyz_files_reports_unreadable_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_xyz_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_export_decision_accessors() {
        assert!(!ExportDecision::Skip.should_save());
        assert_eq!(ExportDecision::Skip.path(), None);
        let save = ExportDecision::SaveTo(PathBuf::from("/tmp"));
        assert!(save.should_save());
        assert_eq!(save.path(), Some(Path::new("/tmp")));
    }
}
