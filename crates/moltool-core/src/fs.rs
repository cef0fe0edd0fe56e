//! Filesystem utilities for output directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Paths produced by [`create_new_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLayout {
    pub root: PathBuf,
    /// One entry per requested subdirectory, in request order.
    pub subdirectories: Vec<PathBuf>,
}

/// Outcome of [`create_new_directory`].
#[derive(Debug)]
pub enum DirectoryCreation {
    /// Every directory was created.
    Complete(DirectoryLayout),
    /// Creation stopped at `error`.
    ///
    /// `fallback.root` is the base path. Its subdirectory list holds the
    /// ones created before the failure, padded with copies of the base path
    /// to the requested length.
    Degraded {
        fallback: DirectoryLayout,
        error: io::Error,
    },
}

impl DirectoryCreation {
    pub fn is_complete(&self) -> bool {
        matches!(self, DirectoryCreation::Complete(_))
    }

    /// The paths to write into, whether or not creation finished.
    pub fn layout(&self) -> &DirectoryLayout {
        match self {
            DirectoryCreation::Complete(layout) => layout,
            DirectoryCreation::Degraded { fallback, .. } => fallback,
        }
    }

    /// Treat a degraded result as an error.
    pub fn into_result(self) -> io::Result<DirectoryLayout> {
        match self {
            DirectoryCreation::Complete(layout) => Ok(layout),
            DirectoryCreation::Degraded { error, .. } => Err(error),
        }
    }
}

/// Create `base/name` and then each `base/name/<sub>` in order.
///
/// With `intermediate` set, missing parents are created and existing
/// directories are not an error. Without it, the target must not exist yet.
/// On the first failure the error is logged and a
/// [`DirectoryCreation::Degraded`] result falls back to `base`.
pub fn create_new_directory<S: AsRef<str>>(
    name: &str,
    subdirectories: &[S],
    base: &Path,
    intermediate: bool,
) -> DirectoryCreation {
    let root = base.join(name);
    let mut created = Vec::with_capacity(subdirectories.len());

    let result = make_dir(&root, intermediate).and_then(|()| {
        for sub in subdirectories {
            let path = root.join(sub.as_ref());
            make_dir(&path, intermediate)?;
            created.push(path);
        }
        Ok(())
    });

    match result {
        Ok(()) => {
            tracing::debug!(root = %root.display(), count = created.len(), "created directories");
            DirectoryCreation::Complete(DirectoryLayout {
                root,
                subdirectories: created,
            })
        }
        Err(error) => {
            tracing::warn!(
                root = %root.display(),
                error = %error,
                "An error occurred when creating a new directory"
            );
            created.resize(subdirectories.len(), base.to_path_buf());
            DirectoryCreation::Degraded {
                fallback: DirectoryLayout {
                    root: base.to_path_buf(),
                    subdirectories: created,
                },
                error,
            }
        }
    }
}

fn make_dir(path: &Path, intermediate: bool) -> io::Result<()> {
    if intermediate {
        fs::create_dir_all(path)
    } else {
        fs::create_dir(path)
    }
}
