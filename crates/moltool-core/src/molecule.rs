//! Contracts for the molecular file readers the input helpers call into.
//!
//! The geometry toolkit owns the real readers. [`XyzFile`] is a minimal
//! reader of the standard XYZ layout so the helpers have something concrete
//! to load; SABC files only exist here as the [`SabcDocument`] contract.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MolToolError, Result};

/// How a structure-finding run should behave downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramMode {
    /// Check whether a known molecule passes every filter; coordinates are not re-signed.
    Test,
    /// Run with all default parameters.
    Simple,
    #[default]
    Ordinary,
}

impl FromStr for ProgramMode {
    type Err = MolToolError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "test" => Ok(ProgramMode::Test),
            "simple" => Ok(ProgramMode::Simple),
            "ordinary" => Ok(ProgramMode::Ordinary),
            other => Err(MolToolError::InvalidInput(format!(
                "Unknown program mode: {} (use test, simple or ordinary)",
                other
            ))),
        }
    }
}

impl fmt::Display for ProgramMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProgramMode::Test => "test",
            ProgramMode::Simple => "simple",
            ProgramMode::Ordinary => "ordinary",
        };
        f.write_str(name)
    }
}

/// One atom of a structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    pub position: [f64; 3],
    pub identifier: Option<usize>,
}

/// A geometry file that lists atoms.
pub trait XyzDocument: Sized {
    fn from_path(path: &Path) -> Result<Self>;

    /// `None` when the file carried no atom block at all.
    fn atoms(&self) -> Option<&[Atom]>;

    fn has_atoms(&self) -> bool {
        self.atoms().is_some_and(|atoms| !atoms.is_empty())
    }
}

/// A rotational-constant / substitution data file.
pub trait SabcDocument: Sized {
    fn from_path(path: &Path) -> Result<Self>;

    fn is_valid(&self) -> bool;

    /// Number of substitution records, `None` when the section is absent.
    fn substituted_count(&self) -> Option<usize>;
}

/// Plain XYZ reader: a count line, a comment line, then `Element x y z` lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzFile {
    pub comment: String,
    pub atoms: Option<Vec<Atom>>,
}

impl FromStr for XyzFile {
    type Err = MolToolError;

    fn from_str(contents: &str) -> Result<Self> {
        let mut lines = contents.lines();
        let count_line = match lines.by_ref().find(|line| !line.trim().is_empty()) {
            Some(line) => line.trim(),
            None => return Ok(XyzFile::default()),
        };
        let count: usize = count_line
            .parse()
            .map_err(|_| MolToolError::Parse(format!("Invalid atom count: {}", count_line)))?;
        let comment = lines.next().unwrap_or("").trim().to_string();

        let mut atoms = Vec::with_capacity(count.min(1024));
        for line in lines.filter(|line| !line.trim().is_empty()).take(count) {
            let atom = parse_atom_line(line, atoms.len())?;
            atoms.push(atom);
        }
        if atoms.len() != count {
            return Err(MolToolError::Parse(format!(
                "Expected {} atoms, found {}",
                count,
                atoms.len()
            )));
        }

        Ok(XyzFile {
            comment,
            atoms: Some(atoms),
        })
    }
}

fn parse_atom_line(line: &str, index: usize) -> Result<Atom> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(MolToolError::Parse(format!("Invalid atom line: {}", line.trim())));
    }
    let mut position = [0.0; 3];
    for (slot, field) in position.iter_mut().zip(&fields[1..4]) {
        *slot = field
            .parse()
            .map_err(|_| MolToolError::Parse(format!("Invalid coordinate: {}", field)))?;
    }
    Ok(Atom {
        name: fields[0].to_string(),
        position,
        identifier: Some(index),
    })
}

impl XyzDocument for XyzFile {
    fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "reading xyz file");
        contents.parse()
    }

    fn atoms(&self) -> Option<&[Atom]> {
        self.atoms.as_deref()
    }
}

/// Labels produced by the function from [`string_id_function`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomLabels {
    /// `{name}{mapped id + 1}`, e.g. `C1`
    pub labels: Vec<String>,
    pub ids: Vec<usize>,
    /// Indices into `labels` sorted by mapped id.
    pub order: Vec<usize>,
}

/// Build a labeller that names atoms by their mapped identifier.
///
/// Atoms without an identifier, or whose identifier is not in `id_map`, are
/// skipped.
pub fn string_id_function(id_map: HashMap<usize, usize>) -> impl Fn(&[Atom]) -> AtomLabels {
    move |atoms| {
        let mut labels = Vec::new();
        let mut ids = Vec::new();
        for atom in atoms {
            let Some(id) = atom.identifier.and_then(|key| id_map.get(&key)) else {
                continue;
            };
            labels.push(format!("{}{}", atom.name, id + 1));
            ids.push(*id);
        }
        let mut order: Vec<usize> = (0..labels.len()).collect();
        order.sort_by_key(|&index| ids[index]);
        AtomLabels { labels, ids, order }
    }
}

/// Word for how many atoms an isotopic substitution replaces at once.
pub fn depth_label(depth: usize) -> String {
    match depth {
        1 => "Single".to_string(),
        2 => "Double".to_string(),
        3 => "Triple".to_string(),
        other => format!("{}-atom", other),
    }
}
