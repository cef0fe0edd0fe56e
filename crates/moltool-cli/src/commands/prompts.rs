use moltool_core::format::{srounded, string_with_space, RoundOption};
use moltool_core::{
    exporting_path_input, xyz_file_input, xyz_files_input, Atom, ExportDecision, InputKind,
    InputRange, MolToolError, PromptSpec, Prompter, XyzDocument, XyzFile,
};

use crate::cli::{ExportPathArgs, InputArgs};
use crate::config::MolToolConfig;

pub fn handle_input(args: &InputArgs, config: &MolToolConfig) -> anyhow::Result<()> {
    let kind: InputKind = args.kind.parse().unwrap_or_default();
    let mut spec = PromptSpec::new(&args.name, kind).with_echo(args.echo || config.ui.echo);
    if let Some(default) = &args.default {
        spec = spec.with_default(default);
    }
    if let (Some(min), Some(max)) = (&args.min, &args.max) {
        if let Some(range) = parse_range(kind, min, max)? {
            spec = spec.with_range(range);
        }
    }

    let mut prompter = Prompter::stdio();
    let value = prompter.input(&spec)?;
    println!("{}", value);
    Ok(())
}

/// Bounds for `kind`; `None` for string prompts, which have no range.
fn parse_range(
    kind: InputKind,
    min: &str,
    max: &str,
) -> Result<Option<InputRange>, MolToolError> {
    let invalid = |bound: &str| MolToolError::InvalidInput(format!("Invalid bound: {}", bound));
    match kind {
        InputKind::String => {
            tracing::debug!("range ignored for string input");
            Ok(None)
        }
        InputKind::Int => {
            let low: i64 = min.trim().parse().map_err(|_| invalid(min))?;
            let high: i64 = max.trim().parse().map_err(|_| invalid(max))?;
            Ok(Some(InputRange::int(low, high)?))
        }
        InputKind::Double => {
            let low: f64 = min.trim().parse().map_err(|_| invalid(min))?;
            let high: f64 = max.trim().parse().map_err(|_| invalid(max))?;
            Ok(Some(InputRange::double(low, high)?))
        }
    }
}

pub fn handle_import_xyz(config: &MolToolConfig) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    let imported = xyz_file_input::<XyzFile, _, _>(&mut prompter)?;
    let atoms = imported.file.atoms().unwrap_or_default();

    println!("{}: {} atoms", imported.name, atoms.len());
    for atom in atoms {
        println!("{}", atom_row(atom, config.output.digits));
    }
    Ok(())
}

pub fn handle_import_xyz_dir() -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    let imported = xyz_files_input::<XyzFile, _, _>(&mut prompter)?;

    let width = imported
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);
    for item in &imported {
        let count = item.file.atoms().map(|atoms| atoms.len()).unwrap_or(0);
        println!("{}  {} atoms", string_with_space(&item.name, width, true), count);
    }
    Ok(())
}

pub fn handle_export_path(args: &ExportPathArgs) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    match exporting_path_input(&mut prompter, &args.name, !args.required)? {
        ExportDecision::Skip => println!("save=false"),
        ExportDecision::SaveTo(path) => println!("save=true path={}", path.display()),
    }
    Ok(())
}

/// `Element  x  y  z` with right-aligned coordinates.
fn atom_row(atom: &Atom, digits: usize) -> String {
    let coords: Vec<String> = atom
        .position
        .iter()
        .map(|value| string_with_space(&srounded(*value, digits, RoundOption::Fixed), 12, false))
        .collect();
    format!("{}{}", string_with_space(&atom.name, 4, true), coords.join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_by_kind() {
        assert_eq!(
            parse_range(InputKind::Int, "-3", "5").unwrap(),
            Some(InputRange::Int(-3..=5))
        );
        assert_eq!(
            parse_range(InputKind::Double, "0", "1.5").unwrap(),
            Some(InputRange::Double(0.0..=1.5))
        );
        assert_eq!(parse_range(InputKind::String, "a", "b").unwrap(), None);
        assert!(parse_range(InputKind::Int, "1.5", "3").is_err());
    }

    #[test]
    fn test_parse_range_rejects_unsatisfiable_bounds() {
        assert!(matches!(
            parse_range(InputKind::Int, "5", "1"),
            Err(MolToolError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_range(InputKind::Double, "nan", "1"),
            Err(MolToolError::InvalidInput(_))
        ));
        assert!(parse_range(InputKind::Double, "2.5", "-2.5").is_err());
    }

    #[test]
    fn test_atom_row() {
        let atom = Atom {
            name: "O".to_string(),
            position: [0.0, -0.7572, 12.5],
            identifier: Some(0),
        };
        assert_eq!(
            atom_row(&atom, 3),
            "O          0.000      -0.757      12.500"
        );
    }
}
