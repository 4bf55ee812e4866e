// mod.rs - Pedigree file loaders

pub mod csv;
pub mod tsv;

use crate::data::pedigree::{Pedigree, TraitEvidence};
use std::path::Path;

impl Pedigree {
    /// Load a pedigree file, dispatching on the file extension
    pub fn from_file(file_path: &Path, missing_char: &str) -> Result<Self, String> {
        println!("📊 Loading pedigree: {}", file_path.display());
        let extension = file_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("csv");
        match extension {
            "tsv" => Self::from_tsv(file_path, missing_char),
            _ => Self::from_csv(file_path, missing_char),
        }
    }
}

/// Locate the `name`, `mother`, `father` and `trait` columns, in any order
pub(crate) fn resolve_columns(header_parts: &[&str]) -> Result<[usize; 4], String> {
    const COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];
    let mut resolved = [usize::MAX; 4];
    for (i, part) in header_parts.iter().enumerate() {
        let cleaned = part.trim().trim_matches('"');
        if let Some(slot) = COLUMNS.iter().position(|c| *c == cleaned) {
            resolved[slot] = i;
        }
    }
    for (slot, column) in resolved.iter().zip(COLUMNS) {
        if *slot == usize::MAX {
            return Err(format!("Header is missing the '{}' column", column));
        }
    }
    Ok(resolved)
}

/// Parse one trait cell: `1`/`true` observed present, `0`/`false` observed
/// absent; blank, `NA` or the configured missing marker mean unobserved.
pub(crate) fn parse_trait_cell(s: &str, missing_char: &str) -> Result<TraitEvidence, String> {
    let cleaned = s.trim().trim_matches('"');
    if cleaned.is_empty() || cleaned == "NA" || cleaned == missing_char {
        return Ok(TraitEvidence::Unknown);
    }
    match cleaned {
        "1" | "true" => Ok(TraitEvidence::Present),
        "0" | "false" => Ok(TraitEvidence::Absent),
        _ => Err(format!(
            "Failed to parse '{}' as trait evidence (expected 1, 0 or blank)",
            cleaned
        )),
    }
}

/// Parse one parent cell: blank or the missing marker mean no recorded parent
pub(crate) fn parse_parent_cell(s: &str, missing_char: &str) -> Option<String> {
    let cleaned = s.trim().trim_matches('"');
    if cleaned.is_empty() || cleaned == "NA" || cleaned == missing_char {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trait_cell() {
        assert_eq!(parse_trait_cell("1", "-").unwrap(), TraitEvidence::Present);
        assert_eq!(parse_trait_cell("0", "-").unwrap(), TraitEvidence::Absent);
        assert_eq!(parse_trait_cell("", "-").unwrap(), TraitEvidence::Unknown);
        assert_eq!(parse_trait_cell("-", "-").unwrap(), TraitEvidence::Unknown);
        assert_eq!(parse_trait_cell("NA", "-").unwrap(), TraitEvidence::Unknown);
        assert!(parse_trait_cell("maybe", "-").is_err());
    }

    #[test]
    fn test_parse_parent_cell() {
        assert_eq!(parse_parent_cell("Lily", "-"), Some("Lily".to_string()));
        assert_eq!(parse_parent_cell(" Lily ", "-"), Some("Lily".to_string()));
        assert_eq!(parse_parent_cell("", "-"), None);
        assert_eq!(parse_parent_cell("-", "-"), None);
    }

    #[test]
    fn test_resolve_columns_any_order() {
        let header = ["trait", "father", "name", "mother"];
        assert_eq!(resolve_columns(&header).unwrap(), [2, 3, 1, 0]);
    }

    #[test]
    fn test_resolve_columns_missing_column() {
        let header = ["name", "mother", "father"];
        assert!(resolve_columns(&header).is_err());
    }
}
