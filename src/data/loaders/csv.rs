// csv.rs - CSV pedigree loader

use crate::data::loaders::{parse_parent_cell, parse_trait_cell, resolve_columns};
use crate::data::pedigree::{Pedigree, PersonRecord};
use std::path::Path;

impl Pedigree {
    /// Load a comma-separated pedigree file with name, mother, father and
    /// trait columns
    pub fn from_csv(file_path: &Path, missing_char: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| format!("Failed to read CSV file: {}", e))?;

        let mut lines = content.lines();
        let header_line = lines.next().ok_or("Empty CSV file")?;
        let header_parts: Vec<&str> = header_line.split(',').collect();
        let [name_col, mother_col, father_col, trait_col] = resolve_columns(&header_parts)?;

        let mut records = Vec::new();
        for (line_num, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != header_parts.len() {
                return Err(format!(
                    "CSV line {} has {} columns, expected {}",
                    line_num + 2,
                    parts.len(),
                    header_parts.len()
                ));
            }

            let name = parts[name_col].trim().trim_matches('"').to_string();
            if name.is_empty() {
                return Err(format!("CSV line {} has an empty name", line_num + 2));
            }
            let evidence = parse_trait_cell(parts[trait_col], missing_char).map_err(|e| {
                format!("Invalid trait for '{}' at CSV line {}: {}", name, line_num + 2, e)
            })?;

            records.push(PersonRecord {
                name,
                mother: parse_parent_cell(parts[mother_col], missing_char),
                father: parse_parent_cell(parts[father_col], missing_char),
                evidence,
            });
        }

        let pedigree = Pedigree::from_records(&records).map_err(|e| e.to_string())?;
        println!("✅ CSV pedigree loaded: {} individuals", pedigree.len());
        Ok(pedigree)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::pedigree::{Pedigree, TraitEvidence};
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pedprob_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_family_csv() {
        let path = write_temp(
            "family.csv",
            "name,mother,father,trait\n\
             Harry,Lily,James,\n\
             James,,,1\n\
             Lily,,,0\n",
        );
        let pedigree = Pedigree::from_csv(&path, "-").unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(pedigree.len(), 3);
        let harry = &pedigree.people()[0];
        assert_eq!(harry.name(), "Harry");
        assert_eq!(harry.parents(), Some((2, 1)));
        assert_eq!(harry.evidence(), TraitEvidence::Unknown);
        assert_eq!(pedigree.people()[1].evidence(), TraitEvidence::Present);
        assert_eq!(pedigree.people()[2].evidence(), TraitEvidence::Absent);
    }

    #[test]
    fn test_dangling_parent_surfaces_as_load_error() {
        let path = write_temp(
            "dangling.csv",
            "name,mother,father,trait\nHarry,Lily,James,\n",
        );
        let err = Pedigree::from_csv(&path, "-").unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.contains("unknown parent"));
    }

    #[test]
    fn test_ragged_line_rejected() {
        let path = write_temp("ragged.csv", "name,mother,father,trait\nHarry,,\n");
        let err = Pedigree::from_csv(&path, "-").unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.contains("columns"));
    }
}
