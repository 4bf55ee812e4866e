// tsv.rs - TSV pedigree loader

use crate::data::loaders::{parse_parent_cell, parse_trait_cell, resolve_columns};
use crate::data::pedigree::{Pedigree, PersonRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl Pedigree {
    /// Load a tab-separated pedigree file with name, mother, father and
    /// trait columns
    pub fn from_tsv(file_path: &Path, missing_char: &str) -> Result<Self, String> {
        let file = File::open(file_path).map_err(|e| format!("Failed to open TSV file: {}", e))?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or("Empty TSV file")?
            .map_err(|e| format!("Failed to read header: {}", e))?;
        let header_parts: Vec<&str> = header_line.split('\t').collect();
        let [name_col, mother_col, father_col, trait_col] = resolve_columns(&header_parts)?;

        let mut records = Vec::new();
        for (line_num, line) in lines.enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 2, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() != header_parts.len() {
                return Err(format!(
                    "TSV line {} has {} columns, expected {}",
                    line_num + 2,
                    parts.len(),
                    header_parts.len()
                ));
            }

            let name = parts[name_col].trim().to_string();
            if name.is_empty() {
                return Err(format!("TSV line {} has an empty name", line_num + 2));
            }
            let evidence = parse_trait_cell(parts[trait_col], missing_char).map_err(|e| {
                format!("Invalid trait for '{}' at TSV line {}: {}", name, line_num + 2, e)
            })?;

            records.push(PersonRecord {
                name,
                mother: parse_parent_cell(parts[mother_col], missing_char),
                father: parse_parent_cell(parts[father_col], missing_char),
                evidence,
            });
        }

        let pedigree = Pedigree::from_records(&records).map_err(|e| e.to_string())?;
        println!("✅ TSV pedigree loaded: {} individuals", pedigree.len());
        Ok(pedigree)
    }
}
