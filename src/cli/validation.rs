// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::CptConfig;
use crate::output::OutputFormat;
use std::str::FromStr;

pub struct ValidationResult {
    pub format: OutputFormat,
}

/// Validate all command line arguments and the effective probability tables
pub fn validate_args(args: &Args, cpt: &CptConfig) -> Result<ValidationResult, String> {
    let format = OutputFormat::from_str(&args.format)?;

    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err("Thread count must be at least 1".to_string());
        }
    }

    // f64 carries at most 17 significant decimal digits
    if args.precision > 17 {
        return Err("Precision must be between 0 and 17".to_string());
    }

    if args.missing_char.is_empty() {
        return Err("Missing data character must not be empty".to_string());
    }

    cpt.validate()?;

    Ok(ValidationResult { format })
}
