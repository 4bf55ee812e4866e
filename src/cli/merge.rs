// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file.
    /// CLI arguments take precedence over config file values.
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.pedigree.is_none() {
            self.pedigree = config.pedigree;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.format == "tsv" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }
        if self.missing_char == "-" {
            if let Some(missing_char) = config.missing_char {
                self.missing_char = missing_char;
            }
        }
        if self.precision == 4 {
            if let Some(precision) = config.precision {
                self.precision = precision;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags
        if !self.dry_run {
            self.dry_run = config.dry_run.unwrap_or(false);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            pedigree: None,
            output: None,
            format: "tsv".to_string(),
            missing_char: "-".to_string(),
            mutation: None,
            precision: 4,
            threads: None,
            config: None,
            generate_config: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_config_fills_unset_values() {
        let config = Config {
            pedigree: Some("family.csv".to_string()),
            format: Some("json".to_string()),
            threads: Some(2),
            ..Config::default()
        };
        let merged = default_args().merge_with_config(config);
        assert_eq!(merged.pedigree.as_deref(), Some("family.csv"));
        assert_eq!(merged.format, "json");
        assert_eq!(merged.threads, Some(2));
    }

    #[test]
    fn test_cli_values_win() {
        let mut args = default_args();
        args.pedigree = Some("cli.csv".to_string());
        args.format = "csv".to_string();
        let config = Config {
            pedigree: Some("config.csv".to_string()),
            format: Some("json".to_string()),
            ..Config::default()
        };
        let merged = args.merge_with_config(config);
        assert_eq!(merged.pedigree.as_deref(), Some("cli.csv"));
        assert_eq!(merged.format, "csv");
    }
}
