// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// pedprob - Exact gene/trait posterior calculator for family pedigrees
pub struct Args {
    /// path to pedigree file (.csv or .tsv) with name, mother, father, trait columns
    #[argh(option)]
    pub pedigree: Option<String>,

    /// output file for the posterior table (default: print to console)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// missing data character for parent and trait cells (default: -)
    #[argh(option, default = "String::from(\"-\")")]
    pub missing_char: String,

    /// gene mutation probability override (default: from tables)
    #[argh(option)]
    pub mutation: Option<f64>,

    /// decimal places in the console report (default: 4)
    #[argh(option, default = "4")]
    pub precision: usize,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// load options from a TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// print a sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// load and validate the pedigree without running inference
    #[argh(switch)]
    pub dry_run: bool,
}
