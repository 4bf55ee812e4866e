// main.rs - CLI entry point

use pedprob::cli::Config;
use pedprob::output;
use pedprob::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified; CLI arguments win
    let mut cpt = CptConfig::default();
    if let Some(config_path) = args.config.clone() {
        let config = Config::from_file(&config_path)?;
        if let Some(tables) = config.cpt.clone() {
            cpt = tables;
        }
        args = args.merge_with_config(config);
    }
    if let Some(mutation) = args.mutation {
        cpt.mutation = mutation;
    }

    let pedigree_path = args.pedigree.as_ref().ok_or("--pedigree is required")?;

    println!("🧬 pedprob v{}", env!("CARGO_PKG_VERSION"));

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    // Validate all arguments and the effective probability tables
    let validation = validate_args(&args, &cpt)?;

    let total_start = Instant::now();

    // Load and validate the pedigree
    let pedigree = Pedigree::from_file(std::path::Path::new(pedigree_path), &args.missing_char)?;
    pedigree.print_statistics();

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    // Run exact inference
    let engine = InferenceEngine::new(cpt);
    let posteriors = engine.infer(&pedigree).map_err(|e| e.to_string())?;

    // Deliver results
    match &args.output {
        Some(path) => output::write_results(path, validation.format, &posteriors, &command_line)?,
        None => {
            println!();
            output::print_report(&posteriors, args.precision);
        }
    }

    println!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
