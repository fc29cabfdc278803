use errtab_compiler::{config::GeneratorConfig, logging, pipeline};
use std::env;

struct CliOptions {
    decls_root: String,
    out_dir: Option<String>,
    check: bool,
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <decls-root> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = match parse_options(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    let mut config = GeneratorConfig::new(&options.decls_root);
    if let Some(out_dir) = &options.out_dir {
        config = config.with_output_dir(out_dir);
    }

    if options.check {
        run_check(&config, options.quiet)
    } else {
        run_generate(&config, options.quiet)
    }
}

fn print_help(program_name: &str) {
    println!("errtab compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Error taxonomy generator: errno headers + documentation into C tables");
    println!();
    println!("USAGE:");
    println!(
        "    {} <decls-root> [options]          # Generate both artifacts",
        program_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    <decls-root>   Directory containing the error_decls/ input tree");
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --out-dir DIR       Write artifacts to DIR (default: <decls-root>)");
    println!("    --check             Verify artifacts are current; write nothing");
    println!("    --quiet             Suppress the generation summary");
    println!();
    println!("INPUTS (under <decls-root>/error_decls/):");
    println!("    errno-base.h        Base system error value definitions");
    println!("    errno.h             Extended system error value definitions");
    println!("    errno.dat           System error documentation text");
    println!();
    println!("OUTPUTS:");
    println!("    error_codes.h       Subsystem enum, code constants, definitions");
    println!("    error_codes.c       Short/long/name string tables");
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        decls_root: args[0].clone(),
        out_dir: None,
        check: false,
        quiet: false,
    };
    if options.decls_root.starts_with("--") {
        return Err(format!("Expected <decls-root>, got '{}'", options.decls_root));
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out-dir" => {
                if i + 1 < args.len() {
                    options.out_dir = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    return Err("--out-dir requires a directory".to_string());
                }
            }
            "--check" => {
                options.check = true;
            }
            "--quiet" => {
                options.quiet = true;
            }
            other => {
                return Err(format!("Unknown option '{}'", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn run_generate(config: &GeneratorConfig, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    match pipeline::run_generation(config) {
        Ok(result) => {
            if !quiet {
                println!("Generated {}", result.header_path.display());
                println!("Generated {}", result.source_path.display());
                println!(
                    "  {} entries across {} subsystems in {:.2}ms",
                    result.entry_count,
                    result.subsystem_count,
                    result.processing_duration.as_secs_f64() * 1000.0
                );
            }
            Ok(())
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            std::process::exit(1);
        }
    }
}

fn run_check(config: &GeneratorConfig, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    match pipeline::check_artifacts(config) {
        Ok(true) => {
            if !quiet {
                println!("Artifacts are current");
            }
            Ok(())
        }
        Ok(false) => {
            eprintln!("Artifacts are stale; rerun without --check to regenerate");
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            print_detailed_error(&error);
            std::process::exit(1);
        }
    }
}

fn print_detailed_error(error: &pipeline::PipelineError) {
    match error {
        pipeline::PipelineError::FileProcessing(ref file_err) => {
            eprintln!("File processing stage failed:");
            eprintln!("  {}", file_err);
        }
        pipeline::PipelineError::ValueResolution(ref value_err) => {
            eprintln!("Value resolution stage failed:");
            eprintln!("  {}", value_err);
        }
        pipeline::PipelineError::Merge(ref merge_err) => {
            eprintln!("Merge stage failed:");
            eprintln!("  {}", merge_err);
        }
        pipeline::PipelineError::Registry(ref registry_err) => {
            eprintln!("Registry construction failed:");
            eprintln!("  {}", registry_err);
        }
        pipeline::PipelineError::Pipeline { message } => {
            eprintln!("Pipeline error: {}", message);
        }
    }
    eprintln!(
        "  [{}] {}",
        error.error_code(),
        logging::codes::get_action(error.error_code().as_str())
    );
}
