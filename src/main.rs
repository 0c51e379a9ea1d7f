use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use occurrence_codes::{
    convert_with,
    io_utils::{convert_cli_error, extension_error, io_cli_error, simple_cli_error},
    preview, Config, HeaderMatch,
};

/// Convert occurrence labels in a CSV export into database codes.
#[derive(Parser)]
#[command(name = "occurrence-codes", version)]
struct Args {
    /// Input .csv file, comma or semicolon separated
    input: PathBuf,
    /// Output file path (default: convertido_<input name> next to the input)
    output: Option<PathBuf>,
    /// Recognize column names regardless of case
    #[arg(long)]
    ignore_header_case: bool,
    /// Print the first rows of the original and converted tables
    #[arg(long)]
    preview: bool,
    /// Rows shown by --preview
    #[arg(long, default_value_t = 5)]
    preview_rows: usize,
    /// Print conversion statistics as JSON on stdout
    #[arg(long)]
    json: bool,
    /// Convert without writing the output file
    #[arg(long)]
    dry_run: bool,
    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_output(input: &Path) -> Option<PathBuf> {
    let name = input.file_name()?.to_str()?;
    Some(input.with_file_name(format!("convertido_{name}")))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args
        .input
        .extension()
        .and_then(|s| s.to_str())
        .map_or(true, |ext| ext.to_ascii_lowercase() != "csv")
    {
        return Err(extension_error(&args.input).into());
    }

    let config = Config {
        header_match: if args.ignore_header_case {
            HeaderMatch::IgnoreCase
        } else {
            HeaderMatch::Exact
        },
        preview_rows: args.preview_rows,
    };
    config
        .validate()
        .map_err(|e| convert_cli_error("invalid options", e))?;

    let output_path = match args.output {
        Some(p) => p,
        None => default_output(&args.input)
            .ok_or_else(|| simple_cli_error("cannot derive an output file name"))?,
    };

    let data =
        fs::read(&args.input).map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let conversion = convert_with(&data, &config)
        .map_err(|e| convert_cli_error("conversion failed", e))?;

    if args.preview {
        println!("Original:");
        print!("{}", preview::render(&conversion.original, config.preview_rows));
        println!();
        println!("Converted:");
        print!("{}", preview::render(&conversion.converted, config.preview_rows));
    }

    if args.dry_run {
        eprintln!("(dry run) skipping file write");
    } else {
        fs::write(&output_path, &conversion.output)
            .map_err(|e| io_cli_error("writing output file", &output_path, e))?;
        tracing::info!(path = %output_path.display(), "wrote converted file");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&conversion.stats)?);
    } else {
        conversion.stats.report();
    }
    Ok(())
}
