use clap::Parser;
use kyakuhon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A converter that turns visual node-graph documents into dialogue scripts
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the options JSON file listing input/output directories
    options_path: Option<String>,

    /// Convert a single graph file instead of using an options file
    #[arg(short, long)]
    file: Option<String>,

    /// Where to write the converted script in single-file mode
    /// (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Fail on child references that do not resolve to an entity
    #[arg(short, long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(file) = cli.file {
        run_single_file(&file, cli.output.as_deref(), cli.strict);
    } else {
        let options_path = cli.options_path.unwrap_or_else(|| {
            exit_with_error("An options file path is required unless --file is given.")
        });
        run_batch(&options_path, cli.strict);
    }
}

/// Converts one graph file and writes the script to a file or stdout.
fn run_single_file(input_path: &str, output_path: Option<&str>, strict: bool) {
    let script = convert_one(Path::new(input_path), strict)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert '{}': {}", input_path, e)));

    let json = script
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize script: {}", e)));

    match output_path {
        Some(path) => {
            fs::write(path, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write script to '{}': {}", path, e))
            });
            println!("Converted '{}' -> '{}'", input_path, path);
        }
        None => println!("{}", json),
    }
}

/// Converts every directory pair named by the options file, with a summary.
fn run_batch(options_path: &str, strict: bool) {
    let total_start = Instant::now();
    let options_path = Path::new(options_path);

    let options = Options::from_file(options_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read options file '{}': {}",
            options_path.display(),
            e
        ))
    });
    let base_dir = options_path.parent().unwrap_or_else(|| Path::new("."));

    println!("Starting Kyakuhon Batch Conversion...");
    if strict {
        println!("Strict reference checking is enabled.");
    }

    let mut converted = 0usize;
    let mut failed = 0usize;

    for input in &options.input {
        let (input_dir, output_dir) = options.directory_pair(base_dir, input);
        let dir_start = Instant::now();

        match process_directory(&input_dir, &output_dir, strict) {
            Ok((dir_converted, dir_failed)) => {
                converted += dir_converted;
                failed += dir_failed;
                println!(
                    "Directory '{}' processed in {:?} ({} converted, {} failed)",
                    input_dir.display(),
                    dir_start.elapsed(),
                    dir_converted,
                    dir_failed
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!(
                    "Failed to process directory '{}': {}",
                    input_dir.display(),
                    e
                );
            }
        }
    }

    println!("\n--- Conversion Summary ---");
    println!("Files Converted:  {}", converted);
    println!("Files Failed:     {}", failed);
    println!("Total Execution:  {:?}", total_start.elapsed());
    println!();
}

fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    strict: bool,
) -> std::result::Result<(usize, usize), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    paths.sort();

    let mut converted = 0usize;
    let mut failed = 0usize;

    for input_path in paths {
        let file_name = match input_path.file_name() {
            Some(name) => name,
            None => continue,
        };

        match convert_one(&input_path, strict)
            .and_then(|script| script.save(output_dir.join(file_name)))
        {
            Ok(()) => {
                converted += 1;
                println!("  -> Converted '{}'", input_path.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  -> Failed to convert '{}': {}", input_path.display(), e);
            }
        }
    }

    Ok((converted, failed))
}

fn convert_one(path: &Path, strict: bool) -> Result<ScriptDocument> {
    let graph = GraphDocument::from_file(path)?;
    let builder = Converter::builder(graph);
    let converter = if strict {
        builder.with_strict_references().build()
    } else {
        builder.build()
    };
    Ok(converter.convert()?)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
