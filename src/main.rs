use kyakuhon::prelude::*;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run -- <path/to/options.json>");
        std::process::exit(1);
    }

    let options_path = Path::new(&args[1]);
    println!("Loading options from: {}", options_path.display());

    let options = match Options::from_file(options_path) {
        Ok(options) => options,
        Err(e) => {
            eprintln!(
                "Failed to read options file '{}': {}",
                options_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    // Input and output paths resolve relative to the options file itself
    let base_dir = options_path.parent().unwrap_or_else(|| Path::new("."));

    let mut converted = 0usize;
    let mut failed = 0usize;

    for input in &options.input {
        let (input_dir, output_dir) = options.directory_pair(base_dir, input);
        match process_directory(&input_dir, &output_dir) {
            Ok((dir_converted, dir_failed)) => {
                converted += dir_converted;
                failed += dir_failed;
                println!(
                    "Directory '{}' processed ({} converted, {} failed)",
                    input_dir.display(),
                    dir_converted,
                    dir_failed
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("Failed to process directory '{}': {}", input_dir.display(), e);
            }
        }
    }

    println!(
        "\nAll files processed: {} converted, {} failed",
        converted, failed
    );
}

/// Converts every JSON file in `input_dir`, writing the results under
/// `output_dir`. A file that fails to convert is logged and skipped.
fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
) -> std::result::Result<(usize, usize), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let mut paths: Vec<_> = fs::read_dir(input_dir)?
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
        let output_path = output_dir.join(file_name);

        match convert_file(&input_path, &output_path) {
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

/// Reads one graph file, converts it, and writes the script document.
fn convert_file(input_path: &Path, output_path: &Path) -> Result<()> {
    let graph = GraphDocument::from_file(input_path)?;
    let script = Converter::new(graph).convert()?;
    script.save(output_path)?;
    Ok(())
}
