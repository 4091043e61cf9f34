use std::{fs::read_to_string, io, path::PathBuf, process::exit, time::Instant};

use blocklang::{format_error, get_line_at_position, interpret};
use clap::Parser;
use log::{debug, info, LevelFilter};

/// blocklang runs a small block-structured language with numeric variables,
/// lexical scoping and interpolated printing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to run.
    file: PathBuf,

    /// Increase log output (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env().init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_contents = read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            args.file.display()
        );
        exit(1);
    });

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let start = Instant::now();

    if let Err(error) = interpret(file_contents.clone(), Some(file_name), io::stdout().lock()) {
        eprintln!("{}", format_error(&error));
        show_source_line(&file_contents, error.get_position().offset);
        exit(1);
    }

    debug!("finished in {:?}", start.elapsed());
}

/// Logs the offending source line with a marker under the error column.
fn show_source_line(content: &str, offset: u32) {
    let Some((line, line_text, column)) = get_line_at_position(content, offset) else {
        return;
    };

    let trimmed = line_text.trim_start();
    let removed = line_text.len() - trimmed.len();
    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    info!("{:>padding$}", "|");
    info!("{} | {}", line_str, trimmed.trim_end());
    info!(
        "{:>padding$} {:>arrows$}",
        "|",
        "^",
        arrows = column.saturating_sub(removed) + 1
    );
}
