use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use codemap::core::{CodebaseAnalyzer, ProjectConfig};
use codemap::formatters::write_outputs;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "codemap",
    version = "0.1.0",
    author = "codemap developers",
    about = "Function call graph extractor for TypeScript and JavaScript projects"
)]
struct Cli {
    /// Project configuration file; its directory is the project root
    #[arg(long, value_name = "FILE", default_value = "tsconfig.json")]
    tsconfig: PathBuf,

    /// Source directory below the project root [default: src]
    #[arg(short, long, value_name = "DIR")]
    source_dir: Option<String>,

    /// Comma-separated list of file extensions to analyze
    #[arg(
        short,
        long,
        value_name = "EXTS",
        value_delimiter = ',',
        default_value = "ts,vue,jsx,js"
    )]
    extensions: Vec<String>,

    /// Directory the graph and report are written to
    #[arg(short, long, value_name = "DIR", default_value = "codemap-output")]
    output_dir: PathBuf,

    /// Number of entries in each ranking of the report
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    top: usize,

    /// Log per-file diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "codemap=debug" } else { "codemap=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        tsconfig,
        source_dir,
        extensions,
        output_dir,
        top,
        verbose: _,
    } = cli;

    let start_time = Instant::now();

    let mut config = ProjectConfig::load(&tsconfig)?
        .with_extensions(extensions)
        .with_output_dir(output_dir)
        .with_top(top);
    if let Some(source_dir) = source_dir {
        config = config.with_source_dir(&source_dir);
    }

    let analysis = CodebaseAnalyzer::new().analyze(&config)?;
    tracing::info!(
        files = analysis.files_analyzed,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Analysis finished"
    );

    let outputs = write_outputs(&config, &analysis.graph)?;

    let dot_display = outputs.dot.display();
    println!("\nGenerated {}", dot_display);
    println!(
        "To generate SVG, run: dot -Tsvg {} -o {}",
        dot_display,
        outputs.dot.with_extension("svg").display()
    );
    println!(
        "To generate PNG, run: dot -Tpng {} -o {}",
        dot_display,
        outputs.dot.with_extension("png").display()
    );
    println!("Generated {}", outputs.report.display());

    Ok(())
}
