use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use map_generator::{Catalog, PipelineRunner, RasterTerrainEngine};

#[derive(Parser, Debug)]
#[command(name = "map-generator", version)]
struct Cli {
    /// Catalog JSON (`{"maps": [{"name": "...", "is_test": false}]}`). Defaults to the built-in list.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory the input/output roots are resolved against. Defaults to the current directory.
    #[arg(long)]
    workdir: Option<PathBuf>,

    /// Log debug output.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };
    catalog.validate().context("invalid catalog")?;

    let mut runner = PipelineRunner::new(RasterTerrainEngine::new());
    if let Some(dir) = cli.workdir {
        runner = runner.with_workdir(dir);
    }

    runner
        .run(&catalog)
        .context("error generating terrain maps")?;

    println!("Terrain maps generated successfully");
    Ok(())
}
