mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use config::{ConfigMerger, MatrixConfig};
use matrixgen_domain::{ExclusionRule, MatrixGenerator};
use matrixgen_render::render_matrix_md;
use matrixgen_types::MatrixDocument;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "matrixgen",
    version,
    about = "Print the CI build matrix (versions x linkage x platforms) as JSON."
)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// TOML file overriding the builtin tables. Never read unless given.
    #[arg(long, value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Which (version, linkage) pairs to leave out.
    #[arg(long, value_enum)]
    exclusion: Option<ExclusionArg>,

    /// Version to build (repeatable). Replaces the configured versions.
    #[arg(long = "version-id", value_name = "ID")]
    version_ids: Vec<String>,

    /// Print only the number of combinations.
    #[arg(long, default_value_t = false)]
    count: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Single-line JSON, as consumed by the CI engine.
    Json,
    /// Indented JSON.
    Pretty,
    /// Markdown table for job summaries.
    Markdown,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ExclusionArg {
    /// Skip shared-library builds of released versions.
    SkipReleasedDynamic,
    /// Build every combination.
    Disabled,
}

impl From<ExclusionArg> for ExclusionRule {
    fn from(arg: ExclusionArg) -> Self {
        match arg {
            ExclusionArg::SkipReleasedDynamic => ExclusionRule::SkipReleasedDynamic,
            ExclusionArg::Disabled => ExclusionRule::Disabled,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    // stdout carries the matrix; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => MatrixConfig::default(),
    };
    let inputs = ConfigMerger::new(file_config)
        .merge(&cli.version_ids, cli.exclusion.map(ExclusionRule::from));

    debug!(
        "merged inputs: versions={:?}, flags={:?}, platforms={}, exclusion={:?}",
        inputs.versions,
        inputs.build_shared_libs,
        inputs.platforms.len(),
        inputs.exclusion
    );

    let generator = MatrixGenerator::new(inputs).context("invalid matrix inputs")?;
    let doc = generator.generate();
    info!("generated {} combinations", doc.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.count {
        writeln!(out, "{}", doc.len()).context("write stdout")?;
    } else {
        write_matrix(&mut out, &doc, cli.format)?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn write_matrix<W: Write>(
    out: &mut W,
    doc: &MatrixDocument,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, doc).context("serialize matrix")?;
            writeln!(out).context("write stdout")?;
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, doc).context("serialize matrix")?;
            writeln!(out).context("write stdout")?;
        }
        OutputFormat::Markdown => {
            out.write_all(render_matrix_md(doc).as_bytes())
                .context("write stdout")?;
        }
    }
    Ok(())
}
