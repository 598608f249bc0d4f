use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use matrixgen_domain::{ExclusionRule, MatrixGenerator, MatrixInputs};
use std::process::Command as ProcessCommand;

const SCHEMA_PATH: &str = "matrixgen-cli/schemas/matrix.v1.json";

const GOLDEN_TEST_ARGS: [&str; 5] = [
    "test",
    "-p",
    "matrixgen-domain",
    "--test",
    "golden_fixtures",
];

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by matrixgen.
    PrintSchemas,
    /// Bless the golden matrix fixture (overwrite expected output).
    BlessFixtures,
    /// Validate generated matrices against the JSON schema.
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", matrixgen_types::schema::MATRIXGEN_MATRIX_V1);
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(GOLDEN_TEST_ARGS)
                .env("MATRIXGEN_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
        Command::Validate => validate()?,
    }
    Ok(())
}

fn validate() -> anyhow::Result<()> {
    let schema_text =
        fs::read_to_string(SCHEMA_PATH).with_context(|| format!("read {SCHEMA_PATH}"))?;
    let schema: serde_json::Value =
        serde_json::from_str(&schema_text).with_context(|| format!("parse {SCHEMA_PATH}"))?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("compile {SCHEMA_PATH}: {e}"))?;

    let mut failures = 0usize;
    for rule in [ExclusionRule::SkipReleasedDynamic, ExclusionRule::Disabled] {
        let inputs = MatrixInputs::builtin().with_exclusion(rule);
        let doc = MatrixGenerator::new(inputs)?.generate();
        let value = serde_json::to_value(&doc).context("serialize matrix")?;

        let errors: Vec<String> = validator
            .iter_errors(&value)
            .map(|e| e.to_string())
            .collect();
        if errors.is_empty() {
            println!("ok: exclusion={rule:?} ({} combinations)", doc.len());
        } else {
            for e in &errors {
                eprintln!("error: exclusion={rule:?}: {e}");
            }
            failures += errors.len();
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} schema violation(s)");
    }
    Ok(())
}
