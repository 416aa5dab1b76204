use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use form_create_core::{Transformer, lint_form};
use form_create_settings::{FormDefinition, RendererConfig, collect_definition_paths};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "form-create")]
#[command(about = "Build admin-panel form schemas from field definitions")]
struct Cli {
    /// Log transform decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a form schema JSON document from a definition file.
    Build(BuildArgs),
    /// Build definitions and report structural problems.
    Lint(LintArgs),
    /// List the shorthand kinds the transformer expands.
    Kinds,
}

#[derive(Debug, Args)]
struct BuildArgs {
    /// Definition file (YAML or JSON).
    #[arg(long)]
    definition: PathBuf,
    /// Renderer configuration YAML.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Bearer token embedded in upload fields.
    #[arg(long, env = "FORM_CREATE_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Write the schema to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Emit compact JSON.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Args)]
struct LintArgs {
    /// Definition files and/or directories containing definitions.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Renderer configuration YAML.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Build(args) => run_build(args),
        Command::Lint(args) => run_lint(args),
        Command::Kinds => run_kinds(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RendererConfig, String> {
    match path {
        Some(path) => RendererConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display())),
        None => Ok(RendererConfig::default()),
    }
}

fn run_build(args: BuildArgs) -> Result<(), String> {
    let definition = FormDefinition::load(&args.definition)
        .map_err(|err| format!("Failed to load '{}': {err}", args.definition.display()))?;
    let config = load_config(args.config.as_deref())?;
    let token = args.token.unwrap_or_default();

    let outcome = definition.build(&config, &token);
    if !outcome.passthrough.is_empty() {
        info!(fields = ?outcome.passthrough, "Fields emitted without transform");
    }
    if outcome.skipped_options > 0 {
        eprintln!(
            "{} malformed option pair(s) skipped.",
            outcome.skipped_options
        );
    }

    let raw = if args.compact {
        outcome.form.to_json()
    } else {
        outcome.form.to_json_pretty()
    }
    .map_err(|err| format!("Failed to serialize form: {err}"))?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|err| {
                        format!(
                            "Failed to create output directory '{}': {err}",
                            parent.display()
                        )
                    })?;
                }
            }
            fs::write(&path, raw)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
            println!(
                "Wrote {} rule(s) to '{}'.",
                outcome.form.rule.len(),
                path.display()
            );
        }
        None => println!("{raw}"),
    }

    Ok(())
}

fn run_lint(args: LintArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let paths = collect_definition_paths(&args.inputs).map_err(|err| err.to_string())?;

    let mut issues = 0usize;
    for path in &paths {
        let definition = match FormDefinition::load(path) {
            Ok(definition) => definition,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                issues += 1;
                continue;
            }
        };

        let outcome = definition.build(&config, "");
        if outcome.skipped_options > 0 {
            eprintln!(
                "{}: {} malformed option pair(s)",
                path.display(),
                outcome.skipped_options
            );
            issues += 1;
        }
        for err in lint_form(&outcome.form) {
            eprintln!("{}: {err}", path.display());
            issues += 1;
        }
    }

    if issues > 0 {
        return Err(format!(
            "{issues} issue(s) found in {} definition file(s)",
            paths.len()
        ));
    }

    println!("Linted {} definition file(s); no issues.", paths.len());
    Ok(())
}

fn run_kinds() -> Result<(), String> {
    for kind in Transformer::default().kinds() {
        println!("{kind}");
    }
    Ok(())
}
