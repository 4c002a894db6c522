/*!
# jsdoc-bridge CLI

Builds ESTree ASTs for JavaScript files and resolves CommonJS module
specifiers from the command line.
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

use jsdoc_bridge::cli_common::{
    self, BuildSummary, CommonArgs, OutputArgs, OutputFormat, OutputWriter, ResolverArgs,
};
use jsdoc_bridge::{build_file_ast, collect_source_files, AstBuilder, BridgeConfig, CatchHandlerStyle};

#[derive(Parser)]
#[command(
    name = "jsdoc-bridge",
    version = env!("CARGO_PKG_VERSION"),
    about = "JavaScript to ESTree AST bridge with JSDoc comment attachment and CommonJS module resolution"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Build ESTree ASTs for JavaScript files or directories
    Parse {
        /// Files or directories (directories are searched for .js files)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,

        /// Catch handler format (single, list)
        #[arg(long)]
        catch_handlers: Option<String>,

        /// Configuration file (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve a module specifier to a file
    Resolve {
        /// Module specifier as passed to require()
        specifier: String,

        #[command(flatten)]
        resolver: ResolverArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.common.quiet {
        cli_common::init_minimal_logging()
    } else {
        cli_common::init_logging(cli.common.verbose)
    };
    if let Err(e) = logging {
        cli_common::print_error(&e.to_string());
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            cli_common::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Parse {
            paths,
            output,
            catch_handlers,
            config,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(style) = catch_handlers {
                config.ast.catch_handlers = parse_catch_style(style)?;
            }
            parse_command(&cli.common, paths, output, config)
        }
        Commands::Resolve {
            specifier,
            resolver,
        } => {
            let mut config = load_config(resolver.config.as_ref())?;
            resolver.apply_to(&mut config.resolver);
            resolve_command(&cli.common, specifier, &config)
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<BridgeConfig> {
    match path {
        Some(path) => {
            cli_common::validate_path(path, "Configuration file")?;
            BridgeConfig::load_from_file(path)
        }
        None => Ok(BridgeConfig::default()),
    }
}

fn parse_catch_style(value: &str) -> Result<CatchHandlerStyle> {
    match value.to_lowercase().as_str() {
        "single" => Ok(CatchHandlerStyle::Single),
        "list" => Ok(CatchHandlerStyle::List),
        _ => Err(anyhow::anyhow!("Unknown catch handler format: {}", value)),
    }
}

fn parse_command(
    common: &CommonArgs,
    paths: &[PathBuf],
    output: &OutputArgs,
    config: BridgeConfig,
) -> Result<bool> {
    let start_time = Instant::now();

    for path in paths {
        cli_common::validate_path(path, "Source path")?;
    }
    let files = collect_source_files(paths)?;
    info!("Building ASTs for {} files", files.len());

    let options = config.ast;
    let results: Vec<_> = files
        .par_iter()
        .map_init(
            || AstBuilder::with_options(options.clone()),
            |builder, path| (path, build_file_ast(builder, path)),
        )
        .collect();

    let mut writer = OutputWriter::to_target(output.output.as_deref(), OutputFormat::Json)
        .context("Failed to open output")?
        .with_pretty(output.pretty);

    let mut summary = BuildSummary {
        files: files.len(),
        ..BuildSummary::default()
    };
    for (path, result) in results {
        match result {
            Ok(program) => {
                summary.built += 1;
                summary.nodes += program.node_count();
                writer.write_object(&program)?;
            }
            Err(e) => {
                summary.failed += 1;
                warn!("{}: {:#}", path.display(), e);
                cli_common::print_error(&format!("{:#}", e));
            }
        }
    }
    writer.flush()?;
    summary.duration = Some(cli_common::format_duration(start_time.elapsed()));

    if common.should_print() {
        let mut report = OutputWriter::from_writer(Box::new(std::io::stderr()), common.format);
        summary.write(&mut report)?;
        report.flush()?;
        if summary.failed == 0 {
            cli_common::print_success(&format!("Built {} ASTs", summary.built));
        } else {
            cli_common::print_warning(&format!(
                "{} of {} files failed",
                summary.failed, summary.files
            ));
        }
    }

    Ok(summary.failed == 0)
}

fn resolve_command(common: &CommonArgs, specifier: &str, config: &BridgeConfig) -> Result<bool> {
    let resolver = config.module_resolver()?;
    let mut writer = OutputWriter::stdout(common.format).with_pretty(true);

    match resolver.resolve(specifier) {
        Some(module) => {
            match common.format {
                OutputFormat::Json => writer.write_object(&module)?,
                OutputFormat::Text => writer.write_line(&module.path.display().to_string())?,
            }
            writer.flush()?;
            Ok(true)
        }
        None => {
            if common.should_print() {
                cli_common::print_error(&format!("{}: not found", specifier));
            }
            Ok(false)
        }
    }
}
