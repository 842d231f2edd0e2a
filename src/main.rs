//! `jpr` - inspect and redact JSON documents by path.
//!
//! Reads a document from a file or stdin and either lists the path of
//! every node or rewrites it through path-matching rules.

mod telemetry;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

use json_path_replacer::config::RedactConfig;
use json_path_replacer::json::{apply, parse, stringify_pretty, Replacement};
use json_path_replacer::replacer::{omit, PathAwareOptions, PathAwareReplacer, Rule, RuleReplacer};
use json_path_replacer::{ErrorCode, JsonValue, ReplacerResult};

#[derive(Parser)]
#[command(name = "jpr")]
#[command(about = "Inspect and redact JSON documents by path", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dotted path and type of every node
    Paths {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Rewrite a document through path rules
    Redact {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// TOML rule file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Drop nodes whose path matches PATTERN (checked after file rules)
        #[arg(long = "omit", value_name = "PATTERN")]
        omit: Vec<String>,

        /// Spaces per nesting level (overrides the rule file)
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Paths { file } => run_paths(file.as_deref()),
        Commands::Redact {
            file,
            config,
            omit,
            indent,
        } => run_redact(file.as_deref(), config.as_deref(), &omit, indent),
        Commands::Version => {
            println!("jpr v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "json_path_replacer", error = %e, "Command failed");
            eprintln!("error: {} (code {})", e.name(), e.code());
            ExitCode::FAILURE
        }
    }
}

fn read_input(file: Option<&Path>) -> ReplacerResult<JsonValue> {
    let bytes = match file {
        Some(path) => std::fs::read(path)
            .map_err(|e| ErrorCode::E402_InputUnreadable(format!("{}: {}", path.display(), e)))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| ErrorCode::E402_InputUnreadable(format!("stdin: {}", e)))?;
            buf
        }
    };
    debug!(target: "json_path_replacer", bytes = bytes.len(), "Read input");
    parse(&bytes)
}

fn run_paths(file: Option<&Path>) -> ReplacerResult<()> {
    let value = read_input(file)?;

    let mut lines = Vec::new();
    let mut replacer = PathAwareReplacer::with_options(
        |event| {
            let path = if event.path.is_empty() {
                "(root)"
            } else {
                event.path
            };
            lines.push(format!("{}\t{}", path, event.value.type_name()));
            Ok(Replacement::Keep)
        },
        PathAwareOptions::path_only(),
    );
    apply(&value, &mut replacer)?;
    drop(replacer);

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn run_redact(
    file: Option<&Path>,
    config: Option<&Path>,
    omit_patterns: &[String],
    indent: Option<usize>,
) -> ReplacerResult<()> {
    let config = match config {
        Some(path) => RedactConfig::load(path)?,
        None => RedactConfig::default(),
    };
    let indent = indent.unwrap_or(config.indent);

    let mut rules = config.compile_rules()?;
    for pattern in omit_patterns {
        rules.push(Rule::new(pattern, omit())?);
    }
    info!(target: "json_path_replacer", rules = rules.len(), indent, "Redacting");

    let value = read_input(file)?;
    let mut replacer = RuleReplacer::new(rules);
    match stringify_pretty(&value, &mut replacer, indent)? {
        Some(out) => println!("{}", out),
        None => debug!(target: "json_path_replacer", "Root omitted; nothing to print"),
    }
    Ok(())
}
