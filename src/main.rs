use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsonpc::config::{ConfigManager, JsonPcConfig};
use jsonpc::core::print_error_message;
use jsonpc::env::{self, EnvVar};
use jsonpc::{
    augment_prompt, html_bytes_to_jsonpc, jsonpc_to_html, Document, JsonPcResult, PromptMode,
};

#[derive(Parser)]
#[command(
    name = "jsonpc",
    version,
    about = "Convert web pages to and from JSON-PC structured content"
)]
struct Cli {
    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log per-element parsing decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML page into JSON-PC
    Parse {
        /// HTML file, "-" or nothing for stdin
        input: Option<String>,
        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Value for the document's url field
        #[arg(short, long)]
        url: Option<String>,
        /// Input character encoding (default: UTF-8 or the declared charset)
        #[arg(short, long)]
        encoding: Option<String>,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Render a JSON-PC document as HTML
    Render {
        /// JSON-PC file, "-" or nothing for stdin
        input: Option<String>,
        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Escape text and attribute values
        #[arg(long)]
        escape: bool,
    },
    /// Append JSON-PC instructions to a prompt
    Augment {
        /// Prompt text; read from stdin when omitted
        prompt: Option<String>,
        /// "response" or "question"
        #[arg(short, long)]
        mode: String,
    },
    /// Print the effective configuration and known environment variables
    Config,
}

fn main() {
    let cli = Cli::parse();
    let colored = !env::NoColor::get().ok().flatten().unwrap_or(false);

    let manager = match ConfigManager::new(cli.config.as_deref()) {
        Ok(manager) => manager,
        Err(e) => {
            print_error_message(&e.to_string(), colored);
            process::exit(1);
        }
    };
    let config = manager.get_config();

    init_logging(config, cli.quiet, cli.verbose, colored);
    if let Some(source) = manager.source() {
        tracing::debug!("using configuration from {}", source);
    }

    if let Err(e) = run(cli.command, config) {
        print_error_message(&e.to_string(), colored);
        process::exit(1);
    }
}

fn init_logging(config: &JsonPcConfig, quiet: bool, verbose: bool, colored: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("jsonpc={level}")))
        .with_writer(io::stderr)
        .with_ansi(colored)
        .init();
}

fn run(command: Commands, config: &JsonPcConfig) -> JsonPcResult<()> {
    match command {
        Commands::Parse {
            input,
            output,
            url,
            encoding,
            compact,
        } => {
            let data = read_input(input.as_deref())?;
            let mut options = config.to_options();
            options.url = url;

            let document = html_bytes_to_jsonpc(&data, encoding.as_deref(), &options)?;
            tracing::info!(
                "parsed \"{}\" into {} section(s)",
                document.title,
                document.content.len()
            );

            let json = if compact || !config.pretty {
                document.to_json()?
            } else {
                document.to_json_pretty()?
            };
            write_output(output.as_deref(), &json)
        }
        Commands::Render {
            input,
            output,
            escape,
        } => {
            let data = read_input(input.as_deref())?;
            let document = Document::from_json(&String::from_utf8_lossy(&data))?;
            let mut options = config.to_options();
            options.escape_html |= escape;

            write_output(output.as_deref(), &jsonpc_to_html(&document, &options))
        }
        Commands::Augment { prompt, mode } => {
            let mode: PromptMode = mode.parse()?;
            let prompt = match prompt {
                Some(prompt) => prompt,
                None => String::from_utf8_lossy(&read_input(None)?).into_owned(),
            };

            write_output(None, &augment_prompt(&prompt, mode))
        }
        Commands::Config => {
            let mut text = config.to_toml()?;
            text.push('\n');
            for (name, description) in env::describe_all() {
                text.push_str(&format!("# {name}: {description}\n"));
            }
            write_output(None, text.trim_end())
        }
    }
}

fn read_input(input: Option<&str>) -> JsonPcResult<Vec<u8>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read(path)?),
    }
}

fn write_output(output: Option<&Path>, content: &str) -> JsonPcResult<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{content}\n"))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
        }
    }
    Ok(())
}
