use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::path::PathBuf;
use tracing::debug;

use netlayer_config::{NetworkResolver, ProjectConfig};

mod init;
mod networks;
mod paths;

/// Layered network configuration for blockchain projects
#[derive(Parser)]
#[command(name = "netlayer", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to netlayer.toml or its directory (default: nearest one above the current directory)
    #[arg(short, long, global = true, env = "NETLAYER_PROJECT")]
    project: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every resolved network
    Networks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one resolved network
    Show {
        /// Network name
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show which layer supplied each setting
        #[arg(long, conflicts_with = "json")]
        explain: bool,
    },
    /// Show where override files are looked up and which were found
    Paths,
    /// Write an override file template
    Init {
        /// Create ~/.netlayer/networks.toml instead of the project's local override
        #[arg(long)]
        home: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> netlayer_core::Result<()> {
        self.init_tracing();

        match self.command {
            Commands::Networks { json } => {
                let project = Self::load_project(self.project)?;
                networks::cmd_networks(&NetworkResolver::new(), &project, json)
            }
            Commands::Show {
                name,
                json,
                explain,
            } => {
                let project = Self::load_project(self.project)?;
                networks::cmd_show(&NetworkResolver::new(), &project, &name, json, explain)
            }
            Commands::Paths => {
                let project = Self::load_project(self.project)?;
                paths::cmd_paths(&NetworkResolver::new(), &project)
            }
            Commands::Init { home, force } => {
                if home {
                    init::cmd_init_home(force)
                } else {
                    let project = Self::load_project(self.project)?;
                    init::cmd_init_local(&NetworkResolver::new(), &project, force)
                }
            }
            Commands::Completions { shell } => Self::cmd_completions(shell),
        }
    }

    // Resolve log level: RUST_LOG > --verbose > --quiet > --log-level > warn
    fn init_tracing(&self) {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or("warn")
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        match self.log_format {
            LogFormat::Json => builder.json().with_target(true).init(),
            LogFormat::Pretty => builder.with_target(false).init(),
        }
    }

    fn load_project(path: Option<PathBuf>) -> netlayer_core::Result<ProjectConfig> {
        let project = match path {
            Some(path) => ProjectConfig::load(&path)?,
            None => ProjectConfig::discover(&std::env::current_dir()?)?,
        };
        debug!(
            root = %project.root.display(),
            networks = project.networks.len(),
            "project loaded"
        );
        Ok(project)
    }

    fn cmd_completions(shell: Shell) -> netlayer_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "netlayer", &mut std::io::stdout());
        Ok(())
    }
}
