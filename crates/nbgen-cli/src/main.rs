//! nbgen CLI - starter-notebook generator
//!
//! A command-line interface for writing minimal single-cell Jupyter
//! notebook files from fixed kernel presets.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use colored::Colorize;
use nbgen_core::{NotebookDocument, NotebookWriter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kernel preset for the generated notebook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
enum Kernel {
    /// Python 3 starter notebook (default)
    #[default]
    Python,
    /// JavaScript (Node.js) starter notebook
    Javascript,
}

impl Kernel {
    /// All selectable presets, in display order
    const ALL: [Self; 2] = [Self::Python, Self::Javascript];

    /// Stable identifier used in config files and `kernels` output
    const fn id(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
        }
    }

    /// Output filename used when no path is given
    const fn default_output(self) -> &'static str {
        match self {
            Self::Python => "python-demo.ipynb",
            Self::Javascript => "js-demo-new.ipynb",
        }
    }

    /// Confirmation line printed after a successful write
    const fn success_message(self) -> &'static str {
        match self {
            Self::Python => "Python notebook created successfully!",
            Self::Javascript => "JavaScript notebook created successfully!",
        }
    }

    /// Build the preset's fixed starter document
    fn document(self) -> NotebookDocument {
        match self {
            Self::Python => NotebookDocument::python_starter(),
            Self::Javascript => NotebookDocument::javascript_starter(),
        }
    }
}

/// Configuration file structure for .nbgen.toml
///
/// Configuration files can be placed in:
/// - User home directory: ~/.nbgen.toml (user defaults)
/// - Project directory: ./.nbgen.toml (project defaults)
///
/// Precedence order (highest to lowest):
/// 1. Command-line arguments (--kernel)
/// 2. Project config (./.nbgen.toml)
/// 3. User config (~/.nbgen.toml)
/// 4. Built-in defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
struct Config {
    /// Default settings for the new command
    #[serde(skip_serializing_if = "Option::is_none")]
    new: Option<NewConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
struct NewConfig {
    /// Default kernel preset (python or javascript)
    #[serde(skip_serializing_if = "Option::is_none")]
    kernel: Option<String>,
}

impl Config {
    /// Load configuration from file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            eprintln!(
                "{} Failed to parse config file: {}",
                "Error:".red().bold(),
                path.display()
            );
            eprintln!("{} {}", "Parse error:".yellow().bold(), e);
            eprintln!();
            eprintln!("{} Configuration file syntax:", "Help:".cyan().bold());
            eprintln!("  [new]");
            eprintln!("  kernel = \"python\"  # python or javascript");
            anyhow::anyhow!("Failed to parse config file: {e}")
        })?;

        Ok(config)
    }

    /// Find and load configuration files
    /// Returns (`user_config`, `project_config`)
    fn discover_configs() -> (Option<Self>, Option<Self>) {
        let user_config = Self::load_user_config();
        let project_config = Self::load_project_config();
        (user_config, project_config)
    }

    /// Load user config from ~/.nbgen.toml
    fn load_user_config() -> Option<Self> {
        let home_dir = dirs::home_dir()?;
        let config_path = home_dir.join(".nbgen.toml");

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!(
                        "{} Failed to load user config from {}: {}",
                        "Warning:".yellow().bold(),
                        config_path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Load project config from ./.nbgen.toml
    fn load_project_config() -> Option<Self> {
        let config_path = PathBuf::from(".nbgen.toml");

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!(
                        "{} Failed to load project config from {}: {}",
                        "Warning:".yellow().bold(),
                        config_path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Merge multiple configs with precedence
    /// CLI args > project config > user config > defaults
    fn merge(user_config: Option<Self>, project_config: Option<Self>) -> Self {
        let mut merged = Self::default();

        // Apply user config first (lowest precedence)
        if let Some(user) = user_config {
            if let Some(new) = user.new {
                merged.new = Some(new);
            }
        }

        // Apply project config (overrides user config)
        if let Some(project) = project_config {
            if let Some(new) = project.new {
                let mut merged_new = merged.new.unwrap_or_default();
                if let Some(kernel) = new.kernel {
                    merged_new.kernel = Some(kernel);
                }
                merged.new = Some(merged_new);
            }
        }

        merged
    }

    /// Resolve kernel preset from CLI, config, or default
    fn resolve_kernel(cli_value: Option<Kernel>, config_value: Option<&str>) -> Kernel {
        if let Some(kernel) = cli_value {
            return kernel;
        }

        if let Some(kernel_str) = config_value {
            return match kernel_str.to_lowercase().as_str() {
                "javascript" | "js" => Kernel::Javascript,
                _ => Kernel::Python,
            };
        }

        Kernel::Python
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "nbgen",
    about = "Generate starter Jupyter notebook files",
    long_about = "Generate minimal, valid single-cell Jupyter notebook (.ipynb) files\n\
                  from fixed kernel presets.",
    version
)]
struct Args {
    /// Suppress the confirmation line on success
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter notebook file
    #[command(long_about = "Write a starter notebook file.\n\
                      \n\
                      The notebook contains a single never-executed code cell with a\n\
                      hello-world print statement for the selected kernel. Any existing\n\
                      file at the output path is overwritten.\n\
                      \n\
                      Examples:\n\
                        nbgen new                             # ./python-demo.ipynb\n\
                        nbgen new notes/starter.ipynb         # explicit output path\n\
                        nbgen new --kernel javascript         # ./js-demo-new.ipynb")]
    New {
        /// Output path for the notebook (defaults to the preset's filename)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Kernel preset for the generated notebook
        #[arg(long, value_enum)]
        kernel: Option<Kernel>,
    },

    /// List available kernel presets
    #[command(long_about = "List the kernel presets a starter notebook can be generated for.\n\
                      \n\
                      Examples:\n\
                        nbgen kernels              # List as a table\n\
                        nbgen kernels --json       # Output as JSON")]
    Kernels {
        /// Output as JSON instead of table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for nbgen.\n\
                      \n\
                      Supports bash, zsh, fish, and PowerShell.\n\
                      \n\
                      Examples:\n\
                        nbgen completion bash > /usr/local/etc/bash_completion.d/nbgen\n\
                        nbgen completion zsh > ~/.zsh/completions/_nbgen")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    // Load configuration files
    let (user_config, project_config) = Config::discover_configs();
    let config = Config::merge(user_config, project_config);

    let args = Args::parse();

    match args.command {
        Commands::New { output, kernel } => {
            // Apply config default (CLI args override config)
            let kernel = Config::resolve_kernel(
                kernel,
                config.new.as_ref().and_then(|n| n.kernel.as_deref()),
            );
            new_command(kernel, output, args.quiet)
        }
        Commands::Kernels { json } => kernels_command(json),
        Commands::Completion { shell } => completion_command(shell),
    }
}

/// Write the selected starter notebook to the output path
fn new_command(kernel: Kernel, output: Option<PathBuf>, quiet: bool) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(kernel.default_output()));

    let document = kernel.document();
    NotebookWriter::new()
        .write(&document, &path)
        .with_context(|| format!("Failed to write notebook file: {}", path.display()))?;

    if !quiet {
        println!("{} {}", "✓".green().bold(), kernel.success_message());
    }

    Ok(())
}

/// List available kernel presets
#[allow(clippy::unnecessary_wraps)] // consistent return type for CLI commands
fn kernels_command(json_output: bool) -> Result<()> {
    if json_output {
        let entries: Vec<serde_json::Value> = Kernel::ALL
            .iter()
            .map(|kernel| {
                let document = kernel.document();
                serde_json::json!({
                    "kernel": kernel.id(),
                    "display_name": document.metadata.kernelspec.display_name,
                    "language": document.metadata.kernelspec.language,
                    "default_output": kernel.default_output(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", "Available kernel presets:".bold());
        println!();
        println!(
            "  {:<12} {:<22} {:<12} {}",
            "KERNEL", "DISPLAY NAME", "LANGUAGE", "DEFAULT OUTPUT"
        );
        for kernel in Kernel::ALL {
            let document = kernel.document();
            println!(
                "  {:<12} {:<22} {:<12} {}",
                kernel.id(),
                document.metadata.kernelspec.display_name,
                document.metadata.kernelspec.language,
                kernel.default_output()
            );
        }
    }

    Ok(())
}

/// Generate shell completion scripts
#[allow(clippy::unnecessary_wraps)] // consistent return type for CLI commands
fn completion_command(shell: Shell) -> Result<()> {
    let mut cmd = Args::command();
    let bin_name = cmd.get_name().to_string();

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
