use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bundlerc::config::{DEFAULT_CONFIG_NAME, RawConfig};
use bundlerc::resolve::{self, BuildConfig};

#[derive(Parser)]
#[command(name = "bundlerc")]
#[command(about = "Resolves a declarative build configuration for a bundler and dev server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the config and print the normalized record as JSON
    Resolve {
        /// Path to the build config file
        #[arg(long, default_value = DEFAULT_CONFIG_NAME)]
        config: PathBuf,

        /// Project root all relative paths are anchored at [default: current directory]
        #[arg(long, default_value = ".")]
        project_root: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve the config and print a human-readable summary
    Check {
        /// Path to the build config file
        #[arg(long, default_value = DEFAULT_CONFIG_NAME)]
        config: PathBuf,

        /// Project root all relative paths are anchored at [default: current directory]
        #[arg(long, default_value = ".")]
        project_root: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            config,
            project_root,
            pretty,
        } => {
            let root = absolutize_root(&project_root)?;
            let resolved = load_and_resolve(&config, &root)?;
            let json = if pretty {
                serde_json::to_string_pretty(&resolved)?
            } else {
                serde_json::to_string(&resolved)?
            };
            println!("{}", json);
        }
        Commands::Check {
            config,
            project_root,
        } => {
            let root = absolutize_root(&project_root)?;
            let resolved = load_and_resolve(&config, &root)?;
            print_summary(&resolved, &root);
        }
    }

    Ok(())
}

fn load_and_resolve(config_path: &Path, root: &Path) -> Result<BuildConfig> {
    let raw = RawConfig::load(config_path)?;
    let resolved = resolve::resolve(&raw, root)?;
    Ok(resolved)
}

/// A relative `--project-root` is anchored at the working directory captured
/// here, once, so the resolver itself never sees a relative root.
fn absolutize_root(project_root: &Path) -> Result<PathBuf> {
    if project_root.is_absolute() {
        Ok(project_root.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Ok(cwd.join(project_root))
    }
}

fn print_summary(resolved: &BuildConfig, root: &Path) {
    println!("mode:             {}", resolved.mode);
    println!("output filename:  {}", resolved.output_filename);
    println!("server path:      {}", resolved.server_public_path);
    println!("server port:      {}", resolved.server_port);
    for (field, path) in resolved.path_fields() {
        // Show the root-relative form next to the absolute one when the
        // path actually lives under the root
        match pathdiff::diff_paths(path, root) {
            Some(rel) if !rel.as_os_str().is_empty() => {
                println!("{:<17} {} ({})", format!("{}:", field), path.display(), rel.display());
            }
            _ => println!("{:<17} {}", format!("{}:", field), path.display()),
        }
    }
}
