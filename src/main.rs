use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info};

use grndsys_version::build_info::VersionInfo;
use grndsys_version::registry::{self, GROUND_SYSTEM_NAME};
use grndsys_version::BuildMode;

mod logging;

fn parse_component(s: &str) -> Result<String, String> {
    if registry::COMPONENTS.contains_key(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "Invalid component '{}'. Available components: {}",
            s,
            registry::names().join(", ")
        ))
    }
}

fn component_help_text() -> String {
    format!(
        "Component to describe (available: {})",
        registry::names().join(", ")
    )
}

#[derive(Parser)]
#[command(name = "grndsys-version")]
#[command(about = "Print the version identity of the cFS ground system")]
#[command(version = grndsys_version::version_tag())]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, default_value = GROUND_SYSTEM_NAME, value_parser = parse_component, help = component_help_text())]
    component: String,

    /// Print only the version tag instead of the banner
    #[arg(short, long)]
    tag: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    // --tag only selects the default output, which subcommands replace.
    fn check_conflicts(&self) -> Result<(), clap::Error> {
        if self.tag && self.command.is_some() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--tag cannot be combined with a subcommand",
            ));
        }
        Ok(())
    }
}

#[derive(Parser)]
pub enum Commands {
    /// Show detailed version information
    VersionInfo {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List known components and their version tags
    List,
    /// Validate every known component's version identity
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = cli.check_conflicts() {
        e.exit();
    }
    logging::setup_tracing(cli.debug);

    let mode = BuildMode::ACTIVE;
    let descriptor = registry::lookup(&cli.component)
        .with_context(|| format!("Failed to resolve component '{}'", cli.component))?;
    debug!(component = %cli.component, mode = mode.as_str(), "resolved descriptor");

    // Handle subcommands
    if let Some(command) = cli.command {
        match command {
            Commands::VersionInfo { json } => {
                let info = VersionInfo::new(descriptor, mode)
                    .with_context(|| format!("Component '{}' failed validation", cli.component))?;
                info!("{}", info.header_line());
                if json {
                    let out = serde_json::to_string_pretty(&info)
                        .context("Failed to serialize version info")?;
                    println!("{}", out);
                } else {
                    info.print();
                }
            }
            Commands::List => {
                for name in registry::names() {
                    let descriptor = registry::lookup(name)?;
                    descriptor
                        .validate()
                        .with_context(|| format!("Component '{}' failed validation", name))?;
                    println!("{:<16} {}", name, descriptor.version_tag_for(mode));
                }
            }
            Commands::Check => {
                if let Err((name, e)) = registry::validate_all() {
                    error!(component = name, "invalid version identity: {}", e);
                    bail!("Component '{}' has an invalid version identity: {}", name, e);
                }
                println!("All {} components OK", registry::names().len());
            }
        }
        return Ok(());
    }

    descriptor
        .validate()
        .with_context(|| format!("Component '{}' failed validation", cli.component))?;

    if cli.tag {
        println!("{}", descriptor.version_tag_for(mode));
    } else {
        println!("{}", descriptor.version_banner_for(mode));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tag_conflicts_with_subcommand() {
        let cli = Cli::try_parse_from(["grndsys-version", "--tag", "list"]).unwrap();
        let err = cli.check_conflicts().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_tag_alone_is_accepted() {
        let cli = Cli::try_parse_from(["grndsys-version", "--tag"]).unwrap();
        assert!(cli.check_conflicts().is_ok());

        let cli = Cli::try_parse_from(["grndsys-version", "version-info", "--json"]).unwrap();
        assert!(cli.check_conflicts().is_ok());
    }

    #[test]
    fn test_unknown_component_rejected() {
        assert!(Cli::try_parse_from(["grndsys-version", "--component", "nope"]).is_err());
    }
}
