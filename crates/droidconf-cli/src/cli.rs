//! CLI argument definitions for droidconf.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "droidconf",
    version,
    about = "Resolve the Android build configuration of a cross-platform app",
    long_about = "droidconf merges Droidconf.toml, local.properties and framework defaults \
                  into a validated build descriptor for the Android packager."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by every command that resolves the project.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build type to resolve (debug, release, or one from [build-types])
    #[arg(short, long, default_value = "debug")]
    pub build_type: String,
    /// Properties file to read instead of local.properties
    #[arg(long, env = "DROIDCONF_PROPERTIES")]
    pub properties: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build descriptor and print it as JSON
    Resolve {
        #[command(flatten)]
        resolve: ResolveArgs,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Substitute manifest placeholders into a template
    Render {
        /// Manifest template (e.g. app/src/main/AndroidManifest.xml)
        template: PathBuf,
        #[command(flatten)]
        resolve: ResolveArgs,
        /// Write the rendered manifest here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show entries of the local properties file
    Properties {
        /// Properties file to read instead of local.properties
        #[arg(long, env = "DROIDCONF_PROPERTIES")]
        properties: Option<PathBuf>,
        /// Show actual values instead of masked values
        #[arg(long)]
        reveal: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
