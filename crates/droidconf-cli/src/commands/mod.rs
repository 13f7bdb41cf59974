//! Command dispatch and handler modules.

mod properties;
mod render;
mod resolve;

use std::collections::BTreeMap;
use std::path::PathBuf;

use miette::Result;

use droidconf_ops::ops_resolve::ResolveOptions;
use droidconf_util::errors::ConfigError;

use crate::cli::{Cli, Command, ResolveArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            resolve: args,
            pretty,
        } => resolve::exec(options(args)?, pretty),
        Command::Render {
            template,
            resolve: args,
            output,
        } => render::exec(options(args)?, &template, output.as_deref()),
        Command::Properties {
            properties: path,
            reveal,
        } => properties::exec(from_cwd(path)?.as_deref(), reveal),
    }
}

/// Capture the process environment once, at the edge, so resolution itself
/// only ever sees an explicit snapshot.
fn options(args: ResolveArgs) -> Result<ResolveOptions> {
    let env: BTreeMap<String, String> = std::env::vars().collect();
    Ok(ResolveOptions {
        build_type: args.build_type,
        properties: from_cwd(args.properties)?,
        env,
    })
}

/// Paths given on the command line are relative to where the user runs
/// droidconf, not to the project root.
fn from_cwd(path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) if path.is_relative() => {
            let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
            Ok(Some(cwd.join(path)))
        }
        other => Ok(other),
    }
}
