pub mod account;
pub mod assess;
pub mod check;
pub mod init;
pub mod lang;
pub mod translate;

use std::path::PathBuf;

use anyhow::Result;

use super::args::CommonArgs;
use crate::context::ProjectContext;

/// Load the project context for a command.
///
/// Priority: CLI --root arg > current directory.
pub fn load_context(common: &CommonArgs) -> Result<ProjectContext> {
    let root = common.root.clone().unwrap_or_else(|| PathBuf::from("."));
    ProjectContext::new(root, &common.overrides(), common.verbose)
}
