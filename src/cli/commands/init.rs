use crate::cli::parser::Cli;
use crate::config::StudyConfig;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default study configuration the user
/// can then edit (study window, tenure reference dates).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = StudyConfig::default();
    let path = cfg.save(cli.config.as_deref())?;

    info("Initializing spellpanel…");
    success(format!("Config file written: {}", path.display()));
    Ok(())
}
