use crate::cli::parser::Commands;
use crate::config::StudyConfig;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &StudyConfig) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *check {
            cfg.validate()?;
            success(format!(
                "Configuration valid: window {} → {} ({} days)",
                cfg.window_start,
                cfg.window_end,
                cfg.window_days()
            ));
        }
    }

    Ok(())
}
