use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::env;
use std::fs;
use std::process::Command as Proc;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning("No configuration file found. Run `offerdesk init` first.");
            }
            return Ok(());
        }

        if *edit_config {
            let chosen = editor
                .clone()
                .or_else(|| env::var("EDITOR").ok())
                .unwrap_or_else(|| default_editor().to_string());

            info(format!("Opening {} with {}", path.display(), chosen));
            let status = Proc::new(&chosen).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!("editor '{chosen}' exited with an error")));
            }
            return Ok(());
        }

        warning("Nothing to do: pass --print or --edit");
    }
    Ok(())
}

fn default_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}
