use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Store, maintenance};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
        reset,
    } = cmd
    {
        let mut store = Store::open(&cfg.database)?;

        if *reset {
            store.clear_all()?;
            success("All employee and offer records deleted");
        }

        if *check {
            let result = maintenance::integrity_check(&store)?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity: {result}"));
            }
        }

        if *vacuum {
            maintenance::vacuum(&store)?;
            success("Database optimized");
        }

        if *show_info {
            let i = maintenance::info(&store, &cfg.database)?;
            println!("Database:       {}", i.path);
            println!("Size:           {} bytes", i.size_bytes);
            println!("Schema version: {}", i.schema_version);
            println!("Employees:      {}", i.employees);
            println!("Offers:         {}", i.offers);
        }

        if !*check && !*vacuum && !*show_info && !*reset {
            info("Nothing to do: pass --check, --vacuum, --info or --reset");
        }
    }
    Ok(())
}
