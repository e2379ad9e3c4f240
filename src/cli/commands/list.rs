use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { offers } = cmd {
        let store = Store::open(&cfg.database)?;

        if *offers {
            list_offers(&store)?;
        } else {
            list_employees(&store)?;
        }
    }
    Ok(())
}

fn list_employees(store: &Store) -> AppResult<()> {
    let mut table = Table::new(&[
        "ID", "NAME", "POSITION", "START DATE", "LOCATION", "SALARY", "BENEFITS",
    ]);

    for e in store.employees()? {
        table.add_row(vec![
            e.id,
            e.name,
            e.position,
            e.start_date,
            e.location,
            e.salary.to_string(),
            e.benefits,
        ]);
    }

    if table.is_empty() {
        info("No employee records found");
    } else {
        print!("{}", table.render());
    }
    Ok(())
}

fn list_offers(store: &Store) -> AppResult<()> {
    let mut table = Table::new(&["ID", "EMPLOYEE", "ACCEPTED", "PARAGRAPHS"]);

    for o in store.offers()? {
        table.add_row(vec![
            o.id,
            o.employee_id,
            (if o.accepted { "yes" } else { "no" }).to_string(),
            o.content.len().to_string(),
        ]);
    }

    if table.is_empty() {
        info("No offers generated yet");
    } else {
        print!("{}", table.render());
    }
    Ok(())
}
