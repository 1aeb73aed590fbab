use crate::cli::commands::open_coordinator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_elapsed};
use crate::utils::table::{Table, printable};
use crate::utils::time::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let coordinator = open_coordinator(cfg)?;
        let records = coordinator.list()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if records.is_empty() {
            info("No cronos saved yet. Create one with `cronos add`.");
            return Ok(());
        }

        let mut table = Table::new(["ID", "TITLE", "TIME"]);
        for r in &records {
            table.add_row(vec![
                r.id.to_string(),
                printable(&r.title),
                render(r.elapsed_millis, cfg.time_format),
            ]);
        }

        // colour whole lines afterwards so escape codes stay out of the width math
        let rendered = table.render();
        let mut lines = rendered.lines();
        for line in lines.by_ref().take(2) {
            println!("{}", line);
        }
        for (line, r) in lines.zip(&records) {
            println!("{}{}{}", color_for_elapsed(r.elapsed_millis), line, RESET);
        }
        println!("\n{} crono(s)", records.len());
    }
    Ok(())
}
