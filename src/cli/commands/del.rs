use crate::cli::commands::open_coordinator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let coordinator = open_coordinator(cfg)?;

        // fails with NotFound before asking anything
        let record = coordinator.store().get_by_id(*id)?;

        //
        // Confirmation prompt
        //
        if !*force && cfg.confirm_delete {
            let prompt = format!(
                "Delete crono #{} '{}'? This action is irreversible.",
                record.id, record.title
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        coordinator.delete(*id)?;
        success(format!("Crono #{} has been deleted.", id));
    }

    Ok(())
}
