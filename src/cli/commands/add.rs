use crate::cli::commands::{open_coordinator, report_outcome, report_saved, view_runtime};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EditingSession, StopwatchEngine};
use crate::errors::AppResult;
use crate::ui::view::{ViewKind, run_view};
use crate::utils::time::parse_hms;
use tokio::io::{BufReader, stdin};

/// Create a new crono, either directly or through the interactive stopwatch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { title, elapsed } = cmd {
        let coordinator = open_coordinator(cfg)?;

        //
        // 1. Direct save: no stopwatch involved
        //
        if let Some(raw) = elapsed {
            let millis = parse_hms(raw)?;
            let title = title.clone().unwrap_or_default();
            let record = coordinator.save_values(None, &title, millis)?;
            report_saved(&record, cfg);
            return Ok(());
        }

        //
        // 2. Interactive add view
        //
        let runtime = view_runtime()?;
        let session = EditingSession::new(StopwatchEngine::new(runtime.handle().clone()));
        if let Some(t) = title {
            session.set_title(t.clone());
        }

        let outcome = runtime.block_on(run_view(
            session,
            &coordinator,
            ViewKind::Add,
            cfg.time_format,
            BufReader::new(stdin()),
        ));
        // a pending stdin read cannot be cancelled; don't wait for it
        runtime.shutdown_background();
        let outcome = outcome?;

        report_outcome(&outcome, cfg);
    }

    Ok(())
}
