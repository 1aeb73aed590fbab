use crate::cli::commands::{open_coordinator, report_outcome, report_saved, view_runtime};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EditingSession, StopwatchEngine};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::view::{ViewKind, run_view};
use crate::utils::time::parse_hms;
use tokio::io::{BufReader, stdin};

/// Edit an existing crono: direct update when flags are given, otherwise the
/// interactive view pre-loaded with the stored values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, title, elapsed } = cmd {
        let coordinator = open_coordinator(cfg)?;

        match (title, elapsed) {
            (Some(t), None) => {
                let record = coordinator.rename(*id, t)?;
                report_saved(&record, cfg);
            }
            (_, Some(raw)) => {
                let millis = parse_hms(raw)?;
                let current = coordinator.store().get_by_id(*id)?;
                let title = title.as_deref().unwrap_or(current.title.as_str());
                let record = coordinator.save_values(Some(*id), title, millis)?;
                report_saved(&record, cfg);
            }
            (None, None) => {
                let runtime = view_runtime()?;
                let engine = StopwatchEngine::new(runtime.handle().clone());
                let session = EditingSession::open(engine, &coordinator, *id)?;

                let outcome = runtime.block_on(run_view(
                    session,
                    &coordinator,
                    ViewKind::Edit,
                    cfg.time_format,
                    BufReader::new(stdin()),
                ));
                // a pending stdin read cannot be cancelled; don't wait for it
                runtime.shutdown_background();
                let outcome = outcome?;

                report_outcome(&outcome, cfg);
            }
        }
    }

    Ok(())
}
