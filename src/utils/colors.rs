/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY for a crono that has never accumulated time, RESET otherwise.
pub fn color_for_elapsed(elapsed_millis: i64) -> &'static str {
    if elapsed_millis == 0 { GREY } else { RESET }
}

/// Colour a stopwatch phase label: running green, paused yellow, idle grey.
pub fn colorize_phase(label: &str, running: bool, dirty: bool) -> String {
    let color = if running {
        GREEN
    } else if dirty {
        YELLOW
    } else {
        GREY
    };
    format!("{color}{label}{RESET}")
}
