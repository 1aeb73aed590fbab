pub mod cronos;

pub use self::cronos::StopwatchRecord;
