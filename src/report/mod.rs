//! Result tables and console output for finished party passes.

mod console;
mod files;
mod table;

pub use console::console_summary;
pub use files::ReportFiles;
pub use table::{audit_frame, state_frame, summary_frame};
