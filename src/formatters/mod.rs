pub mod dot;
pub mod output;
pub mod report;

pub use dot::DotFormatter;
pub use output::{write_outputs, OutputPaths, DOT_FILE_NAME, REPORT_FILE_NAME};
pub use report::{most_called, top_callers, ReportFormatter};
