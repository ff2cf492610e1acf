mod store;
mod summary;
mod types;

pub use store::{REPORT_FILENAME, ReportStore};
pub use summary::{
    ChangeKind, CheckSummary, DriftEntry, DriftStatus, ReportChange, compare_reports, summarize,
};
pub use types::{BaseHash, CheckMapItemFileOutput, CheckMapItemOutput, CheckOutput, CorrespondHash};
