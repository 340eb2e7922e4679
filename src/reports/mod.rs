use std::error::Error;
use std::path::{Path, PathBuf};
use crate::errors::ExtractError;
use crate::format::LogFormat;
use crate::gain::TieBreak;
use crate::logger::Logger;

/// Everything a report needs to know about the run
pub struct ReportContext {
    pub log_path: PathBuf,
    pub format: LogFormat,
    pub tie_break: TieBreak,
    /// Where charts go; `None` skips rendering
    pub charts_dir: Option<PathBuf>,
}

/// Function type for report entry functions
pub type ReportFn = fn(context: &ReportContext, logger: &mut Logger) -> Result<(), Box<dyn Error>>;

/// Entry in the report catalog
#[derive(Clone)]
pub struct ReportEntry {
    pub short_name: &'static str,
    pub description: &'static str,
    pub run: ReportFn,
}

// Create an inventory collection for report entries
inventory::collect!(ReportEntry);

/// Get all registered reports, sorted by name
pub fn get_report_catalog() -> Vec<ReportEntry> {
    let mut catalog: Vec<ReportEntry> = inventory::iter::<ReportEntry>
        .into_iter()
        .cloned()
        .collect();
    catalog.sort_by_key(|entry| entry.short_name);
    catalog
}

pub fn find_report(short_name: &str) -> Option<ReportEntry> {
    get_report_catalog().into_iter().find(|entry| entry.short_name == short_name)
}

/// Read the whole log up front; nothing is processed from a partial read
pub fn read_log(path: &Path) -> Result<String, ExtractError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Create the charts directory if charts are wanted
fn prepare_charts_dir(context: &ReportContext) -> std::io::Result<Option<&Path>> {
    match &context.charts_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(Some(dir.as_path()))
        }
        None => Ok(None),
    }
}

// Report modules
pub mod bid_gain;
pub mod min_cost;
