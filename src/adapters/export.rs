use crate::domain::model::RevenueEvent;
use crate::utils::error::Result;
use std::path::Path;

/// Writes the flattened revenue events to a CSV file, one row per event, in
/// flattened order. The file is the raw/debug view in tabular form.
pub fn export_events_csv(events: &[RevenueEvent], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    // Explicit header so an empty report still yields a well-formed file.
    writer.write_record(["date", "team", "resource", "amount"])?;
    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;
    Ok(())
}
