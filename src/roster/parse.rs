//! CSV parsing for the department roster.

use crate::Result;
use crate::spec::RawDepartment;

use anyhow::Context;

/// Parse a roster CSV file into raw department rows.
///
/// Expected header (rate is optional):
/// name,max_crew,start_month,end_month,ramp_up,ramp_down,rate
///
/// Example:
/// Animation,18,12,36,4,3,9000
///
/// Numbers are sanitized later, together with plan.json departments; here a
/// row only fails if it is structurally malformed.
pub fn parse_roster_file(path: &str) -> Result<Vec<RawDepartment>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("read roster file {}", path))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RawDepartment>().enumerate() {
        let row = record.with_context(|| format!("bad roster row at {}:{}", path, idx + 2))?;
        rows.push(row);
    }
    Ok(rows)
}
