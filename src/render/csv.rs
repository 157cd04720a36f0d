//! Timeline CSV export, laid out the way planning spreadsheets expect:
//! year band, month labels, one row per department, then totals.

use crate::Result;
use crate::model::ReportData;

use anyhow::Context;

/// Render the crew matrix and cost totals as one CSV document.
///
/// Active months with zero crew never occur (the curve builder guarantees
/// at least 1), so empty cells always mean "outside the timeframe".
pub fn render_timeline_csv(data: &ReportData) -> Result<String> {
    let total_months = data.month_labels.len();
    let mut writer = csv::Writer::from_writer(Vec::new());

    write_title_row(&mut writer, "Timeline Data", total_months)?;
    writer.write_record(blank_row(total_months))?;

    // Year band: "Y1" at each January, blank elsewhere.
    let mut year_row = vec![String::new()];
    for month in 0..total_months {
        year_row.push(if month % 12 == 0 {
            format!("Y{}", month / 12 + 1)
        } else {
            String::new()
        });
    }
    writer.write_record(&year_row)?;

    let mut month_row = vec![String::new()];
    month_row.extend(data.month_labels.iter().cloned());
    writer.write_record(&month_row)?;

    for dept in &data.departments {
        let mut row = vec![dept.name.clone()];
        row.extend(dept.curve.iter().map(|&crew| count_cell(u64::from(crew))));
        writer.write_record(&row)?;
    }

    writer.write_record(blank_row(total_months))?;

    write_values_row(&mut writer, "Total Crew", &data.monthly_crew)?;
    write_values_row(&mut writer, "Monthly Cost", &data.monthly_cost)?;
    write_values_row(&mut writer, "Cumulative Cost", &data.cumulative_cost)?;

    let bytes = writer.into_inner().context("flush timeline csv")?;
    String::from_utf8(bytes).context("timeline csv was not utf-8")
}

fn write_title_row(writer: &mut csv::Writer<Vec<u8>>, title: &str, total_months: usize) -> Result<()> {
    let mut row = vec![title.to_string()];
    row.extend(std::iter::repeat_n(String::new(), total_months));
    writer.write_record(&row)?;
    Ok(())
}

fn write_values_row<T>(writer: &mut csv::Writer<Vec<u8>>, label: &str, values: &[T]) -> Result<()>
where
    T: Copy + Into<u64>,
{
    let mut row = vec![label.to_string()];
    row.extend(values.iter().map(|&v| count_cell(v.into())));
    writer.write_record(&row)?;
    Ok(())
}

fn blank_row(total_months: usize) -> Vec<String> {
    vec![String::new(); total_months + 1]
}

/// Zeroes render as empty cells, matching the planning grid.
fn count_cell(value: u64) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
