//! Roster import: a CSV department table merged into the plan.

pub mod parse;

pub use parse::parse_roster_file;

use crate::spec::RawDepartment;

/// Merge roster rows into a plan's department list.
///
/// A row whose name matches an existing department (after trimming)
/// replaces it in place; unknown names are appended in file order.
pub fn merge_departments(departments: &mut Vec<RawDepartment>, rows: Vec<RawDepartment>) {
    for row in rows {
        match departments
            .iter_mut()
            .find(|d| d.name.trim() == row.name.trim())
        {
            Some(existing) => *existing = row,
            None => departments.push(row),
        }
    }
}
