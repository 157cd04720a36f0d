//! Plan spec (plan.json): month axis, phases, and department definitions.
//!
//! JSON shape:
//! {
//!   "years": 4,
//!   "phases": [
//!     { "name": "Asset Build", "start_month": 11, "end_month": 36 }
//!   ],
//!   "departments": [
//!     {
//!       "name": "Animation",
//!       "max_crew": 18,
//!       "start_month": 12,
//!       "end_month": 36,
//!       "ramp_up": 4,          // months climbing to max_crew
//!       "ramp_down": 3,        // months winding back down
//!       "rate": 9000           // cost per person-month, optional
//!     },
//!     ...
//!   ]
//! }
//!
//! We sanitize the numbers, enforce unique department names, correct
//! inverted timeframes, and clamp ramp durations so every department keeps
//! at least one plateau month.

use crate::Result;
use crate::curve;

use anyhow::bail;
use serde::Deserialize;
use std::collections::BTreeSet;

const MAX_YEARS: u32 = 100;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Deserialize)]
pub struct PlanSpec {
    /// Length of the month axis in years. Defaults to 4 like the sample
    /// plans this tool grew up on.
    #[serde(default = "default_years")]
    pub years: u32,

    #[serde(default)]
    pub phases: Vec<RawPhase>,

    #[serde(default)]
    pub departments: Vec<RawDepartment>,
}

fn default_years() -> u32 {
    4
}

/// Raw department shape as it appears in plan.json or a roster CSV row.
///
/// Numeric fields deserialize as f64 so that negative or fractional input
/// can be coerced instead of rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDepartment {
    pub name: String,

    #[serde(default)]
    pub max_crew: f64,

    #[serde(default)]
    pub start_month: f64,

    #[serde(default)]
    pub end_month: f64,

    #[serde(default)]
    pub ramp_up: f64,

    #[serde(default)]
    pub ramp_down: f64,

    #[serde(default)]
    pub rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPhase {
    pub name: String,

    #[serde(default)]
    pub start_month: f64,

    #[serde(default)]
    pub end_month: f64,
}

/// Validated department ready for curve building. Ramps are already
/// normalized, so `ramp_up + ramp_down < duration` holds.
#[derive(Debug, Clone)]
pub struct DepartmentSpec {
    pub name: String,
    pub max_crew: u32,
    pub start_month: u32,
    pub end_month: u32,
    pub ramp_up: u32,
    pub ramp_down: u32,
    pub rate: u32,
}

#[derive(Debug, Clone)]
pub struct PhaseSpec {
    pub name: String,
    pub start_month: u32,
    pub end_month: u32,
}

#[derive(Debug, Clone)]
pub struct ValidatedPlan {
    pub total_months: usize,
    pub month_labels: Vec<String>,
    pub phases: Vec<PhaseSpec>,
    pub departments: Vec<DepartmentSpec>,
}

impl PlanSpec {
    /// Sanitize and validate the raw plan.
    ///
    /// This function performs three major phases:
    /// 1) Build the month axis from `years`.
    /// 2) Sanitize and validate departments (coerce bad numbers, unique
    ///    names, start on the axis, end after start, ramps normalized).
    /// 3) Sanitize phases (same timeframe correction, no uniqueness rule).
    pub fn validate_and_build(&self) -> Result<ValidatedPlan> {
        // Phase 1: month axis.
        if self.years == 0 {
            bail!("plan.json must cover at least one year");
        }
        if self.years > MAX_YEARS {
            bail!(
                "plan.json covers {} years; the month axis tops out at {}",
                self.years,
                MAX_YEARS
            );
        }
        let total_months = self.years as usize * 12;
        let month_labels = (0..total_months)
            .map(|m| format!("{} Y{}", MONTH_NAMES[m % 12], m / 12 + 1))
            .collect();

        // Phase 2: departments.
        if self.departments.is_empty() {
            bail!("plan.json contained no departments");
        }

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut departments = Vec::with_capacity(self.departments.len());
        for raw in &self.departments {
            let name = raw.name.trim();
            if name.is_empty() {
                bail!("department with empty name in plan.json");
            }
            if !seen.insert(name) {
                bail!("duplicate department name in plan.json: {}", name);
            }

            let start_month = sanitize_count(raw.start_month);
            if (start_month as usize) >= total_months {
                bail!(
                    "department '{}' starts at month {} but the plan only has {} months",
                    name,
                    start_month,
                    total_months
                );
            }

            // End month must come after the start and stay near the axis;
            // anything past it would only feed months nobody can see.
            let axis_end = (total_months - 1) as u32;
            let mut end_month = sanitize_count(raw.end_month);
            if end_month <= start_month {
                end_month = start_month + 1;
            }
            if end_month > axis_end {
                eprintln!(
                    "WARN: department '{}' ends at month {} but the plan ends at month {}; clipping",
                    name, end_month, axis_end
                );
                // A start on the final axis month degenerates to a
                // one-month timeframe here (end == start).
                end_month = axis_end;
            }

            let duration = end_month - start_month + 1;
            let (ramp_up, ramp_down) = curve::normalize_ramp(
                sanitize_count(raw.ramp_up),
                sanitize_count(raw.ramp_down),
                duration,
            );

            departments.push(DepartmentSpec {
                name: name.to_string(),
                max_crew: sanitize_count(raw.max_crew),
                start_month,
                end_month,
                ramp_up,
                ramp_down,
                rate: sanitize_count(raw.rate),
            });
        }

        // Phase 3: phases are labels for the report header, so only the
        // inverted-timeframe correction applies.
        let mut phases = Vec::with_capacity(self.phases.len());
        for raw in &self.phases {
            let start_month = sanitize_count(raw.start_month);
            let mut end_month = sanitize_count(raw.end_month);
            if end_month <= start_month {
                end_month = start_month.saturating_add(1);
            }
            phases.push(PhaseSpec {
                name: raw.name.trim().to_string(),
                start_month,
                end_month,
            });
        }

        Ok(ValidatedPlan {
            total_months,
            month_labels,
            phases,
            departments,
        })
    }
}

/// Coerce a raw numeric field to a count: negative, NaN, and infinite
/// values become 0, fractions are truncated.
fn sanitize_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.min(f64::from(u32::MAX)) as u32
}
