//! Aggregation model: combine the validated plan with computed crew curves.

use crate::curve;
use crate::spec::ValidatedPlan;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentView {
    pub name: String,
    pub max_crew: u32,
    pub start_month: u32,
    pub end_month: u32,
    pub ramp_up: u32,
    pub ramp_down: u32,
    pub rate: u32,

    /// One crew count per month on the global axis.
    pub curve: Vec<u32>,

    /// Sum of the curve.
    pub man_months: u64,

    /// `Σ curve[m] * rate` over the axis.
    pub labor_cost: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseView {
    pub name: String,
    pub start_month: u32,
    pub end_month: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub departments: usize,
    pub total_months: usize,
    pub total_man_months: u64,
    pub total_labor_cost: u64,
    /// Largest total crew across the axis, and the first month attaining it.
    pub peak_crew: u32,
    pub peak_crew_month: usize,
    pub peak_monthly_cost: u64,
    pub peak_cost_month: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub month_labels: Vec<String>,
    pub phases: Vec<PhaseView>,
    pub departments: Vec<DepartmentView>,

    /// Column sums of the department curves.
    pub monthly_crew: Vec<u32>,
    pub monthly_cost: Vec<u64>,
    pub cumulative_cost: Vec<u64>,

    pub totals: TotalsView,
}

/// Build report data from a validated plan: one curve per department plus
/// the column sums, cost rows, and peak/total aggregates.
pub fn build_report_data(plan: &ValidatedPlan) -> ReportData {
    let total_months = plan.total_months;

    let mut departments: Vec<DepartmentView> = Vec::with_capacity(plan.departments.len());
    let mut monthly_crew = vec![0u32; total_months];
    let mut monthly_cost = vec![0u64; total_months];

    for dept in &plan.departments {
        let curve = curve::build_crew_curve(
            dept.start_month,
            dept.end_month,
            dept.ramp_up,
            dept.ramp_down,
            dept.max_crew,
            total_months,
        );

        let mut man_months = 0u64;
        for (month, &crew) in curve.iter().enumerate() {
            man_months += u64::from(crew);
            monthly_crew[month] += crew;
            monthly_cost[month] += u64::from(crew) * u64::from(dept.rate);
        }
        let labor_cost = man_months * u64::from(dept.rate);

        departments.push(DepartmentView {
            name: dept.name.clone(),
            max_crew: dept.max_crew,
            start_month: dept.start_month,
            end_month: dept.end_month,
            ramp_up: dept.ramp_up,
            ramp_down: dept.ramp_down,
            rate: dept.rate,
            curve,
            man_months,
            labor_cost,
        });
    }

    let mut cumulative_cost = Vec::with_capacity(total_months);
    let mut running = 0u64;
    for &cost in &monthly_cost {
        running += cost;
        cumulative_cost.push(running);
    }

    let (peak_crew_month, peak_crew) = peak(&monthly_crew);
    let (peak_cost_month, peak_monthly_cost) = peak(&monthly_cost);

    let totals = TotalsView {
        departments: departments.len(),
        total_months,
        total_man_months: departments.iter().map(|d| d.man_months).sum(),
        total_labor_cost: departments.iter().map(|d| d.labor_cost).sum(),
        peak_crew,
        peak_crew_month,
        peak_monthly_cost,
        peak_cost_month,
    };

    ReportData {
        month_labels: plan.month_labels.clone(),
        phases: plan
            .phases
            .iter()
            .map(|p| PhaseView {
                name: p.name.clone(),
                start_month: p.start_month,
                end_month: p.end_month,
            })
            .collect(),
        departments,
        monthly_crew,
        monthly_cost,
        cumulative_cost,
        totals,
    }
}

/// First index attaining the maximum, or (0, 0) for an empty axis.
fn peak<T: Copy + Default + Ord>(values: &[T]) -> (usize, T) {
    let mut best = (0usize, T::default());
    for (month, &value) in values.iter().enumerate() {
        if value > best.1 {
            best = (month, value);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::PlanSpec;
    use pretty_assertions::assert_eq;

    fn report_from(json: &str) -> ReportData {
        let plan: PlanSpec = serde_json::from_str(json).expect("plan json");
        build_report_data(&plan.validate_and_build().expect("valid plan"))
    }

    #[test]
    fn monthly_crew_is_the_column_sum() {
        let data = report_from(
            r#"{ "years": 1, "departments": [
                { "name": "Layout", "max_crew": 2, "start_month": 0, "end_month": 5 },
                { "name": "Animation", "max_crew": 3, "start_month": 3, "end_month": 8 }
            ] }"#,
        );

        for month in 0..12 {
            let column: u32 = data.departments.iter().map(|d| d.curve[month]).sum();
            assert_eq!(data.monthly_crew[month], column, "month {}", month);
        }
        assert_eq!(data.monthly_crew[4], 5);
        assert_eq!(data.monthly_crew[9], 0);
    }

    #[test]
    fn costs_follow_the_curve_and_accumulate() {
        let data = report_from(
            r#"{ "years": 1, "departments": [
                { "name": "Layout", "max_crew": 2, "start_month": 0, "end_month": 3,
                  "rate": 1000 }
            ] }"#,
        );

        assert_eq!(data.departments[0].man_months, 8);
        assert_eq!(data.departments[0].labor_cost, 8000);
        assert_eq!(data.monthly_cost[0], 2000);
        assert_eq!(data.cumulative_cost[3], 8000);
        assert_eq!(data.cumulative_cost[11], 8000);
        assert_eq!(data.totals.total_labor_cost, 8000);
    }

    #[test]
    fn peaks_report_the_first_attaining_month() {
        let data = report_from(
            r#"{ "years": 1, "departments": [
                { "name": "Layout", "max_crew": 4, "start_month": 2, "end_month": 7,
                  "rate": 100 }
            ] }"#,
        );

        assert_eq!(data.totals.peak_crew, 4);
        assert_eq!(data.totals.peak_crew_month, 2);
        assert_eq!(data.totals.peak_cost_month, 2);
        assert_eq!(data.totals.peak_monthly_cost, 400);
    }
}
