//! Plan layer: JSON schema + validated in-memory structures.
//!
//! This module is intentionally separate from roster parsing and rendering.
//! It owns:
//! - the plan.json shape (month axis, phases, departments)
//! - boundary sanitization (bad numbers become 0, never errors)
//! - structural validation (unique names, timeframes on the axis)

pub mod plan;

pub use plan::{DepartmentSpec, PhaseSpec, PlanSpec, RawDepartment, ValidatedPlan};
