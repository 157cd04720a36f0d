//! Crew staffing planner: turn a department plan into per-month crew
//! curves, cost totals, and report/CSV output.
//!
//! Pipeline: parse plan.json (+ optional roster CSV) -> validate ->
//! build curves and aggregates -> render.

pub mod curve;
pub mod model;
pub mod render;
pub mod roster;
pub mod spec;

pub type Result<T> = anyhow::Result<T>;
