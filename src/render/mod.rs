pub mod bounds;
pub mod classify;
mod label;
pub mod plan;
pub mod style;

pub use plan::{PlanError, RenderPlan, build_plan};
