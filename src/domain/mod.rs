mod challenge;
mod geo;
mod witness;

pub use challenge::{Challenge, PathEntry, Receipt};
pub use geo::{BoundingBox, GeoPoint};
pub use witness::WitnessReport;
