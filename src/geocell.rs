use crate::domain::GeoPoint;
use h3o::{CellIndex, LatLng};
use tracing::warn;

/// Resolves an H3 cell index to the cell's center point. An absent or
/// malformed index maps to the origin.
pub fn locate(cell: Option<&str>) -> GeoPoint {
    let Some(cell) = cell else {
        return GeoPoint::origin();
    };

    match cell.parse::<CellIndex>() {
        Ok(index) => {
            let center = LatLng::from(index);
            GeoPoint::new(center.lng(), center.lat())
        }
        Err(err) => {
            warn!("⚠️ Ignoring invalid H3 cell index '{}': {}", cell, err);
            GeoPoint::origin()
        }
    }
}
