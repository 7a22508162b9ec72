use serde::Serialize;

#[derive(Clone, Copy, Default, PartialEq, Debug, Serialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        GeoPoint { lng, lat }
    }

    pub fn origin() -> Self {
        GeoPoint::default()
    }
}

/// Axis-aligned box spanned by its southwest and northeast corners.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct BoundingBox {
    pub sw: GeoPoint,
    pub ne: GeoPoint,
}

impl BoundingBox {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lng >= self.sw.lng && point.lng <= self.ne.lng && point.lat >= self.sw.lat && point.lat <= self.ne.lat
    }
}
