use crate::domain::{BoundingBox, GeoPoint, PathEntry};
use crate::geocell;
use thiserror::Error;

/// Smallest box containing every point. Fitting an empty set is an error;
/// callers are expected to reject empty paths before rendering.
pub fn find_bounds(points: &[GeoPoint]) -> Result<BoundingBox, BoundsError> {
    let Some(first) = points.first() else {
        return Err(BoundsError::NoPoints);
    };

    let mut sw = *first;
    let mut ne = *first;
    for point in &points[1..] {
        sw.lng = sw.lng.min(point.lng);
        sw.lat = sw.lat.min(point.lat);
        ne.lng = ne.lng.max(point.lng);
        ne.lat = ne.lat.max(point.lat);
    }

    Ok(BoundingBox { sw, ne })
}

/// The locations the viewport has to cover. A single-entry path is a completed
/// beacon challenge: its witnesses always weigh in on the bounds, even when
/// witness features are not drawn. Longer paths only include witness locations
/// when witnesses are shown.
pub fn fit_points(path: &[PathEntry], show_witnesses: bool) -> Vec<GeoPoint> {
    let mut points = Vec::new();

    if let [entry] = path {
        for witness in &entry.witnesses {
            points.push(geocell::locate(witness.location.as_deref()));
        }
        points.push(entry.point());
    } else {
        for entry in path {
            points.push(entry.point());
            if show_witnesses {
                for witness in &entry.witnesses {
                    points.push(geocell::locate(witness.location.as_deref()));
                }
            }
        }
    }

    points
}

#[derive(Error, Debug)]
pub enum BoundsError {
    #[error("cannot fit bounds around an empty set of points")]
    NoPoints,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WitnessReport;
    use h3o::{LatLng, Resolution};

    fn cell(lat: f64, lng: f64) -> String {
        LatLng::new(lat, lng).unwrap().to_cell(Resolution::Twelve).to_string()
    }

    fn entry(lng: f64, lat: f64, witnesses: Vec<WitnessReport>) -> PathEntry {
        PathEntry {
            challengee: "hotspot".to_string(),
            challengee_lon: lng,
            challengee_lat: lat,
            receipt: None,
            witnesses,
        }
    }

    fn witness(location: Option<String>) -> WitnessReport {
        WitnessReport {
            gateway: "witness".to_string(),
            location,
            is_valid: true,
        }
    }

    #[test]
    fn every_input_point_is_contained_in_the_bounds() {
        let points = vec![
            GeoPoint::new(4.899431, 52.379189),
            GeoPoint::new(-0.127758, 51.507351),
            GeoPoint::new(13.404954, 52.520008),
            GeoPoint::new(2.352222, 48.856613),
        ];

        let bounds = find_bounds(&points).unwrap();

        for point in &points {
            assert!(bounds.contains(point), "expected {:?} to be inside {:?}", point, bounds);
        }
    }

    #[test]
    fn a_single_point_yields_a_degenerate_box() {
        let point = GeoPoint::new(1.0, 2.0);

        let bounds = find_bounds(&[point]).unwrap();

        assert_eq!(bounds.sw, point);
        assert_eq!(bounds.ne, point);
    }

    #[test]
    fn no_points_is_an_error() {
        let result = find_bounds(&[]);

        assert!(matches!(result, Err(BoundsError::NoPoints)));
    }

    #[test]
    fn a_beacon_challenge_includes_witnesses_even_when_they_are_not_drawn() {
        let path = vec![entry(4.899431, 52.379189, vec![witness(Some(cell(52.0, 4.0))), witness(Some(cell(52.5, 5.0)))])];

        let points = fit_points(&path, false);

        assert_eq!(points.len(), 3);
    }

    #[test]
    fn a_multi_hop_path_ignores_witnesses_unless_they_are_drawn() {
        let path = vec![
            entry(4.899431, 52.379189, vec![witness(Some(cell(52.0, 4.0)))]),
            entry(4.895168, 52.370216, vec![]),
        ];

        assert_eq!(fit_points(&path, false).len(), 2);
        assert_eq!(fit_points(&path, true).len(), 3);
    }

    #[test]
    fn a_witness_without_a_location_counts_as_the_origin() {
        let path = vec![entry(1.0, 2.0, vec![witness(None)])];

        let points = fit_points(&path, false);

        assert_eq!(points[0], GeoPoint::origin());
    }
}
