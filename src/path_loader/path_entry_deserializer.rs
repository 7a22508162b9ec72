use crate::domain::{PathEntry, Receipt, WitnessReport};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for PathEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The chain API spells coordinates both ways, sometimes within one
        // document. snake_case wins when both are present; absent coordinates
        // map to the origin instead of failing the document.
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            challengee: String,
            challengee_lon: Option<f64>,
            #[serde(rename = "challengeeLon")]
            challengee_lon_camel: Option<f64>,
            challengee_lat: Option<f64>,
            #[serde(rename = "challengeeLat")]
            challengee_lat_camel: Option<f64>,
            receipt: Option<Receipt>,
            #[serde(default)]
            witnesses: Vec<WitnessReport>,
        }

        let inner = Inner::deserialize(deserializer)?;
        Ok(PathEntry {
            challengee: inner.challengee,
            challengee_lon: inner.challengee_lon.or(inner.challengee_lon_camel).unwrap_or(0.0),
            challengee_lat: inner.challengee_lat.or(inner.challengee_lat_camel).unwrap_or(0.0),
            receipt: inner.receipt,
            witnesses: inner.witnesses,
        })
    }
}
