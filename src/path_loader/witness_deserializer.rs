use crate::domain::WitnessReport;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for WitnessReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Same dual spelling as the path entry coordinates. A witness without a
        // validity flag is treated as invalid.
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            gateway: String,
            location: Option<String>,
            is_valid: Option<bool>,
            #[serde(rename = "isValid")]
            is_valid_camel: Option<bool>,
        }

        let inner = Inner::deserialize(deserializer)?;
        Ok(WitnessReport {
            gateway: inner.gateway,
            location: inner.location,
            is_valid: inner.is_valid.or(inner.is_valid_camel).unwrap_or(false),
        })
    }
}
