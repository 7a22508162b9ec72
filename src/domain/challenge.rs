use crate::domain::witness::WitnessReport;
use crate::domain::GeoPoint;
use serde::Deserialize;

/// A challenge as loaded from a document: the transaction hash it came from and
/// the ordered sequence of hops in the beaconing test.
#[derive(PartialEq, Debug)]
pub struct Challenge {
    pub hash: Option<String>,
    pub path: Vec<PathEntry>,
}

/// One hop in a challenge path. Coordinates are canonical here; the dual
/// field-naming the chain API emits is resolved by the deserializer.
#[derive(PartialEq, Debug)]
pub struct PathEntry {
    pub challengee: String,
    pub challengee_lon: f64,
    pub challengee_lat: f64,
    pub receipt: Option<Receipt>,
    pub witnesses: Vec<WitnessReport>,
}

impl PathEntry {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.challengee_lon, self.challengee_lat)
    }

    /// A hop proved activity when the challengee returned a receipt or at least one witness reported its beacon.
    pub fn has_proof(&self) -> bool {
        self.receipt.is_some() || !self.witnesses.is_empty()
    }
}

// API: https://docs.helium.com/api/blockchain/transactions, poc_receipts_v1. Only
// presence matters for classification.
#[allow(dead_code)]
#[derive(PartialEq, Debug, Deserialize)]
pub struct Receipt {
    pub timestamp: Option<u64>,
    pub signal: Option<i32>,
    pub origin: Option<String>,
    pub data: Option<String>,
}
