/// A gateway that reported hearing a beacon. `location` is the H3 cell index of
/// the reporting gateway, when the chain knows it.
#[derive(PartialEq, Debug)]
pub struct WitnessReport {
    pub gateway: String,
    pub location: Option<String>,
    pub is_valid: bool,
}
