use angry_purple_tiger::AnimalName;

/// Human-readable label for a hotspot address, the same animal-name digest the
/// explorer shows. Falls back to the raw address when a digest cannot be built.
pub fn animal_label(address: &str) -> String {
    address.parse::<AnimalName>().map(|name| name.to_string()).unwrap_or_else(|_| address.to_string())
}

pub fn hotspot_href(address: &str) -> String {
    format!("/hotspots/{}", address)
}
