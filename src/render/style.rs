use serde::{Deserialize, Serialize};

/// Marker and line styling for every feature kind a plan can emit. The theme is
/// configuration data; the defaults reproduce the explorer palette.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub gateway_success: MarkerStyle,
    pub gateway_failed: MarkerStyle,
    pub witness_marker_valid: MarkerStyle,
    pub witness_marker_invalid: MarkerStyle,
    pub line_success: LineStyle,
    pub line_failure: LineStyle,
    pub witness_line_valid: LineStyle,
    pub witness_line_invalid: LineStyle,
}

impl Theme {
    pub fn marker(&self, kind: MarkerKind) -> &MarkerStyle {
        match kind {
            MarkerKind::GatewaySuccess => &self.gateway_success,
            MarkerKind::GatewayFailed => &self.gateway_failed,
            MarkerKind::WitnessValid => &self.witness_marker_valid,
            MarkerKind::WitnessInvalid => &self.witness_marker_invalid,
        }
    }

    pub fn line(&self, kind: LineKind) -> &LineStyle {
        match kind {
            LineKind::Success => &self.line_success,
            LineKind::Failure => &self.line_failure,
            LineKind::WitnessValid => &self.witness_line_valid,
            LineKind::WitnessInvalid => &self.witness_line_invalid,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            gateway_success: MarkerStyle::circle("#09b851", "#059540"),
            gateway_failed: MarkerStyle::circle("#ca0926", "#9f081f"),
            witness_marker_valid: MarkerStyle::circle("#f1c40f", "#b7950b"),
            witness_marker_invalid: MarkerStyle::circle("#808080", "#696969"),
            line_success: LineStyle::solid("#09b851"),
            line_failure: LineStyle::solid("#ca0926"),
            witness_line_valid: LineStyle::faded("#f1c40f"),
            witness_line_invalid: LineStyle::faded("#808080"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub size: u32,
    pub fill: String,
    pub border: String,
    pub border_width: u32,
}

impl MarkerStyle {
    fn circle(fill: &str, border: &str) -> Self {
        MarkerStyle {
            size: 14,
            fill: fill.to_string(),
            border: border.to_string(),
            border_width: 3,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: u32,
    pub opacity: f64,
}

impl LineStyle {
    fn solid(color: &str) -> Self {
        LineStyle {
            color: color.to_string(),
            width: 2,
            opacity: 1.0,
        }
    }

    fn faded(color: &str) -> Self {
        LineStyle {
            color: color.to_string(),
            width: 2,
            opacity: 0.3,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    GatewaySuccess,
    GatewayFailed,
    WitnessValid,
    WitnessInvalid,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Success,
    Failure,
    WitnessValid,
    WitnessInvalid,
}
