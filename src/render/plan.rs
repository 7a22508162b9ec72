use crate::app_config::AppConfig;
use crate::domain::{BoundingBox, Challenge, GeoPoint};
use crate::geocell;
use crate::render::bounds::{self, BoundsError};
use crate::render::classify::{self, Outcome};
use crate::render::label;
use crate::render::style::{LineKind, LineStyle, MarkerKind, MarkerStyle};
use serde::Serialize;
use thiserror::Error;

/// Everything a map front end needs to draw one challenge: the viewport to fit
/// and the markers and lines to place. Serialized camelCase for the JavaScript
/// consumer.
#[derive(PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    pub viewport: Viewport,
    pub markers: Vec<Marker>,
    pub lines: Vec<Line>,
}

#[derive(PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub style_url: String,
    pub access_token: String,
    pub bounds: BoundingBox,
    pub padding: u32,
    pub animate: bool,
    pub moving_method: String,
}

#[derive(PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub coordinates: GeoPoint,
    pub kind: MarkerKind,
    pub style: MarkerStyle,
    pub label: String,
    pub href: String,
    /// 1-based position along the path, drawn inside the marker. Witness markers carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<usize>,
}

#[derive(PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub kind: LineKind,
    pub style: LineStyle,
}

pub fn build_plan(challenge: &Challenge, show_witnesses: bool, config: &AppConfig) -> Result<RenderPlan, PlanError> {
    let points = bounds::fit_points(&challenge.path, show_witnesses);
    let fitted = bounds::find_bounds(&points)?;

    let theme = config.theme();
    let mut markers = Vec::with_capacity(challenge.path.len());
    let mut lines = Vec::new();

    for (index, entry) in challenge.path.iter().enumerate() {
        let outcome = classify::entry_outcome(&challenge.path, index);
        let marker_kind = match outcome {
            Outcome::Success => MarkerKind::GatewaySuccess,
            Outcome::Failure => MarkerKind::GatewayFailed,
        };

        markers.push(Marker {
            coordinates: entry.point(),
            kind: marker_kind,
            style: theme.marker(marker_kind).clone(),
            label: label::animal_label(&entry.challengee),
            href: label::hotspot_href(&entry.challengee),
            ordinal: Some(index + 1),
        });

        // A line is only drawn towards an existing successor.
        if let Some(next) = challenge.path.get(index + 1) {
            let line_kind = match outcome {
                Outcome::Success => LineKind::Success,
                Outcome::Failure => LineKind::Failure,
            };
            lines.push(Line {
                from: entry.point(),
                to: next.point(),
                kind: line_kind,
                style: theme.line(line_kind).clone(),
            });
        }

        if show_witnesses {
            for witness in &entry.witnesses {
                let location = geocell::locate(witness.location.as_deref());
                let (marker_kind, line_kind) = if witness.is_valid {
                    (MarkerKind::WitnessValid, LineKind::WitnessValid)
                } else {
                    (MarkerKind::WitnessInvalid, LineKind::WitnessInvalid)
                };

                markers.push(Marker {
                    coordinates: location,
                    kind: marker_kind,
                    style: theme.marker(marker_kind).clone(),
                    label: label::animal_label(&witness.gateway),
                    href: label::hotspot_href(&witness.gateway),
                    ordinal: None,
                });
                lines.push(Line {
                    from: location,
                    to: entry.point(),
                    kind: line_kind,
                    style: theme.line(line_kind).clone(),
                });
            }
        }
    }

    Ok(RenderPlan {
        hash: challenge.hash.clone(),
        viewport: Viewport {
            style_url: config.map().style_url().to_string(),
            access_token: config.map().access_token().to_string(),
            bounds: fitted,
            padding: config.map().fit_padding(),
            animate: false,
            moving_method: "jumpTo".to_string(),
        },
        markers,
        lines,
    })
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("challenge path contains no entries")]
    EmptyPath(#[from] BoundsError),
}
