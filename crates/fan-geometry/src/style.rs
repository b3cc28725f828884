//! Styling configuration threaded through the adapter

use fan_bands::IntervalWidth;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque scale parameters passed through to the renderer untouched
pub type ScaleParams = BTreeMap<String, serde_json::Value>;

/// How a band's width maps onto its fill depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthScale {
    /// `1 - w`
    #[default]
    Width,
    /// Evenly spaced by rank among the widths present: the narrowest band
    /// gets `1`, the widest `1/k`
    Rank,
}

impl DepthScale {
    /// Get the name of this scale
    pub fn name(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Rank => "rank",
        }
    }

    /// Fill depth of `width` among the ascending `widths` of a table
    ///
    /// Falls back to [`DepthScale::Width`] for a width not in `widths`.
    pub fn depth(&self, width: IntervalWidth, widths: &[IntervalWidth]) -> f64 {
        match self {
            Self::Width => 1.0 - width.value(),
            Self::Rank => match widths.iter().position(|w| *w == width) {
                Some(i) => (widths.len() - i) as f64 / widths.len() as f64,
                None => 1.0 - width.value(),
            },
        }
    }
}

/// Which layers [`crate::GeometryAdapter::adapt`] emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layers {
    pub bands: bool,
    pub lines: bool,
    pub paths: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            bands: true,
            lines: false,
            paths: true,
        }
    }
}

/// Explicit styling configuration
///
/// There is no theme state anywhere else: two adapters built from equal
/// styles produce equal geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanStyle {
    pub depth_scale: DepthScale,
    pub layers: Layers,
    pub scale: ScaleParams,
}

impl FanStyle {
    pub fn with_depth_scale(mut self, depth_scale: DepthScale) -> Self {
        self.depth_scale = depth_scale;
        self
    }

    pub fn with_layers(mut self, layers: Layers) -> Self {
        self.layers = layers;
        self
    }

    /// Attach one opaque scale parameter
    pub fn with_scale_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.scale.insert(key.into(), value);
        self
    }
}
