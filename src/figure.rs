//! Typed subset of the Plotly figure schema.
//!
//! Only the attributes the dashboard sets are modelled; everything optional is
//! skipped when unset so the browser falls back to Plotly's own defaults.

use serde::Serialize;

/// Matplotlib's Inferno map, as shipped in `plotly.express.colors.sequential`.
pub const INFERNO: [&str; 10] = [
    "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925", "#fb9b06",
    "#f7d13d", "#fcffa4",
];

/// Plasma, the default continuous scale of Plotly Express.
pub const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Spreads the colours evenly over `[0, 1]` as Plotly colorscale stops.
pub fn colorscale(colors: &[&str]) -> Vec<(f64, String)> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| (index as f64 / last, (*color).to_string()))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    ScatterGeo(GeoTrace),
    Scatter(XyTrace),
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoTrace {
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub text: Vec<String>,
    pub customdata: Vec<f64>,
    pub marker: Marker,
    pub hoverinfo: String,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct XyTrace {
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub hovertext: Vec<String>,
    pub marker: Marker,
    pub hovertemplate: String,
    pub showlegend: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub color: Vec<f64>,
    pub colorscale: Vec<(f64, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversescale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemin: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: ColorBarTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBarTitle {
    pub text: String,
    pub side: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: None,
            y: None,
            xanchor: None,
            yanchor: None,
            font: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    pub fn uniform(value: u32) -> Self {
        Self {
            l: value,
            r: value,
            t: value,
            b: value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rotation {
    pub lon: f64,
    pub lat: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub scope: String,
    pub projection: Projection,
    pub showland: bool,
    pub landcolor: String,
    pub showocean: bool,
    pub oceancolor: String,
    pub showcountries: bool,
    pub countrycolor: String,
    pub showcoastlines: bool,
    pub coastlinecolor: String,
    pub showframe: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub autosize: bool,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorscale_spans_unit_interval() {
        let stops = colorscale(&INFERNO);
        assert_eq!(stops.len(), 10);
        assert_eq!(stops.first().unwrap().0, 0.0);
        assert_eq!(stops.last().unwrap().0, 1.0);
        assert_eq!(stops[9].1, "#fcffa4");
    }

    #[test]
    fn traces_carry_plotly_type_tag() {
        let trace = Trace::Scatter(XyTrace {
            mode: "markers".into(),
            x: vec![1.0],
            y: vec![2.0],
            hovertext: vec!["a".into()],
            marker: Marker::default(),
            hovertemplate: String::new(),
            showlegend: false,
        });
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "scatter");
        assert!(value["marker"].get("sizeref").is_none());
    }
}
