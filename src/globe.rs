use tracing::debug;

use crate::config::GlobeSettings;
use crate::dataset::TyphoonRecord;
use crate::error::RenderError;
use crate::figure::{
    colorscale, ColorBar, ColorBarTitle, Figure, Font, GeoTrace, Geo, Layout, Line, Margin,
    Marker, Projection, Rotation, Title, Trace, INFERNO,
};

pub const GLOBE_TITLE: &str = "Typhoon Global Impact Visualization";

/// Hover text for a globe marker. The wind speed slot shows `customdata`, which
/// holds `marker_size * 4` rather than the recorded wind speed.
pub const GLOBE_HOVER_TEMPLATE: &str = "<b>%{text}</b><br>Latitude: %{lat:.4f}<br>Longitude: %{lon:.4f}<br>Wind Speed: %{customdata} km/h<extra></extra>";

/// Log-compressed marker radius so weak and strong storms stay distinguishable.
pub fn marker_size(wind_speed: u32, scale: f64) -> f64 {
    (wind_speed as f64).ln_1p() * scale
}

/// Value shown as "Wind Speed" in the hover label.
pub fn hover_wind_speed(size: f64) -> f64 {
    size * 4.0
}

pub fn build_globe(
    records: &[&TyphoonRecord],
    settings: &GlobeSettings,
) -> Result<Figure, RenderError> {
    if records.is_empty() {
        return Err(RenderError::EmptySelection);
    }

    let mut lon = Vec::with_capacity(records.len());
    let mut lat = Vec::with_capacity(records.len());
    let mut text = Vec::with_capacity(records.len());
    let mut sizes = Vec::with_capacity(records.len());
    let mut colors = Vec::with_capacity(records.len());
    let mut hover_speeds = Vec::with_capacity(records.len());

    for record in records {
        if !record.latitude.is_finite() || !record.longitude.is_finite() {
            return Err(RenderError::InvalidCoordinates {
                name: record.name.clone(),
                latitude: record.latitude,
                longitude: record.longitude,
            });
        }
        let size = marker_size(record.wind_speed, settings.marker_scale);
        if !size.is_finite() {
            return Err(RenderError::InvalidMarkerSize {
                name: record.name.clone(),
                size,
            });
        }
        lon.push(record.longitude);
        lat.push(record.latitude);
        text.push(record.name.clone());
        sizes.push(size);
        colors.push(record.wind_speed as f64);
        hover_speeds.push(hover_wind_speed(size));
    }

    debug!(points = records.len(), "built globe trace");

    let trace = GeoTrace {
        lon,
        lat,
        text,
        customdata: hover_speeds,
        marker: Marker {
            size: sizes,
            color: colors,
            colorscale: colorscale(&INFERNO),
            reversescale: Some(true),
            opacity: Some(0.8),
            line: Some(Line {
                color: "rgb(40, 40, 40)".to_string(),
                width: 0.5,
            }),
            colorbar: Some(ColorBar {
                title: ColorBarTitle {
                    text: "Wind Speed (km/h)".to_string(),
                    side: "right".to_string(),
                    font: Some(Font { size: 12 }),
                },
            }),
            ..Marker::default()
        },
        hoverinfo: "text".to_string(),
        hovertemplate: GLOBE_HOVER_TEMPLATE.to_string(),
    };

    let layout = Layout {
        title: Title {
            text: GLOBE_TITLE.to_string(),
            x: Some(0.5),
            y: Some(0.95),
            xanchor: Some("center".to_string()),
            yanchor: Some("top".to_string()),
            font: Some(Font { size: 24 }),
        },
        height: 900,
        width: None,
        autosize: true,
        margin: Margin {
            l: 0,
            r: 0,
            t: 50,
            b: 0,
        },
        geo: Some(Geo {
            scope: "world".to_string(),
            projection: Projection {
                kind: "orthographic".to_string(),
                rotation: Rotation {
                    lon: settings.rotation_lon,
                    lat: settings.rotation_lat,
                    roll: 0.0,
                },
            },
            showland: true,
            landcolor: "rgba(230, 230, 230, 0.7)".to_string(),
            showocean: true,
            oceancolor: "rgba(200, 230, 255, 0.5)".to_string(),
            showcountries: true,
            countrycolor: "rgba(180, 180, 180, 0.7)".to_string(),
            showcoastlines: true,
            coastlinecolor: "rgba(150, 150, 150, 0.7)".to_string(),
            showframe: false,
        }),
        xaxis: None,
        yaxis: None,
        paper_bgcolor: Some("rgba(0,0,0,0)".to_string()),
        plot_bgcolor: Some("rgba(0,0,0,0)".to_string()),
    };

    Ok(Figure {
        data: vec![Trace::ScatterGeo(trace)],
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_size_is_log_scaled() {
        assert_eq!(marker_size(0, 25.0), 0.0);
        let expected = (196.0_f64).ln() * 25.0;
        assert!((marker_size(195, 25.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn marker_size_grows_with_wind_speed() {
        let mut previous = marker_size(1, 25.0);
        for speed in 2..400 {
            let next = marker_size(speed, 25.0);
            assert!(next > previous, "size should grow at {speed} km/h");
            previous = next;
        }
    }
}
