use crate::dataset::Dataset;
use crate::error::RenderError;
use crate::figure::{
    colorscale, Axis, ColorBar, ColorBarTitle, Figure, Layout, Margin, Marker, Title, Trace,
    XyTrace, PLASMA,
};

pub const COMPARISON_TITLE: &str = "Typhoon Impact: Wind Speed, Damage, and Fatalities";

const WIND_LABEL: &str = "Wind Speed (km/h)";
const DAMAGE_LABEL: &str = "Damage Estimate (USD)";
const FATALITIES_LABEL: &str = "Fatalities";

/// Largest rendered marker diameter in pixels.
const SIZE_MAX: f64 = 20.0;

/// Area-mode reference so the largest value renders at `SIZE_MAX` pixels.
pub fn area_sizeref(max_value: f64) -> f64 {
    if max_value > 0.0 {
        2.0 * max_value / (SIZE_MAX * SIZE_MAX)
    } else {
        1.0
    }
}

/// Scatter of wind speed against damage over every record, sized by
/// fatalities and coloured by year.
pub fn build_comparison(dataset: &Dataset) -> Result<Figure, RenderError> {
    if dataset.is_empty() {
        return Err(RenderError::EmptyDataset);
    }

    let records = dataset.records();
    let sizes: Vec<f64> = records.iter().map(|r| r.fatalities as f64).collect();
    let max_size = sizes.iter().copied().fold(0.0, f64::max);

    let trace = XyTrace {
        mode: "markers".to_string(),
        x: records.iter().map(|r| r.wind_speed as f64).collect(),
        y: records.iter().map(|r| r.damage_estimate_usd as f64).collect(),
        hovertext: records.iter().map(|r| r.name.clone()).collect(),
        marker: Marker {
            size: sizes,
            color: records.iter().map(|r| r.year as f64).collect(),
            colorscale: colorscale(&PLASMA),
            colorbar: Some(ColorBar {
                title: ColorBarTitle {
                    text: "year".to_string(),
                    side: "top".to_string(),
                    font: None,
                },
            }),
            sizemode: Some("area".to_string()),
            sizeref: Some(area_sizeref(max_size)),
            sizemin: Some(0.0),
            ..Marker::default()
        },
        hovertemplate: format!(
            "<b>%{{hovertext}}</b><br><br>{WIND_LABEL}=%{{x}}<br>{DAMAGE_LABEL}=%{{y}}<br>{FATALITIES_LABEL}=%{{marker.size}}<br>year=%{{marker.color}}<extra></extra>"
        ),
        showlegend: false,
    };

    Ok(Figure {
        data: vec![Trace::Scatter(trace)],
        layout: Layout {
            title: Title::plain(COMPARISON_TITLE),
            height: 500,
            width: None,
            autosize: true,
            margin: Margin::uniform(50),
            geo: None,
            xaxis: Some(Axis {
                title: Title::plain(WIND_LABEL),
            }),
            yaxis: Some(Axis {
                title: Title::plain(DAMAGE_LABEL),
            }),
            paper_bgcolor: None,
            plot_bgcolor: None,
        },
    })
}
