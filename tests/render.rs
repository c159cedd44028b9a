use typhoon_dashboard::{
    comparison::build_comparison,
    config::GlobeSettings,
    dashboard::{GlobePanel, Selection},
    detail::DetailPanel,
    figure::Trace,
    globe::{build_globe, marker_size},
    Dashboard, Dataset, RenderError,
};

fn dashboard() -> Dashboard {
    Dashboard::new(Dataset::builtin().unwrap(), GlobeSettings::default())
}

#[test]
fn haiyan_outsizes_melor() {
    let dataset = Dataset::builtin().unwrap();
    let haiyan = dataset.get("Typhoon Haiyan").unwrap();
    let melor = dataset.get("Typhoon Melor").unwrap();
    assert!(marker_size(haiyan.wind_speed, 25.0) > marker_size(melor.wind_speed, 25.0));
}

#[test]
fn haiyan_detail_fields() {
    let dataset = Dataset::builtin().unwrap();
    let panel = DetailPanel::from_record(dataset.get("Typhoon Haiyan").unwrap());
    assert_eq!(panel.heading, "Typhoon Haiyan Details");
    assert_eq!(panel.year, "2013");
    assert_eq!(panel.category, "Super Typhoon");
    assert_eq!(panel.wind_speed, "195 km/h");
    assert_eq!(panel.pressure, "895 hPa");
    assert_eq!(panel.region, "Philippines");
    assert_eq!(panel.damage_estimate, "$14,000,000,000");
    assert_eq!(panel.fatalities, "6300");

    let labels: Vec<&str> = panel.fields().iter().map(|field| field.label).collect();
    assert_eq!(
        labels,
        [
            "Year",
            "Category",
            "Wind Speed",
            "Pressure",
            "Region",
            "Damage Estimate",
            "Fatalities"
        ]
    );
}

#[test]
fn empty_globe_input_is_an_error_not_a_panic() {
    let result = build_globe(&[], &GlobeSettings::default());
    assert_eq!(result.unwrap_err(), RenderError::EmptySelection);
}

#[test]
fn globe_plots_every_given_record() {
    let dataset = Dataset::builtin().unwrap();
    let subset: Vec<_> = dataset.records().iter().take(3).collect();
    let figure = build_globe(&subset, &GlobeSettings::default()).unwrap();
    let Trace::ScatterGeo(trace) = &figure.data[0] else {
        panic!("expected a scattergeo trace");
    };
    assert_eq!(trace.lon.len(), 3);
    assert_eq!(trace.text[0], "Typhoon Haiyan");
    assert_eq!(trace.lat[1], 20.1939);
    assert_eq!(trace.lon[1], 121.5450);
}

#[test]
fn globe_hover_shows_scaled_marker_size() {
    let dataset = Dataset::builtin().unwrap();
    let haiyan = dataset.filter_by_name("Typhoon Haiyan");
    let figure = build_globe(&haiyan, &GlobeSettings::default()).unwrap();
    let Trace::ScatterGeo(trace) = &figure.data[0] else {
        panic!("expected a scattergeo trace");
    };
    let size = trace.marker.size[0];
    assert!((size - 196.0_f64.ln() * 25.0).abs() < 1e-9);
    assert_eq!(trace.customdata[0], size * 4.0);
    assert_ne!(trace.customdata[0], 195.0);
    assert_eq!(trace.marker.color[0], 195.0);
    assert_eq!(trace.marker.reversescale, Some(true));
    assert!(trace.hovertemplate.contains("%{lat:.4f}"));
}

#[test]
fn globe_layout_is_an_orthographic_globe() {
    let dataset = Dataset::builtin().unwrap();
    let figure = build_globe(
        &dataset.filter_by_name("Typhoon Goni"),
        &GlobeSettings::default(),
    )
    .unwrap();
    let value = serde_json::to_value(&figure).unwrap();
    assert_eq!(value["data"][0]["type"], "scattergeo");
    let geo = &value["layout"]["geo"];
    assert_eq!(geo["projection"]["type"], "orthographic");
    assert_eq!(geo["projection"]["rotation"]["lon"], -100.0);
    assert_eq!(geo["projection"]["rotation"]["lat"], 20.0);
    assert_eq!(geo["oceancolor"], "rgba(200, 230, 255, 0.5)");
    assert_eq!(value["layout"]["title"]["text"], "Typhoon Global Impact Visualization");
}

#[test]
fn comparison_covers_whole_dataset_regardless_of_selection() {
    let dashboard = dashboard();
    for name in ["Typhoon Haiyan", "Typhoon Talim"] {
        let view = dashboard.render(Some(name)).unwrap();
        let Trace::Scatter(trace) = &view.comparison.data[0] else {
            panic!("expected a scatter trace");
        };
        assert_eq!(trace.x.len(), 12);
        assert_eq!(trace.hovertext.len(), 12);
        assert_eq!(trace.marker.sizeref, Some(2.0 * 6300.0 / 400.0));
    }
}

#[test]
fn comparison_rejects_empty_dataset() {
    let empty = Dataset::new(Vec::new()).unwrap();
    assert_eq!(
        build_comparison(&empty).unwrap_err(),
        RenderError::EmptyDataset
    );
}

#[test]
fn default_selection_is_first_record() {
    let dataset = Dataset::builtin().unwrap();
    let selection = Selection::resolve(&dataset, None).unwrap();
    assert_eq!(selection.name(), "Typhoon Haiyan");

    let view = dashboard().render(None).unwrap();
    assert_eq!(view.selected, "Typhoon Haiyan");
    assert!(view.globe.figure().is_some());
}

#[test]
fn unknown_selection_aborts_the_pass() {
    let err = dashboard().render(Some("Typhoon Nobody")).unwrap_err();
    assert_eq!(err, RenderError::UnknownTyphoon("Typhoon Nobody".into()));
}

#[test]
fn options_are_labelled_with_year() {
    let options = dashboard().options();
    assert_eq!(options.len(), 12);
    assert_eq!(options[0].value, "Typhoon Haiyan");
    assert_eq!(options[0].label, "Typhoon Haiyan (2013)");
    assert_eq!(options[5].label, "Typhoon Jebi (2018)");
}

#[test]
fn globe_failure_becomes_a_message() {
    let panel = dashboard().globe_panel("Typhoon Nobody");
    match panel {
        GlobePanel::Failed { message } => {
            assert!(message.starts_with("Error creating globe visualization:"));
        }
        GlobePanel::Chart { .. } => panic!("expected a failure for an empty subset"),
    }
}
