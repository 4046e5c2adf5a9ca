use chart_options::api::{
    ChartOptions, ChartType, DataLabelsBackground, GridAxis, GridPadding, HorizontalAlign,
    ItemMargin, LegendLabels, LegendMarkers, LegendPosition, MarkerHover, Monochrome, TextStyle,
    ThemeMode, TooltipAxis, TooltipStyle,
};
use chart_options::OptionsComponent;
use serde_json::json;

#[test]
fn each_leaf_scaffolds_its_known_children() {
    let mut chart = ChartOptions::new(ChartType::Line);
    chart.tooltip();
    chart.legend();
    chart.grid();
    chart.data_labels();
    chart.markers();
    chart.theme();

    assert_eq!(chart.get("tooltip"), Some(&json!({ "style": {}, "x": {}, "y": {} })));
    assert_eq!(
        chart.get("legend"),
        Some(&json!({ "labels": {}, "markers": {}, "itemMargin": {} }))
    );
    assert_eq!(
        chart.get("grid"),
        Some(&json!({ "xaxis": { "lines": {} }, "yaxis": { "lines": {} }, "padding": {} }))
    );
    assert_eq!(chart.get("dataLabels"), Some(&json!({ "style": {}, "background": {} })));
    assert_eq!(chart.get("markers"), Some(&json!({ "hover": {} })));
    assert_eq!(chart.get("theme"), Some(&json!({ "monochrome": {} })));
}

#[test]
fn leaves_are_not_scaffolded_until_accessed() {
    let mut chart = ChartOptions::new(ChartType::Line);
    chart.title("untouched");
    for key in ["tooltip", "legend", "grid", "dataLabels", "markers", "theme", "plotOptions"] {
        assert_eq!(chart.get(key), None, "{key} should not exist yet");
    }
}

#[test]
fn tooltip_scalars_and_merges() {
    let mut chart = ChartOptions::new(ChartType::Line);
    chart
        .tooltip()
        .enabled(true)
        .shared(true)
        .intersect(false)
        .follow_cursor(true)
        .fill_series_color(false)
        .theme("dark")
        .style(TooltipStyle {
            font_size: Some("12px".to_owned()),
            ..TooltipStyle::default()
        })
        .style(TooltipStyle {
            font_family: Some("Inter".to_owned()),
            ..TooltipStyle::default()
        })
        .x(TooltipAxis {
            format: Some("dd MMM".to_owned()),
            ..TooltipAxis::default()
        })
        .y(TooltipAxis {
            show: Some(true),
            ..TooltipAxis::default()
        });

    assert_eq!(
        chart.get("tooltip"),
        Some(&json!({
            "style": { "fontSize": "12px", "fontFamily": "Inter" },
            "x": { "format": "dd MMM" },
            "y": { "show": true },
            "enabled": true,
            "shared": true,
            "intersect": false,
            "followCursor": true,
            "fillSeriesColor": false,
            "theme": "dark"
        }))
    );
}

#[test]
fn legend_merges_preserve_siblings() {
    let mut chart = ChartOptions::new(ChartType::Pie);
    chart
        .legend()
        .show(true)
        .position(LegendPosition::Bottom)
        .horizontal_align(HorizontalAlign::Center)
        .floating(false)
        .font_size("14px")
        .labels(LegendLabels {
            use_series_colors: Some(true),
            ..LegendLabels::default()
        })
        .markers(LegendMarkers {
            width: Some(12.0),
            height: Some(12.0),
            ..LegendMarkers::default()
        })
        .markers(LegendMarkers {
            radius: Some(2.0),
            ..LegendMarkers::default()
        })
        .item_margin(ItemMargin {
            horizontal: Some(5.0),
            ..ItemMargin::default()
        });

    assert_eq!(chart.get("legend.position"), Some(&json!("bottom")));
    assert_eq!(chart.get("legend.horizontalAlign"), Some(&json!("center")));
    assert_eq!(chart.get("legend.labels"), Some(&json!({ "useSeriesColors": true })));
    assert_eq!(
        chart.get("legend.markers"),
        Some(&json!({ "width": 12.0, "height": 12.0, "radius": 2.0 }))
    );
    assert_eq!(chart.get("legend.itemMargin"), Some(&json!({ "horizontal": 5.0 })));
}

#[test]
fn grid_axis_and_padding_merges() {
    let mut chart = ChartOptions::new(ChartType::Line);
    chart
        .grid()
        .show(true)
        .border_color("#e7e7e7")
        .stroke_dash_array(4.0)
        .position("back")
        .xaxis(GridAxis::lines(true))
        .padding(GridPadding {
            top: Some(0.0),
            right: Some(10.0),
            ..GridPadding::default()
        })
        .padding(GridPadding {
            left: Some(5.0),
            ..GridPadding::default()
        });

    assert_eq!(chart.get("grid.xaxis"), Some(&json!({ "lines": { "show": true } })));
    assert_eq!(chart.get("grid.yaxis"), Some(&json!({ "lines": {} })));
    assert_eq!(
        chart.get("grid.padding"),
        Some(&json!({ "top": 0.0, "right": 10.0, "left": 5.0 }))
    );
    assert_eq!(chart.get("grid.strokeDashArray"), Some(&json!(4.0)));
}

#[test]
fn data_labels_style_and_background() {
    let mut chart = ChartOptions::new(ChartType::Bar);
    chart
        .data_labels()
        .enabled(true)
        .enabled_on_series([0, 2])
        .text_anchor("middle")
        .distributed(false)
        .offset_x(0.0)
        .offset_y(-20.0)
        .style(TextStyle::default().with_font_size("12px"))
        .style(TextStyle::default().with_colors(json!(["#304758"])))
        .background(DataLabelsBackground {
            enabled: Some(true),
            border_radius: Some(2.0),
            ..DataLabelsBackground::default()
        });

    assert_eq!(chart.get("dataLabels.enabledOnSeries"), Some(&json!([0, 2])));
    assert_eq!(
        chart.get("dataLabels.style"),
        Some(&json!({ "fontSize": "12px", "colors": ["#304758"] }))
    );
    assert_eq!(
        chart.get("dataLabels.background"),
        Some(&json!({ "enabled": true, "borderRadius": 2.0 }))
    );
}

#[test]
fn markers_and_theme() {
    let mut chart = ChartOptions::new(ChartType::Line);
    chart
        .markers()
        .size(4)
        .colors(["#fff"])
        .stroke_width(2.0)
        .stroke_colors("#00E396")
        .shape("circle")
        .hover(MarkerHover {
            size_offset: Some(3.0),
            ..MarkerHover::default()
        });
    chart
        .theme()
        .mode(ThemeMode::Dark)
        .palette("palette2")
        .monochrome(Monochrome {
            enabled: Some(true),
            color: Some("#255aee".to_owned()),
            shade_to: Some(ThemeMode::Light),
            ..Monochrome::default()
        })
        .monochrome(Monochrome {
            shade_intensity: Some(0.65),
            ..Monochrome::default()
        });

    assert_eq!(
        chart.get("markers"),
        Some(&json!({
            "hover": { "sizeOffset": 3.0 },
            "size": 4,
            "colors": ["#fff"],
            "strokeWidth": 2.0,
            "strokeColors": "#00E396",
            "shape": "circle"
        }))
    );
    assert_eq!(
        chart.get("theme"),
        Some(&json!({
            "monochrome": {
                "enabled": true,
                "color": "#255aee",
                "shadeTo": "light",
                "shadeIntensity": 0.65
            },
            "mode": "dark",
            "palette": "palette2"
        }))
    );
}

#[test]
fn rescaffolding_leaves_populated_values_intact() {
    let mut chart = ChartOptions::from_value(json!({
        "chart": { "type": "line" },
        "series": [],
        "tooltip": { "enabled": false, "style": { "fontSize": "10px" } },
        "legend": { "itemMargin": { "vertical": 4 } },
        "grid": { "xaxis": { "lines": { "show": true } } },
        "dataLabels": { "background": { "opacity": 0.5 } },
        "markers": { "hover": { "size": 7 } },
        "theme": { "monochrome": { "enabled": true } }
    }))
    .expect("adopt tree");

    for _ in 0..2 {
        chart.tooltip();
        chart.legend();
        chart.grid();
        chart.data_labels();
        chart.markers();
        chart.theme();
    }

    assert_eq!(chart.get("tooltip.enabled"), Some(&json!(false)));
    assert_eq!(chart.get("tooltip.style.fontSize"), Some(&json!("10px")));
    assert_eq!(chart.get("legend.itemMargin.vertical"), Some(&json!(4)));
    assert_eq!(chart.get("grid.xaxis.lines.show"), Some(&json!(true)));
    assert_eq!(chart.get("grid.yaxis.lines"), Some(&json!({})));
    assert_eq!(chart.get("dataLabels.background.opacity"), Some(&json!(0.5)));
    assert_eq!(chart.get("markers.hover.size"), Some(&json!(7)));
    assert_eq!(chart.get("theme.monochrome.enabled"), Some(&json!(true)));
}

#[test]
fn leaf_replaced_by_scalar_turns_setters_into_noops() {
    let mut chart = ChartOptions::new(ChartType::Line);
    chart.set("legend", false);
    chart.legend().show(true).labels(LegendLabels::default());
    assert_eq!(chart.get("legend"), Some(&json!(false)));
}

#[test]
fn extension_fields_flow_through_extra_and_set_option() {
    let mut extra = serde_json::Map::new();
    extra.insert("onItemClick".to_owned(), json!({ "toggleDataSeries": true }));

    let mut chart = ChartOptions::new(ChartType::Line);
    chart
        .legend()
        .labels(LegendLabels {
            extra,
            ..LegendLabels::default()
        })
        .set_option("onItemHover.highlightDataSeries", false);

    assert_eq!(
        chart.get("legend.labels.onItemClick"),
        Some(&json!({ "toggleDataSeries": true }))
    );
    assert_eq!(
        chart.get("legend.onItemHover"),
        Some(&json!({ "highlightDataSeries": false }))
    );
}
