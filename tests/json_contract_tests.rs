use chart_options::api::{ChartOptions, ChartOptionsJsonContractV1, ChartType, OPTIONS_JSON_SCHEMA_V1};
use chart_options::{OptionsError, Series};
use serde_json::{Value, json};

fn sample_chart() -> ChartOptions {
    let mut chart = ChartOptions::new(ChartType::Area);
    chart
        .title("Traffic")
        .height(280)
        .series([Series::new("visits", [31, 40, 28])]);
    chart.xaxis().categories(["Mon", "Tue", "Wed"]);
    chart.tooltip().shared(true);
    chart
}

#[test]
fn bare_json_round_trips_through_compat_reader() {
    let chart = sample_chart();
    let json = chart.to_json_pretty().expect("serialize options");
    let restored = ChartOptions::from_json_compat_str(&json).expect("parse options");

    assert_eq!(restored.chart_type(), ChartType::Area);
    assert_eq!(restored.to_value(), chart.to_value());
}

#[test]
fn contract_v1_round_trips_through_compat_reader() {
    let chart = sample_chart();
    let json = chart
        .to_json_contract_v1_pretty()
        .expect("serialize contract");

    let payload: ChartOptionsJsonContractV1 =
        serde_json::from_str(&json).expect("contract should deserialize");
    assert_eq!(payload.schema_version, OPTIONS_JSON_SCHEMA_V1);
    assert_eq!(payload.chart_type, ChartType::Area);

    let restored = ChartOptions::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored.to_value(), chart.to_value());
}

#[test]
fn export_keeps_insertion_order() {
    let chart = sample_chart();
    let json = chart.to_json_string().expect("serialize options");
    let chart_at = json.find("\"chart\"").expect("chart key");
    let title_at = json.find("\"title\"").expect("title key");
    let xaxis_at = json.find("\"xaxis\"").expect("xaxis key");
    let tooltip_at = json.find("\"tooltip\"").expect("tooltip key");

    assert!(chart_at < title_at);
    assert!(title_at < xaxis_at);
    assert!(xaxis_at < tooltip_at);
}

#[test]
fn builder_serializes_as_the_bare_tree() {
    let chart = sample_chart();
    let encoded = serde_json::to_value(&chart).expect("serialize builder");
    assert_eq!(encoded, chart.to_value());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = json!({
        "schema_version": 99,
        "chart_type": "line",
        "options": { "chart": { "type": "line" }, "series": [] }
    });
    let err = ChartOptions::from_json_compat_str(&payload.to_string())
        .expect_err("schema 99 must be rejected");
    assert!(matches!(err, OptionsError::InvalidTree(_)));
}

#[test]
fn contract_chart_type_must_match_tree() {
    let payload = json!({
        "schema_version": 1,
        "chart_type": "bar",
        "options": { "chart": { "type": "line" }, "series": [] }
    });
    let err = ChartOptions::from_json_compat_str(&payload.to_string())
        .expect_err("mismatched chart type must be rejected");
    assert!(matches!(err, OptionsError::InvalidTree(_)));
}

#[test]
fn from_value_requires_mapping_root_and_known_type() {
    assert!(matches!(
        ChartOptions::from_value(json!([1, 2])),
        Err(OptionsError::InvalidTree(_))
    ));
    assert!(matches!(
        ChartOptions::from_value(json!({ "series": [] })),
        Err(OptionsError::MissingChartType)
    ));
    assert!(matches!(
        ChartOptions::from_value(json!({ "chart": { "type": "sparkline" } })),
        Err(OptionsError::UnknownChartType(name)) if name == "sparkline"
    ));
}

#[test]
fn malformed_json_reports_serialization_error() {
    let err = ChartOptions::from_json_compat_str("{ not json").expect_err("must fail");
    assert!(matches!(err, OptionsError::Serialization(_)));
}

#[test]
fn into_value_hands_over_the_tree() {
    let chart = sample_chart();
    let expected = chart.to_value();
    let value: Value = chart.into_value();
    assert_eq!(value, expected);
}
