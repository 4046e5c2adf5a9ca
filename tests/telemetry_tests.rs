use chart_options::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn default_tracing_is_a_noop_without_telemetry_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn default_tracing_installs_once() {
    let first = init_default_tracing();
    let second = init_default_tracing();
    assert!(!(first && second));
}
