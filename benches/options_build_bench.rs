use chart_options::api::{AxisLabels, ChartOptions, ChartType, Donut, DonutLabels, TextStyle};
use chart_options::core::{OptionPath, OptionsMap, set_path};
use chart_options::Series;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn bench_set_path_deep(c: &mut Criterion) {
    let path = OptionPath::parse("xaxis.labels.style.fontSize");

    c.bench_function("set_path_deep_fresh_tree", |b| {
        b.iter(|| {
            let mut root = OptionsMap::new();
            set_path(&mut root, black_box(&path), json!("12px"));
            black_box(root);
        })
    });
}

fn bench_full_builder_session(c: &mut Criterion) {
    let categories: Vec<String> = (0..365).map(|day| format!("day-{day}")).collect();
    let data: Vec<i64> = (0..365).collect();

    c.bench_function("full_builder_session_365_points", |b| {
        b.iter(|| {
            let mut chart = ChartOptions::new(ChartType::Line);
            chart
                .title("Daily")
                .height(350)
                .series([Series::new("S1", data.iter().copied())]);
            chart
                .xaxis()
                .categories(categories.iter().cloned())
                .labels(AxisLabels {
                    rotate: Some(-45.0),
                    style: Some(TextStyle::default().with_font_size("11px")),
                    ..AxisLabels::default()
                });
            chart.yaxis().title("Value").range(0.0, 400.0);
            chart.tooltip().shared(true);
            chart.legend().show(false);
            black_box(chart.into_value());
        })
    });
}

fn bench_donut_deep_merge(c: &mut Criterion) {
    let donut = Donut {
        size: Some("65%".to_owned()),
        labels: Some(DonutLabels {
            show: Some(true),
            ..DonutLabels::default()
        }),
        ..Donut::default()
    };

    c.bench_function("donut_deep_merge", |b| {
        b.iter(|| {
            let chart = ChartOptions::donut(black_box(donut.clone()));
            black_box(chart);
        })
    });
}

criterion_group!(
    benches,
    bench_set_path_deep,
    bench_full_builder_session,
    bench_donut_deep_merge
);
criterion_main!(benches);
