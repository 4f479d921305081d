//! Benchmarks for facet extraction over candidate routes.
//!
//! Extraction runs once per reply, so cost should stay linear in
//! candidates x steps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use routing_machine::extract::ExtractionPipeline;
use routing_machine::osrm::{Maneuver, RouteCandidate, RouteLeg, RouteResponse, RouteStep};
use routing_machine::query::FacetFlags;

fn create_candidate(id: usize, step_count: usize) -> RouteCandidate {
    let steps = (0..step_count)
        .map(|s| RouteStep {
            name: format!("Street {}", s),
            maneuver: Maneuver {
                kind: if s == 0 { "depart" } else { "turn" }.to_string(),
                modifier: (s % 2 == 1).then(|| "left".to_string()),
            },
        })
        .collect();

    RouteCandidate {
        distance: 1000.0 + id as f64 * 137.5,
        duration: 600.0 + id as f64 * 42.0,
        legs: vec![RouteLeg {
            summary: format!("Street 0, Street {}", step_count),
            steps,
        }],
    }
}

fn all_facets() -> FacetFlags {
    FacetFlags {
        distance: true,
        duration: true,
        summary: true,
        route: true,
        raw: false,
    }
}

/// Full pipeline with every facet, varying candidate count.
fn bench_pipeline_by_candidate_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_all_facets");
    let pipeline = ExtractionPipeline::for_facets(&all_facets());

    for count in [1, 3, 10] {
        let candidates: Vec<_> = (0..count).map(|i| create_candidate(i, 20)).collect();

        group.bench_with_input(BenchmarkId::new("candidates", count), &count, |b, _| {
            b.iter(|| {
                black_box(pipeline.run(&candidates).unwrap());
            });
        });
    }

    group.finish();
}

/// Route facet only, varying step count.
fn bench_route_facet_by_step_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_facet");
    let pipeline = ExtractionPipeline::for_facets(&FacetFlags {
        route: true,
        ..FacetFlags::default()
    });

    for steps in [5, 50, 500] {
        let candidates = vec![create_candidate(0, steps)];

        group.bench_with_input(BenchmarkId::new("steps", steps), &steps, |b, _| {
            b.iter(|| {
                black_box(pipeline.run(&candidates).unwrap());
            });
        });
    }

    group.finish();
}

/// Decoding a typical response body.
fn bench_response_decode(c: &mut Criterion) {
    let response = RouteResponse {
        code: "Ok".to_string(),
        routes: (0..3).map(|i| create_candidate(i, 30)).collect(),
    };
    let body = serde_json::to_string(&response).unwrap();

    c.bench_function("decode_3_candidates_30_steps", |b| {
        b.iter(|| {
            black_box(serde_json::from_str::<RouteResponse>(&body).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_pipeline_by_candidate_count,
    bench_route_facet_by_step_count,
    bench_response_decode
);
criterion_main!(benches);
