use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rail_board::components::board_canvas::occupancy_renderer::{layout_bar_charts, layout_locomotives};
use rail_board::config::SceneConfig;
use rail_board::data::load_default_board;
use rail_board::models::OwnershipIndex;
use rail_board::scene::Scene;
use std::rc::Rc;

fn benchmark_scene_layout(c: &mut Criterion) {
    let (snapshot, colors) = load_default_board().expect("embedded board is valid");
    let index = OwnershipIndex::build(&snapshot);
    let snapshot = Rc::new(snapshot);

    // Ownership index construction
    c.bench_function("ownership_index", |b| {
        b.iter(|| OwnershipIndex::build(black_box(&snapshot)));
    });

    // Occupancy layout alone
    c.bench_function("occupancy_layout", |b| {
        b.iter(|| {
            let mut issues = Vec::new();
            let charts = layout_bar_charts(black_box(&snapshot), &index, &colors, &mut issues);
            let tokens = layout_locomotives(black_box(&snapshot), &index, &colors, &mut issues);
            (charts, tokens)
        });
    });

    // Full scene setup (what happens once the map image has loaded)
    c.bench_function("scene_setup", |b| {
        b.iter(|| {
            Scene::new(
                Rc::clone(black_box(&snapshot)),
                colors.clone(),
                SceneConfig::default(),
                (2500.0, 1200.0),
            )
        });
    });
}

criterion_group!(benches, benchmark_scene_layout);
criterion_main!(benches);
