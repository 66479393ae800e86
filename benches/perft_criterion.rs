use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_checkers::game_state::board::Board;
use plum_checkers::game_state::checkers_rules::RuleSet;
use plum_checkers::game_state::checkers_types::Player;
use plum_checkers::move_generation::perft::perft;
use plum_checkers::utils::random_playout::{random_playout, PlayoutConfig};

const EXPECTED_QUICK: &[usize] = &[7, 49, 302];
const EXPECTED_STANDARD: &[usize] = &[7, 49, 302, 1469];

fn selected_suite() -> (&'static str, &'static [usize]) {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", EXPECTED_STANDARD),
        _ => ("quick", EXPECTED_QUICK),
    }
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, expected) = selected_suite();
    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let board = Board::starting_position();
    for (depth_idx, expected_nodes) in expected.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft(&board, Player::Red, RuleSet::default(), depth);
        assert_eq!(warmup.nodes, *expected_nodes, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(*expected_nodes as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("startpos_d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let counts = perft(
                        black_box(&board),
                        Player::Red,
                        RuleSet::default(),
                        black_box(depth),
                    );
                    assert_eq!(counts.nodes, *expected);
                    black_box(counts.nodes)
                });
            },
        );
    }

    group.finish();
}

fn bench_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    group.sample_size(20);

    for rules in [RuleSet::american(), RuleSet::tournament()] {
        group.bench_function(BenchmarkId::from_parameter(rules.to_string()), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let config = PlayoutConfig {
                    rules,
                    seed,
                    ..PlayoutConfig::default()
                };
                let report = random_playout(black_box(&config)).expect("playout should succeed");
                black_box(report.played.len())
            });
        });
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft, bench_playouts);
criterion_main!(perft_benches);
