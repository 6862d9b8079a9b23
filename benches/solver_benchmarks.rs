use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nonet::{
    grid::Grid,
    solver::{
        engine::SolverEngine,
        heuristics::{
            value::AscendingValueHeuristic,
            variable::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic},
        },
    },
};

const CLASSIC_PUZZLE: &str = concat!(
    "530070000",
    "600195000",
    "098000060",
    "800060003",
    "400803001",
    "700020006",
    "060000280",
    "000419005",
    "000080079",
);

// 17 clues, near the minimum for a uniquely solvable puzzle, so the
// search has to do real backtracking work.
const SPARSE_PUZZLE: &str = concat!(
    "000000010",
    "400000000",
    "020000000",
    "000050407",
    "008000300",
    "001090000",
    "300400200",
    "050100000",
    "000806000",
);

fn heuristic_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sudoku Heuristics");
    let puzzle = Grid::from_text(CLASSIC_PUZZLE);

    group.bench_function("classic, SelectFirst", |b| {
        let solver = SolverEngine::new(
            Box::new(SelectFirstHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        b.iter(|| {
            let mut grid = black_box(puzzle);
            let (outcome, _stats) = solver.solve(&mut grid);
            assert!(outcome.is_solved());
        })
    });

    group.bench_function("classic, MinimumRemainingValues", |b| {
        let solver = SolverEngine::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(AscendingValueHeuristic),
        );
        b.iter(|| {
            let mut grid = black_box(puzzle);
            let (outcome, _stats) = solver.solve(&mut grid);
            assert!(outcome.is_solved());
        })
    });

    group.finish();
}

fn puzzle_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sudoku Performance");

    for (name, text) in [
        ("classic", CLASSIC_PUZZLE),
        ("sparse", SPARSE_PUZZLE),
        ("empty", ""),
    ] {
        let puzzle = Grid::from_text(text);
        group.bench_with_input(BenchmarkId::from_parameter(name), &puzzle, |b, puzzle| {
            let solver = SolverEngine::with_defaults();
            b.iter(|| {
                let mut grid = black_box(*puzzle);
                let (outcome, _stats) = solver.solve(&mut grid);
                assert!(outcome.is_solved());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, heuristic_benchmarks, puzzle_benchmarks);
criterion_main!(benches);
