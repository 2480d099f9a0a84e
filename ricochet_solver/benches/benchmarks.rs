use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ricochet_board::{quadrant, Game, Position, RobotPositions, Round, Symbol, Target};
use ricochet_solver::{find_route, BreadthFirst, Solver};

fn bench_solvers(c: &mut Criterion) {
    let (pos, bench_data) = solver_bench_setup();

    let mut group = c.benchmark_group("Ricochet Solver");
    for (round, moves) in bench_data {
        group.bench_function(BenchmarkId::new("Breadth-First", moves), |b| {
            b.iter(|| BreadthFirst::new().solve(&round, pos.clone()))
        });
    }
    group.finish();
}

fn bench_single_robot(c: &mut Criterion) {
    let board = Game::from_quadrants(&{
        let mut quads = quadrant::gen_quadrants();
        quads.truncate(4);
        quads
            .into_iter()
            .enumerate()
            .map(|(i, mut quad)| {
                quad.rotate_to(quadrant::ORIENTATIONS[i]);
                quad
            })
            .collect::<Vec<_>>()
    })
    .board()
    .clone();

    let mut group = c.benchmark_group("Single Robot Route");
    group.bench_function(BenchmarkId::new("find_route", "corner-to-corner"), |b| {
        b.iter(|| find_route(&board, Position::new(0, 0), Position::new(15, 15)))
    });
    group.finish();
}

criterion_group!(benches, bench_solvers, bench_single_robot);
criterion_main!(benches);

fn solver_bench_setup() -> (RobotPositions, Vec<(Round, usize)>) {
    let (pos, game) = create_board();

    let data = vec![
        (Target::Blue(Symbol::Triangle), 2),
        (Target::Yellow(Symbol::Circle), 3),
        (Target::Red(Symbol::Triangle), 4),
        (Target::Red(Symbol::Hexagon), 5),
        (Target::Spiral, 6),
        (Target::Green(Symbol::Triangle), 7),
        (Target::Red(Symbol::Square), 8),
        (Target::Green(Symbol::Hexagon), 9),
        (Target::Yellow(Symbol::Hexagon), 11),
        (Target::Yellow(Symbol::Triangle), 12),
        (Target::Yellow(Symbol::Square), 13),
    ]
    .iter_mut()
    .map(|(target, moves)| {
        let round = Round::new(
            game.board().clone(),
            *target,
            game.get_target_position(target).unwrap(),
        );
        (round, *moves)
    })
    .collect();

    (pos, data)
}

fn create_board() -> (RobotPositions, Game) {
    let quadrants = quadrant::gen_quadrants()
        .iter()
        .step_by(3)
        .cloned()
        .enumerate()
        .map(|(i, mut quad)| {
            quad.rotate_to(quadrant::ORIENTATIONS[i]);
            quad
        })
        .collect::<Vec<quadrant::BoardQuadrant>>();

    let pos = RobotPositions::from_tuples(&[(15, 15), (15, 0), (0, 15), (0, 0)]);
    (pos, Game::from_quadrants(&quadrants))
}
