use wave_pathfinding::*;

const BARRIERS: [Coord; 2] = [Coord::new(5, 10), Coord::new(15, 10)];
const SOURCE: Coord = Coord::new(0, 0);

fn field() -> WaveGrid {
    WaveGrid::with_barriers(20, 20, BARRIERS).unwrap()
}

#[test]
fn budget_of_eleven() {
    let mut grid = field();
    let result = propagate(&mut grid, SOURCE, 11).unwrap();
    assert_eq!(result.labeled, 11);
    assert_eq!(grid.labeled_count(), 11);
    assert_eq!(grid.label(Coord::new(0, 0)), Some(1));
    assert_eq!(grid.label(Coord::new(1, 0)), Some(2));
    assert_eq!(grid.label(Coord::new(0, 1)), Some(2));
    assert_eq!(result.max_label, 5);
}

#[test]
fn budget_of_twenty_two_after_reset() {
    let mut grid = field();
    propagate(&mut grid, SOURCE, 11).unwrap();
    grid.reset_labels();
    assert_eq!(grid.labeled_count(), 0);
    let result = propagate(&mut grid, SOURCE, 22).unwrap();
    assert_eq!(result.labeled, 22);
    assert_eq!(grid.labeled_count(), 22);
    // Six full layers hold 21 cells; the 22nd opens layer seven.
    assert_eq!(result.max_label, 7);
    assert_eq!(grid.label(Coord::new(6, 0)), Some(7));
    for (coord, state) in grid.cells() {
        if let CellState::Labeled(label) = state {
            assert_eq!(label, 1 + coord.manhattan_distance(&SOURCE) as u32);
        }
    }
    assert!(BARRIERS.iter().all(|b| grid.is_barrier(*b)));
}

#[test]
fn full_wave_backtrace_to_far_corner() {
    let mut grid = field();
    let result = propagate(&mut grid, SOURCE, 400).unwrap();
    assert!(result.exhausted);
    assert_eq!(result.labeled, 398);

    let path = reconstruct(&grid, Coord::new(19, 19)).unwrap();
    assert!(path.is_complete());
    assert_eq!(path.len(), 39);
    assert_eq!(path.steps(), 38);
    assert_eq!(path.source(), Some(SOURCE));
    assert!(path.is_contiguous());
    let labels = path
        .iter()
        .map(|c| grid.label(*c).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(labels, (1..=39).collect::<Vec<u32>>());
    for barrier in BARRIERS {
        assert!(!path.contains(&barrier));
    }
}

#[test]
fn backtrace_beyond_budget_is_empty() {
    let mut grid = field();
    propagate(&mut grid, SOURCE, 22).unwrap();
    let path = reconstruct(&grid, Coord::new(19, 19)).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.outcome(), TraceOutcome::Unreachable);
}

#[test]
fn session_replays_the_field() {
    let mut session = WaveSession::new(20, 20).unwrap();
    for barrier in BARRIERS {
        session.mark_barrier(barrier).unwrap();
    }
    assert!(session.mark_barrier(Coord::new(20, 0)).is_err());
    session.propagate(SOURCE, 11).unwrap();
    session.reset();
    session.propagate(SOURCE, 22).unwrap();
    session.propagate(SOURCE, UNBOUNDED).unwrap();
    let path_len = session.backtrace(Coord::new(19, 19)).unwrap().len();
    assert_eq!(path_len, 39);
    assert!(session.is_on_path(Coord::new(19, 19)));
    assert!(!session.is_on_path(Coord::new(5, 10)));

    let rendered = session.grid().with_path(session.path().unwrap()).to_string();
    assert_eq!(rendered.lines().count(), 20);
    assert_eq!(rendered.matches('*').count(), 39);
    assert_eq!(rendered.matches('X').count(), 2);
}
