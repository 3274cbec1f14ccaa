use wave_pathfinding::{Coord, WaveError, WaveSession};

// Replays the classic wave tracing exercise on a 20x20 field:
// - two barriers at (5, 10) and (15, 10)
// - a wave from (0, 0) limited to 11 cells, then to 22 cells after a reset
// - a full wave and a backtrace from the opposite corner, drawn with *

fn main() -> Result<(), WaveError> {
    let mut session = WaveSession::new(20, 20)?;
    session.mark_barrier(Coord::new(5, 10))?;
    session.mark_barrier(Coord::new(15, 10))?;
    let source = Coord::new(0, 0);

    for budget in [11, 22] {
        println!("Wave propagation labeling {} cells:", budget);
        session.reset();
        session.propagate(source, budget)?;
        println!("{}", session.grid());
    }

    println!("Backtracing the path:");
    session.propagate(source, 400)?;
    let path = session.backtrace(Coord::new(19, 19))?.clone();
    println!("{}", session.grid().with_path(&path));
    println!("{} cells, {} steps, {:?}", path.len(), path.steps(), path.outcome());
    Ok(())
}
