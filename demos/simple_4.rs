use wave_pathfinding::{propagate_all, reconstruct, Coord, WaveGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a barrier
// - S marks the start
// - E marks the end
//
// The wave moves over a 4-neighbourhood

fn main() {
    let mut grid = WaveGrid::with_barriers(3, 3, [Coord::new(1, 1)]).unwrap();
    let start = Coord::new(0, 0);
    let end = Coord::new(2, 2);
    propagate_all(&mut grid, start).unwrap();
    println!("{}", grid);
    let path = reconstruct(&grid, end).unwrap();
    println!("Path:");
    for p in &path {
        println!("{:?}", p);
    }
}
