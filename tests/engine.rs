use conway_canvas::{count, find_preset, step, Grid};
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn random_grid(n: usize, rng: &mut impl Rng) -> Grid {
    Grid::from_fn(n, n, |_, _| rng.gen_bool(FILL_RATE))
}

fn parse(rows: &[&str]) -> Grid {
    Grid::from_fn(rows[0].len(), rows.len(), |x, y| {
        rows[y].as_bytes()[x] == b'#'
    })
}

/// Neighbour count written independently of the engine, with signed offsets.
fn neighbours(grid: &Grid, x: usize, y: usize) -> usize {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let mut result = 0;
    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            if (dx, dy) != (0, 0) {
                let nx = (x as i64 + dx).rem_euclid(w) as usize;
                let ny = (y as i64 + dy).rem_euclid(h) as usize;
                result += grid.get(nx, ny) as usize;
            }
        }
    }
    result
}

#[test]
fn test_shape_and_population_consistency() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    for n in 1..=24 {
        let grid = random_grid(n, &mut rng);
        let (next, alive) = step(&grid);
        assert_eq!((next.width(), next.height()), (n, n));
        assert_eq!(next.rows().count(), n);
        assert!(next.rows().all(|row| row.len() == n));
        assert_eq!(count(&next), alive, "n={}", n);
    }
}

#[test]
fn test_rule_on_random_fields() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    for n in [2, 3, 7, 32] {
        let grid = random_grid(n, &mut rng);
        let (next, _) = step(&grid);
        for y in 0..n {
            for x in 0..n {
                let neibs = neighbours(&grid, x, y);
                let expected = matches!((grid.get(x, y), neibs), (true, 2) | (true, 3) | (_, 3));
                assert_eq!(next.get(x, y), expected, "n={} x={} y={}", n, x, y);
            }
        }
    }
}

#[test]
fn test_glider_translates_diagonally() {
    let glider = find_preset("Glider").unwrap().pattern();
    let mut grid = glider.stamp(8);
    assert_eq!(
        grid,
        parse(&[
            "........",
            "........",
            "...#....",
            "....#...",
            "..###...",
            "........",
            "........",
            "........",
        ])
    );
    for _ in 0..4 {
        grid = step(&grid).0;
    }
    assert_eq!(
        grid,
        parse(&[
            "........",
            "........",
            "........",
            "....#...",
            ".....#..",
            "...###..",
            "........",
            "........",
        ])
    );
}

#[test]
fn test_glider_wraps_around_torus() {
    let glider = find_preset("Glider").unwrap().pattern();
    for n in [6, 9, 16] {
        let start = glider.stamp(n);
        let shifted = Grid::from_fn(n, n, |x, y| start.get((x + n - 1) % n, (y + n - 1) % n));

        let mut grid = start.clone();
        for gen in 1..=4 * n {
            let (next, alive) = step(&grid);
            assert_eq!(alive, 5, "n={} gen={}", n, gen);
            grid = next;
            if gen == 4 {
                assert_eq!(grid, shifted, "n={}", n);
            }
        }
        assert_eq!(grid, start, "n={}", n);
    }
}

#[test]
fn test_blinker_period_two() {
    let start = parse(&[
        ".....", //
        ".....",
        ".###.",
        ".....",
        ".....",
    ]);
    assert_eq!(find_preset("Blinker").unwrap().pattern().stamp(5), start);

    let (once, alive) = step(&start);
    assert_eq!(alive, 3);
    assert_eq!(
        once,
        parse(&[
            ".....", //
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ])
    );
    assert_eq!(step(&once).0, start);
}

#[test]
fn test_pulsar_period_three() {
    let start = find_preset("Pulsar").unwrap().pattern().stamp(17);
    let mut grid = start.clone();
    for gen in 1..=3 {
        grid = step(&grid).0;
        assert_eq!(grid == start, gen == 3, "gen={}", gen);
    }
}

#[test]
fn test_gun_emits_gliders() {
    let gun = find_preset("Gosper Glider Gun").unwrap().pattern();
    let mut grid = gun.stamp(64);
    let mut alive = count(&grid);
    assert_eq!(alive, 36);
    for _ in 0..30 {
        (grid, alive) = step(&grid);
    }
    // one period later the gun is back and a glider has left it
    assert_eq!(alive, 36 + 5);
}

#[test]
fn test_lone_cell_dies() {
    for n in [1, 2, 3, 10] {
        let mut grid = Grid::square(n);
        grid.set(n / 2, n / 2, true);
        assert_eq!(step(&grid).1, 0, "n={}", n);
    }
}

#[test]
fn test_row_of_three_as_one_by_three() {
    let (next, alive) = step(&parse(&["###"]));
    assert_eq!(next, parse(&["..."]));
    assert_eq!(alive, 0);
}
