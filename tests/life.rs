use torus_life::torus::{self, Cell, Grid, patterns};

fn set_cells(grid: &mut Grid, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        grid.set(x, y, Cell::Alive);
    }
}

fn assert_alive(grid: &Grid, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        assert!(grid.get(x, y).is_alive(), "expected alive at ({x},{y})");
    }
}

fn assert_dead(grid: &Grid, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        assert!(!grid.get(x, y).is_alive(), "expected dead at ({x},{y})");
    }
}

fn collect_live(grid: &Grid) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y).is_alive() {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn lone_cell_dies_of_underpopulation() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(1, 1, Cell::Alive);

    torus::step(&mut grid);

    assert_eq!(grid.population(), 0);
}

#[test]
fn saturated_board_dies_of_overpopulation() {
    let mut grid = Grid::new(3, 3).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            grid.set(x, y, Cell::Alive);
        }
    }

    // On a 3x3 torus every cell sees all 8 others.
    torus::step(&mut grid);

    assert_eq!(grid.population(), 0);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut grid = Grid::new(7, 7).unwrap();
    set_cells(&mut grid, &[(2, 3), (3, 3), (4, 3)]);

    torus::step(&mut grid);

    assert_alive(&grid, &[(3, 2), (3, 3), (3, 4)]);
    assert_dead(&grid, &[(2, 3), (4, 3)]);
    assert_eq!(grid.population(), 3);

    torus::step(&mut grid);

    assert_alive(&grid, &[(2, 3), (3, 3), (4, 3)]);
    assert_dead(&grid, &[(3, 2), (3, 4)]);
    assert_eq!(grid.population(), 3);
}

#[test]
fn block_is_stable() {
    let mut grid = Grid::new(6, 6).unwrap();
    set_cells(&mut grid, &[(2, 2), (3, 2), (2, 3), (3, 3)]);

    torus::step(&mut grid);

    assert_alive(&grid, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    assert_eq!(grid.population(), 4);
}

#[test]
fn glider_translates_down_right_every_four_steps() {
    let mut grid = Grid::new(20, 10).unwrap();
    patterns::stamp_glider(&mut grid, 2, 2);

    torus::step_n(&mut grid, 4);

    // Same shape, shifted by (+1, +1).
    let shifted = [(4, 3), (5, 4), (3, 5), (4, 5), (5, 5)];
    assert_alive(&grid, &shifted);
    assert_eq!(grid.population(), 5);
}

#[test]
fn glider_crosses_the_seam_and_keeps_travelling() {
    let mut grid = Grid::new(20, 10).unwrap();
    patterns::stamp_glider(&mut grid, 2, 2);

    // 4 generations per diagonal step; 80 bring it around both axes
    // (20 steps right wraps the width twice, 20 down wraps the height
    // twice) back to the seed cells.
    torus::step_n(&mut grid, 80);

    let seed = [(3, 2), (4, 3), (2, 4), (3, 4), (4, 4)];
    assert_alive(&grid, &seed);
    assert_eq!(grid.population(), 5);
}

#[test]
fn reads_wrap_for_arbitrary_out_of_range_coordinates() {
    let mut grid = Grid::new(5, 4).unwrap();
    set_cells(&mut grid, &[(0, 0), (4, 3)]);

    for k in [-3i32, -1, 0, 1, 7] {
        assert!(grid.get(k * 5, k * 4).is_alive());
        assert!(grid.get(4 + k * 5, 3 + k * 4).is_alive());
        assert!(!grid.get(2 + k * 5, 2 + k * 4).is_alive());
    }
}

// Snapshot-free sequential updates read their own writes; the engine must
// not. A 5x5 blinker separates the two: scanning row-major in place, the
// freshly-born (2,1) is visible to (3,1) and breeds an extra cell.
#[test]
fn step_is_synchronous_not_sequential() {
    let blinker = [(1, 2), (2, 2), (3, 2)];

    let mut correct = Grid::new(5, 5).unwrap();
    set_cells(&mut correct, &blinker);
    torus::step(&mut correct);

    let mut naive = Grid::new(5, 5).unwrap();
    set_cells(&mut naive, &blinker);
    step_in_place(&mut naive);

    assert_alive(&correct, &[(2, 1), (2, 2), (2, 3)]);
    assert_eq!(correct.population(), 3);
    assert_ne!(
        collect_live(&correct),
        collect_live(&naive),
        "in-place update should diverge on this board"
    );
}

fn step_in_place(grid: &mut Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let next = torus::next_state(grid, x, y);
            grid.set(x, y, next);
        }
    }
}

#[test]
fn neighbor_counts_stay_within_bounds() {
    let mut grid = Grid::new(4, 4).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(torus::count_living_neighbors(&grid, x, y), 0);
            grid.set(x, y, Cell::Alive);
        }
    }
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(torus::count_living_neighbors(&grid, x, y), 8);
        }
    }
}

#[test]
fn mutating_a_clone_leaves_the_original_untouched() {
    let mut original = Grid::new(6, 4).unwrap();
    patterns::stamp_glider(&mut original, 1, 1);
    let before = collect_live(&original);

    let mut copy = original.clone();
    torus::step_n(&mut copy, 3);
    copy.set(0, 0, Cell::Alive);

    assert_eq!(collect_live(&original), before);
}
