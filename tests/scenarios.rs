#[cfg(test)]
mod tests {
    use gol_world::{zoo, Cell, Grid, Topology, World};

    const SEED: u64 = 42;

    /// Builds a `width x height` dead grid with `pattern` merged at
    /// `(x0, y0)`.
    fn embedded(width: usize, height: usize, pattern: &Grid, x0: usize, y0: usize) -> Grid {
        let mut grid = Grid::with_size(width, height);
        grid.merge(pattern, x0, y0, false).unwrap();
        grid
    }

    #[test]
    fn glider_translates_diagonally_every_four_steps() {
        let glider = zoo::glider();
        let mut world = World::from_grid(embedded(8, 8, &glider, 2, 2));

        world.advance(4, Topology::Torus);
        assert_eq!(world.get_state(), &embedded(8, 8, &glider, 3, 3));

        world.advance(4, Topology::Torus);
        assert_eq!(world.get_state(), &embedded(8, 8, &glider, 4, 4));
    }

    #[test]
    fn light_weight_spaceship_travels_two_cells_left_per_period() {
        let ship = zoo::light_weight_spaceship();
        let mut world = World::from_grid(embedded(12, 8, &ship, 4, 2));

        world.advance(4, Topology::Torus);
        assert_eq!(world.get_state(), &embedded(12, 8, &ship, 2, 2));
    }

    #[test]
    fn block_is_a_still_life() {
        let mut block = Grid::square(4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            block[(x, y)] = Cell::Alive;
        }
        let mut world = World::from_grid(block.clone());
        world.advance(5, Topology::Closed);
        assert_eq!(world.get_state(), &block);
    }

    #[test]
    fn lone_corner_cell_starves_on_a_closed_grid() {
        let mut grid = Grid::square(3);
        grid[(0, 0)] = Cell::Alive;
        let mut world = World::from_grid(grid);
        world.step(Topology::Closed);
        assert_eq!(world.alive_cells(), 0);
    }

    #[test]
    fn lone_cell_starves_even_on_a_tiny_torus() {
        // none of the eight wrapped offsets of a 2x2 torus reaches the
        // cell itself, so it still sees zero alive neighbours
        let mut grid = Grid::square(2);
        grid[(0, 0)] = Cell::Alive;
        let mut world = World::from_grid(grid);
        world.step(Topology::Torus);
        assert_eq!(world.alive_cells(), 0);
    }

    #[test]
    fn pair_is_stable_on_a_tiny_torus() {
        // each alive cell sees the other through two wrapped offsets,
        // so both survive with exactly two neighbours; each dead cell
        // sees four and stays dead
        let mut grid = Grid::square(2);
        grid[(0, 0)] = Cell::Alive;
        grid[(1, 0)] = Cell::Alive;
        let pair = grid.clone();
        let mut world = World::from_grid(grid);
        world.advance(3, Topology::Torus);
        assert_eq!(world.get_state(), &pair);

        // the same pair dies without the wraparound neighbours
        let mut clipped = World::from_grid(pair);
        clipped.step(Topology::Closed);
        assert_eq!(clipped.alive_cells(), 0);
    }

    #[test]
    fn r_pentomino_population_after_a_few_generations() {
        let mut world = World::from_grid(embedded(16, 16, &zoo::r_pentomino(), 6, 6));
        assert_eq!(world.alive_cells(), 5);
        // known early population curve of the r-pentomino: 5 -> 6 -> 7 -> 9 -> 8
        let mut populations = vec![];
        for _ in 0..4 {
            world.step(Topology::Closed);
            populations.push(world.alive_cells());
        }
        assert_eq!(populations, [6, 7, 9, 8]);
    }

    #[test]
    fn simulation_survives_a_codec_round_trip() {
        let dir = std::env::temp_dir();
        let ascii_path = dir.join("gol_world_scenario.gol");
        let binary_path = dir.join("gol_world_scenario.bgol");

        let mut grid = Grid::with_size(24, 16);
        grid.randomize(Some(SEED), 0.3);
        let mut world = World::from_grid(grid);
        world.advance(3, Topology::Torus);

        zoo::save_ascii(&ascii_path, world.get_state()).unwrap();
        zoo::save_binary(&binary_path, world.get_state()).unwrap();
        let mut from_ascii = World::from_grid(zoo::load_ascii(&ascii_path).unwrap());
        let mut from_binary = World::from_grid(zoo::load_binary(&binary_path).unwrap());
        assert_eq!(from_ascii.get_state(), from_binary.get_state());

        world.advance(5, Topology::Torus);
        from_ascii.advance(5, Topology::Torus);
        from_binary.advance(5, Topology::Torus);
        assert_eq!(world.get_state(), from_ascii.get_state());
        assert_eq!(world.get_state(), from_binary.get_state());

        std::fs::remove_file(&ascii_path).unwrap();
        std::fs::remove_file(&binary_path).unwrap();
    }

    #[test]
    fn rotated_glider_still_glides() {
        // a quarter turn points the glider at another diagonal but it
        // stays a period-4 translating spaceship
        let turned = zoo::glider().rotate(1);
        let mut world = World::from_grid(embedded(8, 8, &turned, 3, 3));
        world.advance(4, Topology::Torus);
        assert_eq!(world.get_state(), &embedded(8, 8, &turned, 2, 4));
    }
}
