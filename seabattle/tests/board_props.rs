// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use seabattle::{AttackResult, Board, Cell, Config, Coordinate, IdGenerator, Orientation};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Up),
        Just(Orientation::Down),
        Just(Orientation::Left),
        Just(Orientation::Right),
    ]
}

fn random_board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let fleet = Config::default().fleet(&mut IdGenerator::new()).unwrap();
    let mut board = Board::new(10, fleet).unwrap();
    board.randomize_placements(&mut rng).unwrap();
    board
}

fn snapshot(board: &Board) -> Vec<Vec<Option<Cell>>> {
    board.rows().map(|row| row.to_vec()).collect()
}

fn strengths(board: &Board) -> usize {
    board.ships().map(|ship| ship.strength()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn projection_shape(
        x in 0..10usize,
        y in 0..10usize,
        size in 1..=5usize,
        facing in orientation(),
    ) {
        let board = Board::new(10, Vec::new()).unwrap();
        if let Ok(projection) = board.calculate_square_locations((x, y), facing, size) {
            prop_assert_eq!(projection.squares.len(), size);
            prop_assert_eq!(projection.squares[0], Coordinate::new(x, y));
            for pair in projection.squares.windows(2) {
                let dx = pair[0].x as isize - pair[1].x as isize;
                let dy = pair[0].y as isize - pair[1].y as isize;
                prop_assert_eq!(dx.abs() + dy.abs(), 1);
            }
            for square in &projection.squares {
                prop_assert!(projection.surrounding.contains(square));
            }
            for square in &projection.surrounding {
                prop_assert!(square.within(10));
                let adjacent = projection.squares.iter().any(|s| {
                    (s.x as isize - square.x as isize).abs() <= 1
                        && (s.y as isize - square.y as isize).abs() <= 1
                });
                prop_assert!(adjacent);
            }
        }
    }

    #[test]
    fn random_fleet_never_touches(seed in any::<u64>()) {
        let board = random_board(seed);
        for ship in board.ships() {
            let location = ship.location().unwrap();
            let projection = board
                .calculate_square_locations(location, ship.orientation(), ship.size())
                .unwrap();
            for square in projection.surrounding {
                if let Some(cell) = board.cell(square).unwrap() {
                    prop_assert_eq!(cell.ship, ship.id());
                }
            }
        }
        let occupied = board.rows().flatten().filter(|c| c.is_some()).count();
        prop_assert_eq!(occupied, 22);
    }

    #[test]
    fn fleet_strength_is_sum_of_ships(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10usize, 0..10usize), 0..60),
    ) {
        let mut board = random_board(seed);
        for (x, y) in shots {
            if board.is_attackable((x, y)) {
                board.attack((x, y)).unwrap();
            }
            prop_assert_eq!(board.fleet_strength(), strengths(&board));
        }
        prop_assert_eq!(board.is_defeated(), board.ships().all(|s| s.is_sunk()));
    }

    #[test]
    fn miss_changes_nothing(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut board = random_board(seed);
        if board.cell((x, y)).unwrap().is_none() {
            let before = snapshot(&board);
            let strength = board.fleet_strength();
            prop_assert_eq!(board.attack((x, y)).unwrap(), AttackResult::Miss);
            prop_assert_eq!(board.attack((x, y)).unwrap(), AttackResult::Miss);
            prop_assert_eq!(snapshot(&board), before);
            prop_assert_eq!(board.fleet_strength(), strength);
        }
    }

    #[test]
    fn second_hit_on_segment_fails(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut board = random_board(seed);
        if board.cell((x, y)).unwrap().is_some() {
            let first = board.attack((x, y)).unwrap();
            prop_assert!(first != AttackResult::Miss);
            let strength = board.fleet_strength();
            prop_assert!(board.attack((x, y)).is_err());
            prop_assert_eq!(board.fleet_strength(), strength);
        }
    }
}
