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
use std::{cell::RefCell, collections::HashSet, rc::Rc};

use seabattle::{
    AttackResult, Board, BoardError, Config, Controller, Coordinate, Game, HuntTargetAi,
    IdGenerator, Player, PlayerError, PlayerId,
};

type Shots = Rc<RefCell<Vec<(Coordinate, AttackResult)>>>;

/// Wraps a controller and logs every shot it fires.
struct Recorder<C> {
    inner: C,
    shots: Shots,
}

impl<C: Controller> Controller for Recorder<C> {
    fn initialize_board(&mut self, board: &mut Board) -> Result<(), PlayerError> {
        self.inner.initialize_board(board)
    }

    fn choose_target(&mut self, own: &Board, enemy: &Board) -> Result<Coordinate, PlayerError> {
        self.inner.choose_target(own, enemy)
    }

    fn reject_target(&mut self, target: Coordinate, error: &BoardError) {
        self.inner.reject_target(target, error)
    }

    fn record_outcome(&mut self, target: Coordinate, result: AttackResult, enemy: &Board) {
        self.shots.borrow_mut().push((target, result));
        self.inner.record_outcome(target, result, enemy)
    }
}

fn recorded(id: PlayerId, seed: u64, ids: &mut IdGenerator) -> (Player, Shots) {
    let shots = Shots::default();
    let controller = Recorder {
        inner: HuntTargetAi::seeded(seed),
        shots: Rc::clone(&shots),
    };
    let name = format!("ai-{}", seed);
    let player = Player::from_config(id, name, &Config::default(), ids, controller).unwrap();
    (player, shots)
}

fn adjacent(a: Coordinate, b: Coordinate) -> bool {
    let dx = (a.x as isize - b.x as isize).abs();
    let dy = (a.y as isize - b.y as isize).abs();
    dx + dy == 1
}

#[test]
fn ai_matches_terminate_with_one_fleet_destroyed() {
    for seed in 0..20u64 {
        let mut ids = IdGenerator::new();
        let (first, _) = recorded(PlayerId::P1, seed, &mut ids);
        let (second, _) = recorded(PlayerId::P2, seed + 1000, &mut ids);
        let mut game = Game::new(first, second).unwrap();
        let winner = game.play().unwrap();
        assert_eq!(game.player(winner.opponent()).fleet_strength(), 0);
        assert!(game.player(winner).fleet_strength() > 0);
        assert_eq!(game.winner(), Some(winner));
    }
}

#[test]
fn ai_never_repeats_and_follows_up_hits() {
    for seed in 0..10u64 {
        let mut ids = IdGenerator::new();
        let (first, first_shots) = recorded(PlayerId::P1, seed, &mut ids);
        let (second, second_shots) = recorded(PlayerId::P2, seed + 500, &mut ids);
        let mut game = Game::new(first, second).unwrap();
        game.play().unwrap();

        for shots in &[first_shots, second_shots] {
            let shots = shots.borrow();
            let unique: HashSet<_> = shots.iter().map(|&(at, _)| at).collect();
            assert_eq!(unique.len(), shots.len());

            // Every shot after a hit must be next to a hit on the ship still afloat.
            let mut chain = Vec::new();
            for pair in shots.windows(2) {
                let (at, result) = pair[0];
                match result {
                    AttackResult::Hit => chain.push(at),
                    AttackResult::Sunk => chain.clear(),
                    AttackResult::Miss => {}
                }
                if result == AttackResult::Hit {
                    let next = pair[1].0;
                    assert!(
                        chain.iter().any(|&hit| adjacent(hit, next)),
                        "{} is not next to any of {:?}",
                        next,
                        chain
                    );
                }
            }
        }
    }
}

#[test]
fn ai_game_counts_every_attack() {
    let mut ids = IdGenerator::new();
    let (first, first_shots) = recorded(PlayerId::P1, 42, &mut ids);
    let (second, second_shots) = recorded(PlayerId::P2, 43, &mut ids);
    let mut game = Game::new(first, second).unwrap();
    game.play().unwrap();
    let fired = first_shots.borrow().len() + second_shots.borrow().len();
    assert_eq!(game.turns(), fired);
}
