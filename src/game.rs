//! Game state, bomb resolution and the player/opponent turn loop.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ai;
use crate::common::{Bomb, BombResult, GameError};
use crate::config::FLEET_SIZE;
use crate::coord::Coordinate;
use crate::fleet::{Fleet, Placement};
use crate::ship::{Orientation, ShipType};

/// One of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// One side of the game: its fleet, the bombs it has fired, and which of
/// its own ships have gone down. Sunk flags and the bomb history only
/// ever grow.
#[derive(Debug)]
struct SideState {
    fleet: Fleet,
    bombs: Vec<Bomb>,
    sunk: Vec<bool>,
}

impl SideState {
    fn new(fleet: Fleet) -> Self {
        let ships = fleet.ships().len();
        SideState {
            fleet,
            bombs: Vec::new(),
            sunk: vec![false; ships],
        }
    }

    fn sunk_count(&self) -> usize {
        self.sunk.iter().filter(|&&s| s).count()
    }

    fn sunk_squares(&self) -> Vec<Coordinate> {
        self.fleet
            .ships()
            .iter()
            .zip(&self.sunk)
            .filter(|(_, &sunk)| sunk)
            .flat_map(|(ship, _)| ship.squares())
            .collect()
    }
}

/// What a single bomb did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotOutcome {
    pub target: Coordinate,
    pub result: BombResult,
    /// Type of the ship this bomb finished off, if any.
    pub sunk: Option<ShipType>,
    pub game_over: bool,
}

/// Everything that happened during one call to [`Game::play_turn`]: the
/// player's shot followed by the opponent's volley.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: ShotOutcome,
    pub opponent: Vec<ShotOutcome>,
}

/// A full game: both sides, plus the terminal flag and winner once one
/// fleet is sunk 10/10. Fleets are fixed at creation.
#[derive(Debug)]
pub struct Game {
    player: SideState,
    opponent: SideState,
    game_over: bool,
    winner: Option<Side>,
}

impl Game {
    /// Start a game from the player's submitted placements, generating
    /// the opponent's fleet at random.
    pub fn new<R: Rng + ?Sized>(placements: &[Placement], rng: &mut R) -> Result<Self, GameError> {
        let player = Fleet::from_placements(placements)?;
        let opponent = Fleet::random(rng)?;
        Ok(Game::with_fleets(player, opponent))
    }

    /// Start a game from two prebuilt fleets.
    pub fn with_fleets(player: Fleet, opponent: Fleet) -> Self {
        Game {
            player: SideState::new(player),
            opponent: SideState::new(opponent),
            game_over: false,
            winner: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Bombs fired by `side`, in fired order.
    pub fn bombs(&self, side: Side) -> &[Bomb] {
        &self.side(side).bombs
    }

    pub fn fleet(&self, side: Side) -> &Fleet {
        &self.side(side).fleet
    }

    /// How many of `side`'s own ships are sunk.
    pub fn sunk_count(&self, side: Side) -> usize {
        self.side(side).sunk_count()
    }

    /// Squares of `side`'s own sunk ships.
    pub fn sunk_squares(&self, side: Side) -> Vec<Coordinate> {
        self.side(side).sunk_squares()
    }

    /// Resolve one bomb fired by `side` at `target`. A rejected shot
    /// leaves the game untouched.
    pub fn fire(&mut self, side: Side, target: Coordinate) -> Result<ShotOutcome, GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        let (attacker, defender) = match side {
            Side::Player => (&mut self.player, &mut self.opponent),
            Side::Opponent => (&mut self.opponent, &mut self.player),
        };
        if attacker.bombs.iter().any(|b| b.target == target) {
            return Err(GameError::DuplicateTarget(target));
        }

        let hit_index = defender
            .fleet
            .ships()
            .iter()
            .enumerate()
            .find(|(i, ship)| !defender.sunk[*i] && ship.contains(target))
            .map(|(i, _)| i);
        let result = if hit_index.is_some() {
            BombResult::Hit
        } else {
            BombResult::Miss
        };
        attacker.bombs.push(Bomb { target, result });

        let mut sunk = None;
        if let Some(i) = hit_index {
            let ship = &defender.fleet.ships()[i];
            let fully_bombed = ship
                .squares()
                .all(|square| attacker.bombs.iter().any(|b| b.target == square));
            if fully_bombed {
                defender.sunk[i] = true;
                sunk = Some(ship.ship_type());
                debug!("{side:?} sank a {}", ship.ship_type());
            }
        }
        if defender.sunk_count() == FLEET_SIZE {
            self.game_over = true;
            self.winner = Some(side);
            info!("game over, {side:?} wins");
        }

        Ok(ShotOutcome {
            target,
            result,
            sunk,
            game_over: self.game_over,
        })
    }

    /// Run one full turn: the player's shot, then the opponent's volley.
    /// Unless the player's shot ends the game, the opponent always fires
    /// at least once (also after a player hit) and keeps firing as long
    /// as its latest shot hit, stopping on a miss or on ending the game.
    pub fn play_turn<R: Rng + ?Sized>(
        &mut self,
        target: Coordinate,
        rng: &mut R,
    ) -> Result<TurnOutcome, GameError> {
        let player = self.fire(Side::Player, target)?;
        let mut opponent = Vec::new();
        if !player.game_over {
            loop {
                let sunk_squares = self.player.sunk_squares();
                let Some(square) = ai::choose_target(&self.opponent.bombs, &sunk_squares, rng)
                else {
                    break;
                };
                let shot = self.fire(Side::Opponent, square)?;
                let volley_ends = shot.game_over || shot.result == BombResult::Miss;
                opponent.push(shot);
                if volley_ends {
                    break;
                }
            }
        }
        Ok(TurnOutcome { player, opponent })
    }

    /// Serializable snapshot of the whole game, for persistence and
    /// rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player: side_snapshot(&self.player),
            opponent: side_snapshot(&self.opponent),
            game_over: self.game_over,
            winner: self.winner,
        }
    }

    /// Rebuild a game from a snapshot. Ships are re-validated, and sunk
    /// flags plus the terminal state are recomputed from the bomb
    /// histories: they are derived state, never trusted from storage.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, GameError> {
        let mut game = Game::with_fleets(
            fleet_from_snapshot(&snapshot.player)?,
            fleet_from_snapshot(&snapshot.opponent)?,
        );
        game.player.bombs = snapshot.player.bombs.clone();
        game.opponent.bombs = snapshot.opponent.bombs.clone();
        recompute_sunk(&game.opponent.bombs, &mut game.player);
        recompute_sunk(&game.player.bombs, &mut game.opponent);
        if game.opponent.sunk_count() == FLEET_SIZE {
            game.game_over = true;
            game.winner = Some(Side::Player);
        } else if game.player.sunk_count() == FLEET_SIZE {
            game.game_over = true;
            game.winner = Some(Side::Opponent);
        }
        Ok(game)
    }
}

/// One ship as exposed to collaborators: placement plus derived sunk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSnapshot {
    pub ship_type: ShipType,
    pub start: Coordinate,
    pub orientation: Orientation,
    pub sunk: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSnapshot {
    pub ships: Vec<ShipSnapshot>,
    pub bombs: Vec<Bomb>,
}

/// Full serializable game state: both fleets with sunk flags, both bomb
/// histories in fired order, and the terminal flag and winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player: SideSnapshot,
    pub opponent: SideSnapshot,
    pub game_over: bool,
    pub winner: Option<Side>,
}

fn side_snapshot(side: &SideState) -> SideSnapshot {
    let ships = side
        .fleet
        .ships()
        .iter()
        .zip(&side.sunk)
        .map(|(ship, &sunk)| ShipSnapshot {
            ship_type: ship.ship_type(),
            start: ship.start(),
            orientation: ship.orientation(),
            sunk,
        })
        .collect();
    SideSnapshot {
        ships,
        bombs: side.bombs.clone(),
    }
}

fn fleet_from_snapshot(side: &SideSnapshot) -> Result<Fleet, GameError> {
    let placements: Vec<Placement> = side
        .ships
        .iter()
        .map(|ship| Placement {
            ship_type: ship.ship_type,
            start: ship.start,
            orientation: ship.orientation,
        })
        .collect();
    Fleet::from_placements(&placements)
}

fn recompute_sunk(attacker_bombs: &[Bomb], defender: &mut SideState) {
    let sunk: Vec<bool> = defender
        .fleet
        .ships()
        .iter()
        .map(|ship| {
            ship.squares()
                .all(|square| attacker_bombs.iter().any(|b| b.target == square))
        })
        .collect();
    defender.sunk = sunk;
}
