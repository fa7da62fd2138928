//! Match outcome and the rules that decide it.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, PlayerState};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both sides ran out of cards with equal hp.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Winner's name, or `DRAW`.
impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{}", p),
            GameResult::Draw => f.write_str("DRAW"),
        }
    }
}

/// Evaluate the end-of-turn win rules.
///
/// - A player at zero hp loses (player 1 is checked first).
/// - If both players are out of cards, higher hp wins, equal hp draws.
/// - Otherwise the match goes on.
#[must_use]
pub fn evaluate(players: &PlayerMap<PlayerState>) -> Option<GameResult> {
    for player in PlayerId::all() {
        if players[player].is_defeated() {
            return Some(GameResult::Winner(player.opponent()));
        }
    }

    if players.iter().all(|(_, p)| p.is_exhausted()) {
        let (p1, p2) = (players[PlayerId::P1].hp, players[PlayerId::P2].hp);
        return Some(match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::P1),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::P2),
            std::cmp::Ordering::Equal => GameResult::Draw,
        });
    }

    None
}

/// The early loss checked at the start of a turn: a player with no cards
/// loses to an opponent who still has some.
#[must_use]
pub fn exhausted_loser(players: &PlayerMap<PlayerState>) -> Option<PlayerId> {
    PlayerId::all().find(|&player| {
        players[player].is_exhausted() && !players[player.opponent()].is_exhausted()
    })
}
