//! Match result types.

use crate::game::state::PlayerId;

/// Why the match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A player reached the winning score.
    WinningScore,
    /// A player has no cards and the deck is empty.
    Unplayable,
    /// The deck is empty and the hands share no rank, so no guess can
    /// change the game any more.
    Stalled,
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Final scores, indexed by [`PlayerId::index`].
    pub scores: [u8; 2],
    /// The winner, or `None` for a tie.
    pub winner: Option<PlayerId>,
    /// Why the match ended.
    pub reason: EndReason,
}

impl MatchResult {
    /// Builds a result from final scores: the higher score wins, equal
    /// scores tie.
    #[must_use]
    pub const fn from_scores(scores: [u8; 2], reason: EndReason) -> Self {
        let winner = if scores[0] > scores[1] {
            Some(PlayerId::One)
        } else if scores[1] > scores[0] {
            Some(PlayerId::Two)
        } else {
            None
        };
        Self {
            scores,
            winner,
            reason,
        }
    }

    /// Returns whether the match ended in a tie.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}
