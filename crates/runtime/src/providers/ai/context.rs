//! Shared read-only view for AI policies.

use orlog_core::{MatchState, PlayerState, Seat, SideTally};

/// The match as seen from one seat.
#[derive(Clone, Copy, Debug)]
pub struct AiContext<'a> {
    pub seat: Seat,
    pub state: &'a MatchState,
}

impl<'a> AiContext<'a> {
    pub fn new(seat: Seat, state: &'a MatchState) -> Self {
        Self { seat, state }
    }

    pub fn me(&self) -> &'a PlayerState {
        self.state.player(self.seat)
    }

    pub fn opponent(&self) -> &'a PlayerState {
        self.state.player(self.seat.opponent())
    }

    pub fn is_behind_on_health(&self) -> bool {
        self.me().health() < self.opponent().health()
    }

    pub fn is_behind_on_tokens(&self) -> bool {
        self.me().tokens() < self.opponent().tokens()
    }

    /// How the opponent attacked this seat last round, if a round was played.
    pub fn last_incoming(&self) -> Option<&'a SideTally> {
        self.state
            .last_round()
            .map(|summary| &summary.sides[self.seat.opponent().index()])
    }
}
