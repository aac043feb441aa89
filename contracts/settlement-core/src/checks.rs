use crate::types::AuctionState;

/// Every phase change `transition_to_state` may perform. Cancellation has
/// its own entry point and winner calculation closes the auction itself.
pub const TRANSITIONS: [(AuctionState, AuctionState); 5] = [
    (AuctionState::Initiated, AuctionState::AcceptingBids),
    (AuctionState::Initiated, AuctionState::Revealing),
    (AuctionState::AcceptingBids, AuctionState::Revealing),
    (AuctionState::AcceptingBids, AuctionState::Closed),
    (AuctionState::Revealing, AuctionState::Closed),
];

impl AuctionState {
    pub fn can_transition_to(&self, target: AuctionState) -> bool {
        TRANSITIONS
            .iter()
            .any(|(from, to)| from == self && *to == target)
    }

    pub fn accepts_bids(&self) -> bool {
        matches!(self, AuctionState::Initiated | AuctionState::AcceptingBids)
    }

    pub fn is_bidding_closed(&self) -> bool {
        matches!(self, AuctionState::Revealing | AuctionState::Closed)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            AuctionState::Initiated | AuctionState::AcceptingBids | AuctionState::Revealing
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AuctionState::Closed | AuctionState::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::AuctionState::{self, *};

    const ALL: [AuctionState; 6] = [
        Created,
        Initiated,
        AcceptingBids,
        Revealing,
        Closed,
        Cancelled,
    ];

    #[test]
    fn test_transitions_only_move_forward() {
        let rank = |state: &AuctionState| ALL.iter().position(|s| s == state).unwrap();

        for from in ALL.iter() {
            for to in ALL.iter() {
                if from.can_transition_to(*to) {
                    assert!(rank(to) > rank(from), "{:?} -> {:?} goes backwards", from, to);
                }
            }
        }
    }

    #[test]
    fn test_cancelled_and_created_are_never_targets() {
        for from in ALL.iter() {
            assert!(!from.can_transition_to(Cancelled));
            assert!(!from.can_transition_to(Created));
            assert!(!from.can_transition_to(Initiated));
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        for to in ALL.iter() {
            assert!(!Closed.can_transition_to(*to));
            assert!(!Cancelled.can_transition_to(*to));
        }
        assert!(!Closed.can_cancel());
        assert!(!Cancelled.can_cancel());
        assert!(!Created.can_cancel());
    }

    #[test]
    fn test_bidding_windows() {
        assert!(Initiated.accepts_bids());
        assert!(AcceptingBids.accepts_bids());
        assert!(!Revealing.accepts_bids());

        assert!(!AcceptingBids.is_bidding_closed());
        assert!(Revealing.is_bidding_closed());
        assert!(Closed.is_bidding_closed());
    }
}
