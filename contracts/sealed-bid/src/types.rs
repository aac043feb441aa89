use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    SealedBid,
}

/// Escrowed commitment of a single bidder.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SealedBid {
    pub owner: Address,
    pub token: Address,
    pub committed_amount: i128,
    pub revealed: bool,
    pub designated_auction: Option<Address>, // Auction allowed to pull the disclosure
    pub revealed_to: Option<Address>,
}
