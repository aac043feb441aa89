use soroban_sdk::{contracttype, Address};

/// Policy fixed when an auction contract is initialized.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AuctionConfig {
    pub admin: Address,    // Deployment operator, may advance phases and sweep fees
    pub token: Address,    // Token every deposit, refund and payout is made in
    pub auction_fee: i128, // Entry fee owed by the seller
    pub bidding_fee: i128, // Fee retained from every bid
}

#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum AuctionState {
    Created,
    Initiated,
    AcceptingBids,
    Revealing,
    Closed,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Bid {
    pub bidder: Address,
    pub gross_amount: i128,
    pub net_amount: i128,
    pub settled: bool,
    pub source: Option<Address>, // Sealed bid escrow the bid was revealed from
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Outcome {
    pub winner: Address,
    pub amount: i128,
}

/// What a sealed bid escrow hands over to an auction when it is revealed.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Disclosure {
    pub owner: Address,
    pub token: Address,
    pub amount: i128,
}
