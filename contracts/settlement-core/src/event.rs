use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::AuctionState;

// Symbol representing AUCTION events.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInitiated {
    pub seller: Address,
    pub auction_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRevealed {
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerRevealed {
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateChanged {
    pub from: AuctionState,
    pub to: AuctionState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settled {
    pub account: Address,
    pub amount: i128,
}

pub fn auction_initiated(env: &Env, seller: &Address, auction_fee: i128) {
    env.events().publish(
        (AUCTION, symbol_short!("initiated")),
        AuctionInitiated {
            seller: seller.clone(),
            auction_fee,
        },
    );
}

pub fn bid_placed(env: &Env, bidder: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "BidPlaced"), bidder.clone()),
        BidPlaced {
            bidder: bidder.clone(),
            amount,
        },
    );
}

pub fn bid_revealed(env: &Env, bidder: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "BidRevealed"), bidder.clone()),
        BidRevealed {
            bidder: bidder.clone(),
            amount,
        },
    );
}

pub fn winner_revealed(env: &Env, winner: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "WinnerRevealed"), winner.clone()),
        WinnerRevealed {
            winner: winner.clone(),
            amount,
        },
    );
}

pub fn state_changed(env: &Env, from: AuctionState, to: AuctionState) {
    env.events()
        .publish((AUCTION, symbol_short!("state")), StateChanged { from, to });
}

pub fn refunded(env: &Env, bidder: &Address, amount: i128) {
    env.events().publish(
        (AUCTION, symbol_short!("refunded")),
        Settled {
            account: bidder.clone(),
            amount,
        },
    );
}

pub fn paid_out(env: &Env, seller: &Address, amount: i128) {
    env.events().publish(
        (AUCTION, symbol_short!("paid_out")),
        Settled {
            account: seller.clone(),
            amount,
        },
    );
}

pub fn cancelled(env: &Env, seller: &Address) {
    env.events()
        .publish((AUCTION, symbol_short!("cancelled")), seller.clone());
}

pub fn fees_collected(env: &Env, admin: &Address, amount: i128) {
    env.events().publish(
        (AUCTION, symbol_short!("fees")),
        Settled {
            account: admin.clone(),
            amount,
        },
    );
}
