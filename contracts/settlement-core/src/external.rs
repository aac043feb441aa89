use soroban_sdk::{contractclient, Address, Env};

use crate::{errors::AuctionError, types::Disclosure};

/// Interface a sealed-bid auction exposes to the escrows revealing into it.
#[allow(dead_code)]
#[contractclient(name = "RevealTargetClient")]
pub trait RevealTarget {
    /// Records `amount` of `token` committed by `bidder` in `escrow`. The
    /// escrow must have moved the funds to the auction before calling.
    fn reveal_bid(
        env: Env,
        escrow: Address,
        bidder: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), AuctionError>;
}

/// Interface a sealed bid escrow exposes to the auction it was designated to.
#[allow(dead_code)]
#[contractclient(name = "SealedBidClient")]
pub trait SealedBidSource {
    /// Moves the committed funds to the calling auction and discloses them.
    fn surrender(env: Env) -> Result<Disclosure, AuctionError>;
}
