#![no_std]

pub mod checks;
pub mod distribution;
pub mod engine;
pub mod errors;
pub mod event;
pub mod external;
pub mod fees;
pub mod ledger;
pub mod types;

pub use engine::AuctionEngine;
pub use errors::AuctionError;
pub use external::{RevealTargetClient, SealedBidClient};
pub use fees::FeePolicy;
pub use ledger::Ledger;
pub use types::*;

mod test;
