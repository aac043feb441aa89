#![no_std]

pub mod auction;
pub mod traits;

pub use auction::{OpenAuctionContract, OpenAuctionContractClient};
