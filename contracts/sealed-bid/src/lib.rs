#![no_std]

pub mod escrow;
pub mod event;
pub mod interface;
pub mod types;

pub use escrow::{SealedBidContract, SealedBidContractClient};
