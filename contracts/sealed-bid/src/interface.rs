use settlement_core::{AuctionError, Disclosure};
use soroban_sdk::{Address, Env};

pub trait SealedBidInterface {
    /// Binds the escrow to its owner and the token bids are made in.
    fn initialize(env: Env, owner: Address, token: Address) -> Result<(), AuctionError>;

    /// Adds `amount` to the committed value. Allowed until the bid is revealed.
    fn deposit(env: Env, amount: i128) -> Result<(), AuctionError>;

    /// Hands the committed value to `auction` and records it there as a bid.
    /// Nothing changes on either side if the auction refuses the bid.
    fn reveal(env: Env, auction: Address) -> Result<(), AuctionError>;

    /// Lets `auction` pull the disclosure itself, for reveals relayed by
    /// the auction's operator.
    fn designate(env: Env, auction: Address) -> Result<(), AuctionError>;

    /// Called by the designated auction. Releases the committed value to it.
    fn surrender(env: Env) -> Result<Disclosure, AuctionError>;

    fn owner(env: Env) -> Result<Address, AuctionError>;

    fn committed_amount(env: Env) -> Result<i128, AuctionError>;

    fn is_revealed(env: Env) -> Result<bool, AuctionError>;

    fn revealed_to(env: Env) -> Result<Option<Address>, AuctionError>;
}
