use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    // Fees and amounts
    InsufficientFee = 101,
    InvalidFee = 102,
    InvalidAmount = 103,

    // Operations that may only happen once
    DuplicateBidder = 201,
    AlreadyInitiated = 202,
    AlreadyCalculated = 203,
    AlreadyPaidOut = 204,
    AlreadySettled = 205,
    AlreadyRevealed = 206,
    FeesAlreadyCollected = 207,

    // Caller or auction not eligible
    NotALoser = 301,
    NoWinner = 302,
    NoBids = 303,
    NotABidder = 304,
    NothingCommitted = 305,

    // Wrong phase
    InvalidTransition = 401,
    AuctionNotRevealing = 402,
    BiddingClosed = 403,
    BiddingNotClosed = 404,
    AuctionNotClosed = 405,
    AuctionNotCancelled = 406,
    NotInitiated = 407,
    AuctionNotTerminal = 408,

    // Authorization and bookkeeping integrity
    Unauthorized = 501,
    SettlementInProgress = 502,
    UnfundedReveal = 503,
    DisclosureMismatch = 504,
    NotInitialized = 505,
    AlreadyInitialized = 506,
    Overflow = 507,
    RevealRejected = 508,
}
