use crate::{errors::AuctionError, types::AuctionConfig};

/// Entry and bidding fees of a single auction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeePolicy {
    pub auction_fee: i128,
    pub bidding_fee: i128,
}

impl FeePolicy {
    pub fn new(auction_fee: i128, bidding_fee: i128) -> Result<Self, AuctionError> {
        if auction_fee < 0 || bidding_fee < 0 {
            return Err(AuctionError::InvalidFee);
        }

        Ok(Self {
            auction_fee,
            bidding_fee,
        })
    }

    /// Amount a seller has to pay to initiate.
    pub fn required_entry(&self) -> i128 {
        self.auction_fee
    }

    /// Paying exactly the entry fee is enough.
    pub fn check_entry(&self, payment: i128) -> Result<(), AuctionError> {
        if payment < self.required_entry() {
            return Err(AuctionError::InsufficientFee);
        }
        Ok(())
    }

    /// A bid must leave something after the fee is taken.
    pub fn check_bid(&self, gross: i128) -> Result<(), AuctionError> {
        if gross <= self.bidding_fee {
            return Err(AuctionError::InsufficientFee);
        }
        Ok(())
    }

    pub fn net_bid(&self, gross: i128) -> Result<i128, AuctionError> {
        self.check_bid(gross)?;
        gross
            .checked_sub(self.bidding_fee)
            .ok_or(AuctionError::Overflow)
    }
}

impl From<&AuctionConfig> for FeePolicy {
    fn from(config: &AuctionConfig) -> Self {
        Self {
            auction_fee: config.auction_fee,
            bidding_fee: config.bidding_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_fees_are_rejected() {
        assert_eq!(FeePolicy::new(-1, 0), Err(AuctionError::InvalidFee));
        assert_eq!(FeePolicy::new(0, -1), Err(AuctionError::InvalidFee));
        assert!(FeePolicy::new(0, 0).is_ok());
    }

    #[test]
    fn test_entry_fee_is_inclusive() {
        let policy = FeePolicy::new(250_000, 25_000).unwrap();

        assert_eq!(policy.check_entry(249_999), Err(AuctionError::InsufficientFee));
        assert_eq!(policy.check_entry(250_000), Ok(()));
        assert_eq!(policy.check_entry(10_000_000), Ok(()));
    }

    #[test]
    fn test_bid_must_exceed_bidding_fee() {
        let policy = FeePolicy::new(250_000, 25_000).unwrap();

        assert_eq!(policy.check_bid(25_000), Err(AuctionError::InsufficientFee));
        assert_eq!(policy.net_bid(25_000), Err(AuctionError::InsufficientFee));
        assert_eq!(policy.net_bid(25_001), Ok(1));
        assert_eq!(policy.net_bid(10_000_000), Ok(9_975_000));
    }

    #[test]
    fn test_zero_bidding_fee_still_needs_value() {
        let policy = FeePolicy::new(0, 0).unwrap();

        assert_eq!(policy.net_bid(0), Err(AuctionError::InsufficientFee));
        assert_eq!(policy.net_bid(1), Ok(1));
    }
}
