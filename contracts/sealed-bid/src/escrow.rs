use crate::{
    event,
    interface::SealedBidInterface,
    types::{DataKey, SealedBid},
};
use settlement_core::{distribution, AuctionError, Disclosure, RevealTargetClient};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

#[contract]
pub struct SealedBidContract;

fn load(env: &Env) -> Result<SealedBid, AuctionError> {
    env.storage()
        .instance()
        .get(&DataKey::SealedBid)
        .ok_or(AuctionError::NotInitialized)
}

fn save(env: &Env, sealed: &SealedBid) {
    env.storage().instance().set(&DataKey::SealedBid, sealed);
}

// Marks the bid revealed before any value leaves the escrow
fn release_to(
    env: &Env,
    mut sealed: SealedBid,
    auction: &Address,
) -> Result<Disclosure, AuctionError> {
    if sealed.revealed {
        return Err(AuctionError::AlreadyRevealed);
    }
    if sealed.committed_amount <= 0 {
        return Err(AuctionError::NothingCommitted);
    }

    sealed.revealed = true;
    sealed.revealed_to = Some(auction.clone());
    save(env, &sealed);

    distribution::transfer_from_contract(env, &sealed.token, auction, &sealed.committed_amount);
    event::revealed(env, &sealed.owner, auction, sealed.committed_amount);

    Ok(Disclosure {
        owner: sealed.owner,
        token: sealed.token,
        amount: sealed.committed_amount,
    })
}

#[contractimpl]
impl SealedBidInterface for SealedBidContract {
    fn initialize(env: Env, owner: Address, token: Address) -> Result<(), AuctionError> {
        owner.require_auth();

        if env.storage().instance().has(&DataKey::SealedBid) {
            return Err(AuctionError::AlreadyInitialized);
        }

        save(
            &env,
            &SealedBid {
                owner,
                token,
                committed_amount: 0,
                revealed: false,
                designated_auction: None,
                revealed_to: None,
            },
        );

        Ok(())
    }

    fn deposit(env: Env, amount: i128) -> Result<(), AuctionError> {
        let mut sealed = load(&env)?;
        sealed.owner.require_auth();

        if amount <= 0 {
            return Err(AuctionError::InvalidAmount);
        }
        if sealed.revealed {
            return Err(AuctionError::AlreadyRevealed);
        }

        sealed.committed_amount = sealed
            .committed_amount
            .checked_add(amount)
            .ok_or(AuctionError::Overflow)?;

        distribution::transfer_to_contract(&env, &sealed.token, &sealed.owner, &amount);
        save(&env, &sealed);

        event::deposited(&env, &sealed.owner, amount, sealed.committed_amount);
        Ok(())
    }

    fn reveal(env: Env, auction: Address) -> Result<(), AuctionError> {
        let sealed = load(&env)?;
        sealed.owner.require_auth();

        let disclosure = release_to(&env, sealed, &auction)?;

        // Any error returned from here reverts the release above
        let target = RevealTargetClient::new(&env, &auction);
        match target.try_reveal_bid(
            &env.current_contract_address(),
            &disclosure.owner,
            &disclosure.token,
            &disclosure.amount,
        ) {
            Ok(Ok(())) => Ok(()),
            Err(Ok(error)) => Err(error),
            _ => Err(AuctionError::RevealRejected),
        }
    }

    fn designate(env: Env, auction: Address) -> Result<(), AuctionError> {
        let mut sealed = load(&env)?;
        sealed.owner.require_auth();

        if sealed.revealed {
            return Err(AuctionError::AlreadyRevealed);
        }

        sealed.designated_auction = Some(auction.clone());
        save(&env, &sealed);

        log!(&env, "sealed bid designated to {}", auction);
        Ok(())
    }

    fn surrender(env: Env) -> Result<Disclosure, AuctionError> {
        let sealed = load(&env)?;

        let auction = sealed
            .designated_auction
            .clone()
            .ok_or(AuctionError::Unauthorized)?;
        auction.require_auth();

        release_to(&env, sealed, &auction)
    }

    fn owner(env: Env) -> Result<Address, AuctionError> {
        load(&env).map(|sealed| sealed.owner)
    }

    fn committed_amount(env: Env) -> Result<i128, AuctionError> {
        load(&env).map(|sealed| sealed.committed_amount)
    }

    fn is_revealed(env: Env) -> Result<bool, AuctionError> {
        load(&env).map(|sealed| sealed.revealed)
    }

    fn revealed_to(env: Env) -> Result<Option<Address>, AuctionError> {
        load(&env).map(|sealed| sealed.revealed_to)
    }
}
