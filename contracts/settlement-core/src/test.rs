#![cfg(test)]
extern crate std;

use crate::{
    engine::AuctionEngine,
    errors::AuctionError,
    ledger::{DataKey, Ledger, SettlementLock},
    types::*,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, token, Address, Env};

const AUCTION_FEE: i128 = 250_000;
const BIDDING_FEE: i128 = 25_000;

#[contract]
pub struct Harness;

#[contractimpl]
impl Harness {
    pub fn version() -> u32 {
        1
    }
}

struct Setup {
    env: Env,
    contract_id: Address,
    admin: Address,
    seller: Address,
    token: token::Client<'static>,
}

impl Setup {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();

        let contract_id = env.register(Harness, ());
        let admin = Address::generate(&env);
        let seller = Address::generate(&env);

        let sac = env.register_stellar_asset_contract_v2(admin.clone());
        let token = token::Client::new(&env, &sac.address());
        token::StellarAssetClient::new(&env, &sac.address()).mint(&seller, &AUCTION_FEE);

        Setup {
            env,
            contract_id,
            admin,
            seller,
            token,
        }
    }

    fn initialized() -> Self {
        let setup = Self::new();
        setup.env.as_contract(&setup.contract_id, || {
            AuctionEngine::initialize(
                &setup.env,
                setup.admin.clone(),
                setup.token.address.clone(),
                AUCTION_FEE,
                BIDDING_FEE,
            )
            .unwrap();
        });
        setup
    }

    fn config(&self) -> AuctionConfig {
        self.env
            .as_contract(&self.contract_id, || Ledger::config(&self.env).unwrap())
    }
}

#[test]
fn test_settlement_lock_is_released_on_drop() {
    let Setup {
        env, contract_id, ..
    } = Setup::new();

    env.as_contract(&contract_id, || {
        {
            let _lock = SettlementLock::acquire(&env).unwrap();
            assert!(SettlementLock::is_held(&env));
            assert_eq!(
                SettlementLock::acquire(&env).err(),
                Some(AuctionError::SettlementInProgress)
            );
        }

        assert!(!SettlementLock::is_held(&env));
        assert!(SettlementLock::acquire(&env).is_ok());
    });
}

#[test]
fn test_settlement_lock_is_released_on_error_path() {
    let Setup {
        env, contract_id, ..
    } = Setup::new();

    fn failing_settlement(env: &Env) -> Result<(), AuctionError> {
        let _lock = SettlementLock::acquire(env)?;
        Ledger::debit(env, 1)?;
        Ok(())
    }

    env.as_contract(&contract_id, || {
        assert_eq!(failing_settlement(&env), Err(AuctionError::Overflow));
        assert!(!SettlementLock::is_held(&env));
    });
}

#[test]
fn test_fee_accounting_never_goes_negative() {
    let Setup {
        env, contract_id, ..
    } = Setup::new();

    env.as_contract(&contract_id, || {
        assert_eq!(Ledger::total_fees(&env), 0);
        assert_eq!(Ledger::add_fee(&env, AUCTION_FEE), Ok(AUCTION_FEE));
        assert_eq!(
            Ledger::add_fee(&env, BIDDING_FEE),
            Ok(AUCTION_FEE + BIDDING_FEE)
        );
        assert_eq!(Ledger::return_fee(&env, BIDDING_FEE), Ok(AUCTION_FEE));
        assert_eq!(
            Ledger::return_fee(&env, AUCTION_FEE + 1),
            Err(AuctionError::Overflow)
        );
        assert_eq!(Ledger::total_fees(&env), AUCTION_FEE);
    });
}

#[test]
fn test_initialize_once_with_valid_fees() {
    let Setup {
        env,
        contract_id,
        admin,
        token,
        ..
    } = Setup::new();

    env.as_contract(&contract_id, || {
        assert_eq!(Ledger::config(&env), Err(AuctionError::NotInitialized));
        assert_eq!(
            AuctionEngine::initialize(&env, admin.clone(), token.address.clone(), -1, 0),
            Err(AuctionError::InvalidFee)
        );

        AuctionEngine::initialize(
            &env,
            admin.clone(),
            token.address.clone(),
            AUCTION_FEE,
            BIDDING_FEE,
        )
        .unwrap();

        assert_eq!(Ledger::state(&env), AuctionState::Created);
        assert_eq!(
            AuctionEngine::initialize(&env, admin.clone(), token.address.clone(), 0, 0),
            Err(AuctionError::AlreadyInitialized)
        );
    });
}

#[test]
fn test_initiate_takes_only_the_entry_fee() {
    let setup = Setup::initialized();
    let Setup {
        env,
        contract_id,
        seller,
        token,
        ..
    } = &setup;

    env.as_contract(contract_id, || {
        assert_eq!(
            AuctionEngine::initiate(env, seller, AUCTION_FEE - 1),
            Err(AuctionError::InsufficientFee)
        );

        // Overpaying does not pull more than the fee
        AuctionEngine::initiate(env, seller, AUCTION_FEE * 4).unwrap();

        assert_eq!(Ledger::state(env), AuctionState::Initiated);
        assert_eq!(Ledger::seller(env), Some(seller.clone()));
        assert_eq!(Ledger::total_fees(env), AUCTION_FEE);
        assert_eq!(Ledger::custody(env), AUCTION_FEE);

        assert_eq!(
            AuctionEngine::initiate(env, seller, AUCTION_FEE),
            Err(AuctionError::AlreadyInitiated)
        );
    });

    assert_eq!(token.balance(seller), 0);
    assert_eq!(token.balance(contract_id), AUCTION_FEE);
}

#[test]
fn test_winner_ties_go_to_earliest_bidder() {
    let setup = Setup::initialized();
    let config = setup.config();
    let Setup {
        env,
        contract_id,
        seller,
        ..
    } = &setup;

    let first = Address::generate(env);
    let second = Address::generate(env);
    let third = Address::generate(env);

    env.as_contract(contract_id, || {
        AuctionEngine::initiate(env, seller, AUCTION_FEE).unwrap();

        AuctionEngine::record_bid(env, &config, &first, 1_000_000, None).unwrap();
        AuctionEngine::record_bid(env, &config, &second, 3_000_000, None).unwrap();
        AuctionEngine::record_bid(env, &config, &third, 3_000_000, None).unwrap();

        assert_eq!(
            AuctionEngine::record_bid(env, &config, &first, 5_000_000, None).err(),
            Some(AuctionError::DuplicateBidder)
        );

        assert_eq!(
            AuctionEngine::calculate_winning_bid(env, seller).err(),
            Some(AuctionError::BiddingNotClosed)
        );

        AuctionEngine::transition_to_state(env, seller, AuctionState::Revealing).unwrap();
        let outcome = AuctionEngine::calculate_winning_bid(env, seller).unwrap();

        assert_eq!(outcome.winner, second);
        assert_eq!(outcome.amount, 3_000_000 - BIDDING_FEE);
        assert_eq!(Ledger::state(env), AuctionState::Closed);
        assert!(Ledger::bid(env, &second).unwrap().settled);
        assert!(!Ledger::bid(env, &third).unwrap().settled);
        assert_eq!(Ledger::total_fees(env), AUCTION_FEE + 3 * BIDDING_FEE);
    });
}

#[test]
fn test_operator_roles() {
    let setup = Setup::initialized();
    let Setup {
        env,
        contract_id,
        admin,
        seller,
        ..
    } = &setup;
    let stranger = Address::generate(env);

    env.as_contract(contract_id, || {
        // Nobody is seller before initiation
        assert_eq!(
            AuctionEngine::cancel(env, seller),
            Err(AuctionError::NotInitiated)
        );
        assert_eq!(
            AuctionEngine::transition_to_state(env, admin, AuctionState::AcceptingBids),
            Err(AuctionError::InvalidTransition)
        );

        AuctionEngine::initiate(env, seller, AUCTION_FEE).unwrap();

        assert_eq!(
            AuctionEngine::transition_to_state(env, &stranger, AuctionState::AcceptingBids),
            Err(AuctionError::Unauthorized)
        );
        AuctionEngine::transition_to_state(env, admin, AuctionState::AcceptingBids).unwrap();
        assert_eq!(
            AuctionEngine::transition_to_state(env, seller, AuctionState::AcceptingBids),
            Err(AuctionError::InvalidTransition)
        );

        assert_eq!(AuctionEngine::cancel(env, admin), Err(AuctionError::Unauthorized));
        assert_eq!(
            AuctionEngine::collect_fees(env, seller),
            Err(AuctionError::Unauthorized)
        );
        assert_eq!(
            AuctionEngine::collect_fees(env, admin),
            Err(AuctionError::AuctionNotTerminal)
        );
    });
}

#[test]
fn test_bidder_order_lives_in_persistent_storage() {
    let setup = Setup::initialized();
    let config = setup.config();
    let Setup {
        env,
        contract_id,
        seller,
        ..
    } = &setup;

    let first = Address::generate(env);
    let second = Address::generate(env);

    env.as_contract(contract_id, || {
        AuctionEngine::initiate(env, seller, AUCTION_FEE).unwrap();
        AuctionEngine::record_bid(env, &config, &first, 1_000_000, None).unwrap();
        AuctionEngine::record_bid(env, &config, &second, 2_000_000, None).unwrap();

        assert!(env.storage().persistent().has(&DataKey::Bidders));
        assert!(!env.storage().instance().has(&DataKey::Bidders));

        let bidders = Ledger::bidders(env);
        assert_eq!(bidders.len(), 2);
        assert_eq!(bidders.get(0), Some(first.clone()));
        assert_eq!(bidders.get(1), Some(second.clone()));
    });
}
