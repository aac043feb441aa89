use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const ESCROW: Symbol = symbol_short!("ESCROW");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub owner: Address,
    pub amount: i128,
    pub committed_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Revealed {
    pub owner: Address,
    pub auction: Address,
    pub amount: i128,
}

pub fn deposited(env: &Env, owner: &Address, amount: i128, committed_amount: i128) {
    env.events().publish(
        (ESCROW, symbol_short!("deposit")),
        Deposited {
            owner: owner.clone(),
            amount,
            committed_amount,
        },
    );
}

pub fn revealed(env: &Env, owner: &Address, auction: &Address, amount: i128) {
    env.events().publish(
        (ESCROW, symbol_short!("revealed")),
        Revealed {
            owner: owner.clone(),
            auction: auction.clone(),
            amount,
        },
    );
}
