use basket_types::ContractError;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Manager,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn read_address(e: &Env, key: &DataKey) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}
