use soroban_sdk::{token, Address, Env};

use crate::storage_types::{
    Backer, Campaign, CrowdfundingError, DataKey, PersistentKey, TTL_INSTANCE,
    TTL_PERSISTENT,
};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn has_campaign(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

pub fn read_campaign(env: &Env) -> Result<Campaign, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(env);
}

pub fn read_token(env: &Env) -> Result<Address, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Accounts that never contributed read as the zero record.
pub fn read_backer(env: &Env, account: &Address) -> Backer {
    env.storage()
        .persistent()
        .get(&PersistentKey::Backer(account.clone()))
        .unwrap_or_default()
}

pub fn write_backer(env: &Env, account: &Address, backer: &Backer) {
    let key = PersistentKey::Backer(account.clone());
    env.storage().persistent().set(&key, backer);
    extend_persistent(env, &key);
}

pub fn require_owner(campaign: &Campaign, caller: &Address) -> Result<(), CrowdfundingError> {
    if *caller != campaign.owner {
        return Err(CrowdfundingError::NotOwner);
    }
    Ok(())
}

pub fn require_active(campaign: &Campaign) -> Result<(), CrowdfundingError> {
    if campaign.state.is_terminal() {
        return Err(CrowdfundingError::CampaignNotActive);
    }
    Ok(())
}

/// Books a contribution against the campaign and the backer's running total.
/// Returns the backer's new total.
pub fn record_contribution(
    env: &Env,
    campaign: &mut Campaign,
    account: &Address,
    amount: i128,
) -> i128 {
    let mut backer = read_backer(env, account);
    backer.total_contribution += amount;
    write_backer(env, account, &backer);

    campaign.total_raised += amount;
    campaign.balance += amount;
    write_campaign(env, campaign);

    backer.total_contribution
}

/// Pulls `amount` of the campaign token from `from` into custody.
pub fn transfer_in(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundingError> {
    let token_client = token::Client::new(env, &read_token(env)?);
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Pays `amount` out of custody. Callers must have committed every
/// bookkeeping change for this payout before calling, since the token
/// contract runs arbitrary code.
pub fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), CrowdfundingError> {
    let token_client = token::Client::new(env, &read_token(env)?);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
