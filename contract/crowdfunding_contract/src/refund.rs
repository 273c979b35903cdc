use soroban_sdk::{Address, Env};

use crate::ledger::{read_backer, write_backer, write_campaign};
use crate::storage_types::{Backer, Campaign, CampaignState, CrowdfundingError};

/// A backer may pull their money back once the campaign has failed, or at
/// any time after voting against one of the owner's withdraw requests.
pub fn is_eligible(campaign: &Campaign, backer: &Backer) -> bool {
    match campaign.state {
        CampaignState::Failed => true,
        CampaignState::Active => backer.dissented,
        CampaignState::Completed => false,
    }
}

/// Zeroes the backer's contribution and releases it from custody. The
/// caller issues the outgoing transfer only after this has returned.
pub fn settle(
    env: &Env,
    campaign: &mut Campaign,
    account: &Address,
) -> Result<i128, CrowdfundingError> {
    let mut backer = read_backer(env, account);
    if !backer.is_backer() {
        return Err(CrowdfundingError::NotABacker);
    }
    if !is_eligible(campaign, &backer) {
        return Err(CrowdfundingError::RefundNotAllowed);
    }

    let amount = backer.total_contribution;
    if amount > campaign.balance {
        return Err(CrowdfundingError::InsufficientCustody);
    }

    backer.total_contribution = 0;
    write_backer(env, account, &backer);

    campaign.balance -= amount;
    write_campaign(env, campaign);

    Ok(amount)
}
