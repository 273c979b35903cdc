use soroban_sdk::Env;

use crate::ledger::{require_active, write_campaign};
use crate::storage_types::{Campaign, CampaignState, CrowdfundingError};
use crate::withdrawal::require_no_open_request;

/// Terminal state a fully drained campaign settles into.
pub fn closing_state(campaign: &Campaign) -> CampaignState {
    if campaign.total_raised >= campaign.goal {
        CampaignState::Completed
    } else {
        CampaignState::Failed
    }
}

pub fn close(env: &Env, campaign: &mut Campaign) -> Result<CampaignState, CrowdfundingError> {
    require_active(campaign)?;
    require_no_open_request(env, campaign)?;
    if campaign.balance != 0 {
        return Err(CrowdfundingError::FundsRemaining);
    }

    campaign.state = closing_state(campaign);
    write_campaign(env, campaign);
    Ok(campaign.state)
}

/// A rejected withdraw request fails the whole campaign and opens refunds
/// to every backer.
pub fn fail(env: &Env, campaign: &mut Campaign) {
    campaign.state = CampaignState::Failed;
    write_campaign(env, campaign);
}
