use soroban_sdk::{Address, Env};

use crate::ledger::extend_persistent;
use crate::storage_types::{
    Campaign, CrowdfundingError, PersistentKey, RequestId, VoteChoice, WithdrawRequest,
};

pub fn read_request(
    env: &Env,
    request_id: RequestId,
) -> Result<WithdrawRequest, CrowdfundingError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::WithdrawRequest(request_id))
        .ok_or(CrowdfundingError::RequestNotFound)
}

pub fn write_request(env: &Env, request: &WithdrawRequest) {
    let key = PersistentKey::WithdrawRequest(request.id);
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

pub fn read_vote(env: &Env, request_id: RequestId, account: &Address) -> VoteChoice {
    env.storage()
        .persistent()
        .get(&PersistentKey::Vote(request_id, account.clone()))
        .unwrap_or(VoteChoice::Pending)
}

fn write_vote(env: &Env, request_id: RequestId, account: &Address, choice: VoteChoice) {
    let key = PersistentKey::Vote(request_id, account.clone());
    env.storage().persistent().set(&key, &choice);
    extend_persistent(env, &key);
}

/// Fails while the most recent request is still open. Requests are created
/// strictly one after another, so only the latest one can be unfinalized.
pub fn require_no_open_request(env: &Env, campaign: &Campaign) -> Result<(), CrowdfundingError> {
    if campaign.request_count == 0 {
        return Ok(());
    }
    let latest = read_request(env, campaign.request_count)?;
    if !latest.finalized {
        return Err(CrowdfundingError::RequestPending);
    }
    Ok(())
}

pub fn open_request(
    env: &Env,
    campaign: &mut Campaign,
    amount: i128,
    duration_seconds: u64,
) -> Result<WithdrawRequest, CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::InvalidAmount);
    }
    if duration_seconds == 0 {
        return Err(CrowdfundingError::InvalidDuration);
    }
    require_no_open_request(env, campaign)?;
    if amount > campaign.balance {
        return Err(CrowdfundingError::InsufficientCustody);
    }

    let now = env.ledger().timestamp();
    let deadline = now
        .checked_add(duration_seconds)
        .ok_or(CrowdfundingError::InvalidDuration)?;

    campaign.request_count += 1;
    let request = WithdrawRequest {
        id: campaign.request_count,
        amount,
        created_at: now,
        deadline,
        yes_weight: 0,
        no_weight: 0,
        finalized: false,
        success: false,
        proof_submitted: false,
    };

    write_request(env, &request);
    Ok(request)
}

/// Adds `weight` to one side of the tally and records the backer's choice.
/// The weight is frozen at this point; later funding or refunds by the same
/// backer do not touch an already cast vote.
pub fn cast_vote(
    env: &Env,
    request: &mut WithdrawRequest,
    account: &Address,
    approve: bool,
    weight: i128,
) -> Result<(), CrowdfundingError> {
    if request.finalized || env.ledger().timestamp() >= request.deadline {
        return Err(CrowdfundingError::VotingClosed);
    }
    if read_vote(env, request.id, account) != VoteChoice::Pending {
        return Err(CrowdfundingError::AlreadyConfirmed);
    }

    let choice = if approve {
        request.yes_weight += weight;
        VoteChoice::Yes
    } else {
        request.no_weight += weight;
        VoteChoice::No
    };

    write_request(env, request);
    write_vote(env, request.id, account, choice);
    Ok(())
}

/// Strict majority of cast weight. Ties and empty tallies are rejections.
pub fn is_approved(request: &WithdrawRequest) -> bool {
    request.yes_weight > request.no_weight
}

/// Approved and still covered by what the campaign holds.
pub fn is_payable(request: &WithdrawRequest, campaign: &Campaign) -> bool {
    is_approved(request) && request.amount <= campaign.balance
}

pub fn require_closable(env: &Env, request: &WithdrawRequest) -> Result<(), CrowdfundingError> {
    if request.finalized {
        return Err(CrowdfundingError::AlreadyFinalized);
    }
    if env.ledger().timestamp() < request.deadline {
        return Err(CrowdfundingError::VotingStillOpen);
    }
    Ok(())
}

pub fn mark_proof(request: &mut WithdrawRequest) -> Result<(), CrowdfundingError> {
    if !request.finalized {
        return Err(CrowdfundingError::RequestNotFinalized);
    }
    if request.proof_submitted {
        return Err(CrowdfundingError::ProofAlreadySubmitted);
    }
    request.proof_submitted = true;
    Ok(())
}
