#![no_std]


mod events;
mod ledger;
mod lifecycle;
mod refund;
mod storage_types;
mod withdrawal;

pub use storage_types::{
    Backer, Campaign, CampaignState, CrowdfundingError, ErrorKind, RequestId, VoteChoice,
    WithdrawRequest,
};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Set up the campaign this contract instance escrows for
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        title: String,
        description: String,
        goal: i128,
    ) -> Result<(), CrowdfundingError> {
        if ledger::has_campaign(&env) {
            return Err(CrowdfundingError::AlreadyInitialized);
        }
        owner.require_auth();

        if goal <= 0 {
            return Err(CrowdfundingError::InvalidAmount);
        }

        let campaign = Campaign {
            owner: owner.clone(),
            title,
            description,
            goal,
            total_raised: 0,
            balance: 0,
            state: CampaignState::Active,
            request_count: 0,
            created_at: env.ledger().timestamp(),
        };

        ledger::write_token(&env, &token);
        ledger::write_campaign(&env, &campaign);

        events::emit_campaign_created(&env, events::CampaignCreatedEvent { owner, goal });

        Ok(())
    }

    /// Contribute `amount` of the campaign token
    pub fn fund(env: Env, backer: Address, amount: i128) -> Result<(), CrowdfundingError> {
        backer.require_auth();

        if amount <= 0 {
            return Err(CrowdfundingError::InvalidAmount);
        }

        let mut campaign = ledger::read_campaign(&env)?;
        ledger::require_active(&campaign)?;

        let total = ledger::record_contribution(&env, &mut campaign, &backer, amount);
        ledger::transfer_in(&env, &backer, amount)?;

        log!(&env, "donation received", backer, amount, total);

        events::emit_donation_received(
            &env,
            events::DonationReceivedEvent {
                backer,
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Owner proposes withdrawing `amount`, open for votes for `duration_seconds`
    pub fn create_withdraw_request(
        env: Env,
        caller: Address,
        amount: i128,
        duration_seconds: u64,
    ) -> Result<RequestId, CrowdfundingError> {
        caller.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        ledger::require_owner(&campaign, &caller)?;
        ledger::require_active(&campaign)?;

        let request = withdrawal::open_request(&env, &mut campaign, amount, duration_seconds)?;
        ledger::write_campaign(&env, &campaign);

        log!(&env, "withdraw requested", request.id, amount, request.deadline);

        events::emit_withdraw_requested(
            &env,
            events::WithdrawRequestedEvent {
                request_id: request.id,
                amount,
                deadline: request.deadline,
            },
        );

        Ok(request.id)
    }

    /// Backer votes on an open request, weighted by their current contribution
    pub fn confirm_withdraw_request(
        env: Env,
        backer: Address,
        request_id: RequestId,
        approve: bool,
    ) -> Result<(), CrowdfundingError> {
        backer.require_auth();

        ledger::read_campaign(&env)?;
        let mut request = withdrawal::read_request(&env, request_id)?;

        let mut record = ledger::read_backer(&env, &backer);
        if !record.is_backer() {
            return Err(CrowdfundingError::NotABacker);
        }

        let weight = record.total_contribution;
        withdrawal::cast_vote(&env, &mut request, &backer, approve, weight)?;

        if !approve && !record.dissented {
            record.dissented = true;
            ledger::write_backer(&env, &backer, &record);
        }

        log!(&env, "withdraw confirmed", request_id, backer, approve, weight);

        events::emit_withdraw_confirmed(
            &env,
            events::WithdrawConfirmedEvent {
                request_id,
                backer,
                approve,
                weight,
            },
        );

        Ok(())
    }

    /// Close voting on a request once its deadline has passed. Anyone may
    /// call this; an approved request pays the owner, a rejected one fails
    /// the campaign. An approved request that custody can no longer cover,
    /// because dissenters refunded during the vote, counts as rejected.
    pub fn finalize_withdraw_request(
        env: Env,
        request_id: RequestId,
    ) -> Result<bool, CrowdfundingError> {
        let mut campaign = ledger::read_campaign(&env)?;
        let mut request = withdrawal::read_request(&env, request_id)?;
        withdrawal::require_closable(&env, &request)?;

        let success = withdrawal::is_payable(&request, &campaign);

        request.finalized = true;
        request.success = success;
        withdrawal::write_request(&env, &request);

        if success {
            campaign.balance -= request.amount;
            ledger::write_campaign(&env, &campaign);
            ledger::transfer_out(&env, &campaign.owner, request.amount)?;
        } else {
            lifecycle::fail(&env, &mut campaign);
        }

        log!(
            &env,
            "withdraw finalized",
            request_id,
            success,
            request.yes_weight,
            request.no_weight
        );

        events::emit_withdraw_finalized(
            &env,
            events::WithdrawFinalizedEvent { request_id, success },
        );

        Ok(success)
    }

    /// Owner records that funds from a finalized request were spent
    pub fn submit_proof(
        env: Env,
        caller: Address,
        request_id: RequestId,
    ) -> Result<(), CrowdfundingError> {
        caller.require_auth();

        let campaign = ledger::read_campaign(&env)?;
        ledger::require_owner(&campaign, &caller)?;

        let mut request = withdrawal::read_request(&env, request_id)?;
        withdrawal::mark_proof(&mut request)?;
        withdrawal::write_request(&env, &request);

        events::emit_proof_submitted(
            &env,
            events::ProofSubmittedEvent {
                request_id,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Return the backer's whole contribution if the campaign failed or
    /// the backer voted against a withdrawal
    pub fn refund(env: Env, backer: Address) -> Result<i128, CrowdfundingError> {
        backer.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        let amount = refund::settle(&env, &mut campaign, &backer)?;
        ledger::transfer_out(&env, &backer, amount)?;

        log!(&env, "refund claimed", backer, amount);

        events::emit_refund_claimed(&env, events::RefundClaimedEvent { backer, amount });

        Ok(amount)
    }

    /// Owner closes out a drained campaign
    pub fn end_campaign(env: Env, caller: Address) -> Result<CampaignState, CrowdfundingError> {
        caller.require_auth();

        let mut campaign = ledger::read_campaign(&env)?;
        ledger::require_owner(&campaign, &caller)?;

        let state = lifecycle::close(&env, &mut campaign)?;

        log!(&env, "campaign ended", state, campaign.total_raised);

        events::emit_campaign_ended(
            &env,
            events::CampaignEndedEvent {
                state,
                total_raised: campaign.total_raised,
            },
        );

        Ok(state)
    }

    // View functions

    /// The whole campaign record
    pub fn get_campaign(env: Env) -> Result<Campaign, CrowdfundingError> {
        ledger::read_campaign(&env)
    }

    pub fn owner(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(ledger::read_campaign(&env)?.owner)
    }

    pub fn token(env: Env) -> Result<Address, CrowdfundingError> {
        ledger::read_token(&env)
    }

    pub fn goal(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(ledger::read_campaign(&env)?.goal)
    }

    pub fn total_raised(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(ledger::read_campaign(&env)?.total_raised)
    }

    pub fn balance(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(ledger::read_campaign(&env)?.balance)
    }

    pub fn state(env: Env) -> Result<CampaignState, CrowdfundingError> {
        Ok(ledger::read_campaign(&env)?.state)
    }

    pub fn get_contribution(env: Env, backer: Address) -> i128 {
        ledger::read_backer(&env, &backer).total_contribution
    }

    pub fn has_dissented(env: Env, backer: Address) -> bool {
        ledger::read_backer(&env, &backer).dissented
    }

    pub fn withdraw_request_count(env: Env) -> Result<u32, CrowdfundingError> {
        Ok(ledger::read_campaign(&env)?.request_count)
    }

    pub fn get_withdraw_request(
        env: Env,
        request_id: RequestId,
    ) -> Result<WithdrawRequest, CrowdfundingError> {
        withdrawal::read_request(&env, request_id)
    }

    pub fn get_vote(env: Env, request_id: RequestId, backer: Address) -> VoteChoice {
        withdrawal::read_vote(&env, request_id, &backer)
    }
}
