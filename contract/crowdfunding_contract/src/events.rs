use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{CampaignState, RequestId};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub owner: Address,
    pub goal: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct DonationReceivedEvent {
    pub backer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawRequestedEvent {
    pub request_id: RequestId,
    pub amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawConfirmedEvent {
    pub request_id: RequestId,
    pub backer: Address,
    pub approve: bool,
    pub weight: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawFinalizedEvent {
    pub request_id: RequestId,
    pub success: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct ProofSubmittedEvent {
    pub request_id: RequestId,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundClaimedEvent {
    pub backer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignEndedEvent {
    pub state: CampaignState,
    pub total_raised: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_donation_received(env: &Env, event: DonationReceivedEvent) {
    env.events().publish((Symbol::new(env, "donation_received"),), event);
}

pub fn emit_withdraw_requested(env: &Env, event: WithdrawRequestedEvent) {
    env.events().publish((Symbol::new(env, "withdraw_requested"),), event);
}

pub fn emit_withdraw_confirmed(env: &Env, event: WithdrawConfirmedEvent) {
    env.events().publish((Symbol::new(env, "withdraw_confirmed"),), event);
}

pub fn emit_withdraw_finalized(env: &Env, event: WithdrawFinalizedEvent) {
    env.events().publish((Symbol::new(env, "withdraw_finalized"),), event);
}

pub fn emit_proof_submitted(env: &Env, event: ProofSubmittedEvent) {
    env.events().publish((Symbol::new(env, "proof_submitted"),), event);
}

pub fn emit_refund_claimed(env: &Env, event: RefundClaimedEvent) {
    env.events().publish((Symbol::new(env, "refund_claimed"),), event);
}

pub fn emit_campaign_ended(env: &Env, event: CampaignEndedEvent) {
    env.events().publish((Symbol::new(env, "campaign_ended"),), event);
}
