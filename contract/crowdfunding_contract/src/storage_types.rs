use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    Token,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Backer(Address),
    WithdrawRequest(RequestId),
    Vote(RequestId, Address),
}

pub type RequestId = u32;

// Campaign lifecycle; Completed and Failed are terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignState {
    Active = 0,
    Completed = 1,
    Failed = 2,
}

impl CampaignState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CampaignState::Active)
    }
}

// A backer's choice on one withdraw request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum VoteChoice {
    Pending = 0,
    Yes = 1,
    No = 2,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub goal: i128,
    pub total_raised: i128,            // Historical, never reduced by refunds
    pub balance: i128,                 // Custody currently held by the contract
    pub state: CampaignState,
    pub request_count: u32,
    pub created_at: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[contracttype]
pub struct Backer {
    pub total_contribution: i128,
    pub dissented: bool,               // Cast a No vote on some request
}

impl Backer {
    pub fn is_backer(&self) -> bool {
        self.total_contribution > 0
    }
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct WithdrawRequest {
    pub id: RequestId,
    pub amount: i128,
    pub created_at: u64,
    pub deadline: u64,                 // Voting closes at this ledger timestamp
    pub yes_weight: i128,
    pub no_weight: i128,
    pub finalized: bool,
    pub success: bool,
    pub proof_submitted: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    CampaignNotActive = 4,
    RequestPending = 5,
    VotingStillOpen = 6,
    VotingClosed = 7,
    AlreadyFinalized = 8,
    RequestNotFinalized = 9,
    RequestNotFound = 10,
    ProofAlreadySubmitted = 11,
    InvalidAmount = 12,
    InvalidDuration = 13,
    AlreadyConfirmed = 14,
    NotABacker = 15,
    RefundNotAllowed = 16,
    InsufficientCustody = 17,
    FundsRemaining = 18,
}

/// Broad class of a [`CrowdfundingError`], for callers that only care
/// about why an operation was refused rather than the exact precondition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Setup,
    Authorization,
    Sequencing,
    Value,
    RefundIneligible,
    InsufficientCustody,
    EndOfLife,
}

impl CrowdfundingError {
    pub fn kind(&self) -> ErrorKind {
        use CrowdfundingError::*;
        match self {
            AlreadyInitialized | NotInitialized => ErrorKind::Setup,
            NotOwner => ErrorKind::Authorization,
            CampaignNotActive | RequestPending | VotingStillOpen | VotingClosed
            | AlreadyFinalized | RequestNotFinalized | RequestNotFound
            | ProofAlreadySubmitted => ErrorKind::Sequencing,
            InvalidAmount | InvalidDuration | AlreadyConfirmed | NotABacker => ErrorKind::Value,
            RefundNotAllowed => ErrorKind::RefundIneligible,
            InsufficientCustody => ErrorKind::InsufficientCustody,
            FundsRemaining => ErrorKind::EndOfLife,
        }
    }
}

// Constants
pub const LEDGERS_PER_DAY: u32 = 17280;
pub const TTL_INSTANCE: u32 = LEDGERS_PER_DAY * 30; // 30 days
pub const TTL_PERSISTENT: u32 = LEDGERS_PER_DAY * 90; // 90 days
