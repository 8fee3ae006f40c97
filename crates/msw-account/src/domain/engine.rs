//! # Account Engine
//!
//! Multi-owner authorization over a single account: a transaction executes
//! only when a quorum of owners has signed the digest binding it to this
//! account, its domain, and the current sequence value.
//!
//! ## Execute Pipeline
//!
//! | Gate | Rejection |
//! |------|-----------|
//! | Submitter is an owner | `NotOwner` |
//! | Signatures decode and recover | `Signature` |
//! | Recovered identities strictly increase | `UnsortedOrDuplicateSigner` |
//! | Owner-held signatures reach quorum | `BelowQuorum` |
//! | Dispatch succeeds | `ExecutionFailed` (full rollback) |
//!
//! The sequence counter advances before the dispatch step, so a destination
//! calling back into the account can never replay the in-flight digest. If
//! the dispatch fails, the pre-execution snapshot is restored wholesale and
//! the counter value is available again.

use std::collections::HashSet;

use msw_signature::{recover_signer, EcdsaSignature};
use shared_types::{Address, Bytes, Digest, U256};

use crate::domain::entities::{AccountParams, ExecutionRecord};
use crate::domain::governance::GovernanceAction;
use crate::domain::invariants::{check_owner_set, check_quorum_bounds};
use crate::errors::{EngineError, ValidationError};
use crate::events::AccountEvent;
use crate::ports::outbound::{CallContext, CallFailure, CallTarget};

// =============================================================================
// ENGINE
// =============================================================================

/// A multi-owner account.
///
/// Owners are kept twice: a `Vec` preserving insertion order for the read
/// API, and a `HashSet` for O(1) membership checks. Governance keeps both in
/// step.
#[derive(Debug, Clone)]
pub struct AccountEngine {
    address: Address,
    domain_id: u64,
    owners: Vec<Address>,
    owner_index: HashSet<Address>,
    quorum: u64,
    sequence: u64,
    balance: U256,
    events: Vec<AccountEvent>,
}

/// Pre-execution state captured before the dispatch step.
struct Snapshot {
    sequence: u64,
    balance: U256,
    owners: Vec<Address>,
    owner_index: HashSet<Address>,
    quorum: u64,
    events_len: usize,
}

impl AccountEngine {
    /// Instantiate an account after validating its parameters as a whole.
    pub fn new(params: AccountParams) -> Result<Self, ValidationError> {
        check_owner_set(&params.owners)?;
        check_quorum_bounds(params.quorum, params.owners.len() as u64)?;

        let owner_index = params.owners.iter().copied().collect();

        Ok(Self {
            address: params.address,
            domain_id: params.domain_id,
            owners: params.owners,
            owner_index,
            quorum: params.quorum,
            sequence: 0,
            balance: params.funding,
            events: Vec::new(),
        })
    }

    // =========================================================================
    // READ API
    // =========================================================================

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn domain_id(&self) -> u64 {
        self.domain_id
    }

    /// Next sequence value a transaction must be signed over.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn quorum(&self) -> u64 {
        self.quorum
    }

    #[must_use]
    pub fn balance(&self) -> U256 {
        self.balance
    }

    /// Owners in insertion order.
    #[must_use]
    pub fn owners(&self) -> &[Address] {
        &self.owners
    }

    #[must_use]
    pub fn owner_count(&self) -> u64 {
        self.owners.len() as u64
    }

    #[must_use]
    pub fn is_owner(&self, identity: &Address) -> bool {
        self.owner_index.contains(identity)
    }

    /// Journal of everything that happened to this account, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AccountEvent] {
        &self.events
    }

    /// Digest owners sign to authorize a transaction at `sequence`.
    ///
    /// Bound to this account's address and domain, so a signature can never
    /// be replayed against a sibling account or on another domain.
    #[must_use]
    pub fn transaction_hash(
        &self,
        sequence: u64,
        destination: Address,
        value: U256,
        payload: &[u8],
    ) -> Digest {
        msw_signature::transaction_hash(
            self.address,
            self.domain_id,
            sequence,
            destination,
            value,
            payload,
        )
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Credit funds unconditionally. Anyone may deposit; the balance
    /// saturates at `U256::MAX`.
    pub fn deposit(&mut self, sender: Address, amount: U256) {
        self.balance = self.balance.saturating_add(amount);
        self.events.push(AccountEvent::Deposit {
            sender,
            amount,
            balance: self.balance,
        });
    }

    /// Execute a transaction authorized by a quorum of owner signatures.
    ///
    /// `signatures` are 65-byte encodings over the digest for the CURRENT
    /// sequence, submitted in strictly increasing signer order. On success
    /// the sequence has advanced and the dispatch effects are committed; on
    /// any failure the account is exactly as it was before the call.
    pub fn execute(
        &mut self,
        submitter: Address,
        destination: Address,
        value: U256,
        payload: Bytes,
        signatures: &[Bytes],
        target: &mut dyn CallTarget,
    ) -> Result<ExecutionRecord, EngineError> {
        if !self.is_owner(&submitter) {
            return Err(EngineError::NotOwner(submitter));
        }

        let digest = self.transaction_hash(self.sequence, destination, value, payload.as_slice());

        let valid = self.verify_signatures(&digest, signatures)?;
        if valid < self.quorum {
            return Err(EngineError::BelowQuorum {
                valid,
                required: self.quorum,
            });
        }

        // From here on state changes; capture everything dispatch can touch.
        let snapshot = self.snapshot();
        let consumed_sequence = self.sequence;
        self.sequence += 1;

        let ctx = CallContext {
            destination,
            value,
            payload: payload.clone(),
        };

        match self.dispatch(target, ctx) {
            Ok(result) => {
                self.events.push(AccountEvent::Executed {
                    owner: submitter,
                    destination,
                    value,
                    payload,
                    sequence: consumed_sequence,
                    digest,
                    result: result.clone(),
                });
                Ok(ExecutionRecord {
                    digest,
                    sequence: consumed_sequence,
                    result,
                })
            }
            Err(_) => {
                self.restore(snapshot);
                Err(EngineError::ExecutionFailed)
            }
        }
    }

    // =========================================================================
    // VERIFICATION
    // =========================================================================

    /// Count owner signatures in a single ascending pass.
    ///
    /// Requiring strictly increasing recovered identities rejects duplicates
    /// and unsorted submissions in O(k) without any scratch set. Identities
    /// outside the owner set are skipped, not counted and not an error.
    fn verify_signatures(&self, digest: &Digest, signatures: &[Bytes]) -> Result<u64, EngineError> {
        let mut valid: u64 = 0;
        let mut previous: Option<Address> = None;

        for (position, raw) in signatures.iter().enumerate() {
            let signature = EcdsaSignature::from_bytes(raw.as_slice())?;
            let signer = recover_signer(digest, &signature)?;

            if let Some(last) = previous {
                if signer <= last {
                    return Err(EngineError::UnsortedOrDuplicateSigner { position });
                }
            }
            previous = Some(signer);

            if self.is_owner(&signer) {
                valid += 1;
            }
        }

        Ok(valid)
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Perform the value/payload dispatch of a verified transaction.
    ///
    /// The failure reason never leaves the engine; the caller of `execute`
    /// sees only `ExecutionFailed` regardless of cause.
    fn dispatch(
        &mut self,
        target: &mut dyn CallTarget,
        ctx: CallContext,
    ) -> Result<Bytes, CallFailure> {
        if ctx.destination == self.address {
            return self.dispatch_to_self(&ctx);
        }

        let remaining = self
            .balance
            .checked_sub(ctx.value)
            .ok_or_else(|| CallFailure::new("insufficient balance"))?;
        self.balance = remaining;

        target.call(self, ctx)
    }

    /// A self-targeted transaction carries a governance action.
    ///
    /// Value stays with the account, so only coverage is checked. A payload
    /// that does not decode fails the dispatch; there is no other way to
    /// reach the governance mutators.
    fn dispatch_to_self(&mut self, ctx: &CallContext) -> Result<Bytes, CallFailure> {
        if self.balance < ctx.value {
            return Err(CallFailure::new("insufficient balance"));
        }

        let action = GovernanceAction::decode(ctx.payload.as_slice())
            .ok_or_else(|| CallFailure::new("payload is not a governance action"))?;

        self.apply_governance(action)
            .map_err(|violation| CallFailure::new(violation.to_string()))?;

        Ok(Bytes::new())
    }

    // =========================================================================
    // GOVERNANCE (internal; reachable only through a quorum-verified dispatch)
    // =========================================================================

    fn apply_governance(&mut self, action: GovernanceAction) -> Result<(), ValidationError> {
        match action {
            GovernanceAction::AddOwner { owner, quorum } => self.add_owner(owner, quorum),
            GovernanceAction::RemoveOwner { owner, quorum } => self.remove_owner(owner, quorum),
            GovernanceAction::UpdateQuorum { quorum } => self.update_quorum(quorum),
        }
    }

    fn add_owner(&mut self, owner: Address, quorum: u64) -> Result<(), ValidationError> {
        if owner.is_zero() {
            return Err(ValidationError::NullOwner);
        }
        if self.is_owner(&owner) {
            return Err(ValidationError::DuplicateOwner(owner));
        }
        check_quorum_bounds(quorum, self.owner_count() + 1)?;

        self.owners.push(owner);
        self.owner_index.insert(owner);
        self.quorum = quorum;
        self.events
            .push(AccountEvent::OwnerChanged { owner, added: true });
        Ok(())
    }

    fn remove_owner(&mut self, owner: Address, quorum: u64) -> Result<(), ValidationError> {
        if !self.is_owner(&owner) {
            return Err(ValidationError::UnknownOwner(owner));
        }
        let remaining = self.owner_count() - 1;
        if remaining == 0 {
            return Err(ValidationError::EmptyOwnerSet);
        }
        check_quorum_bounds(quorum, remaining)?;

        self.owners.retain(|candidate| *candidate != owner);
        self.owner_index.remove(&owner);
        self.quorum = quorum;
        self.events
            .push(AccountEvent::OwnerChanged { owner, added: false });
        Ok(())
    }

    fn update_quorum(&mut self, quorum: u64) -> Result<(), ValidationError> {
        check_quorum_bounds(quorum, self.owner_count())?;
        self.quorum = quorum;
        Ok(())
    }

    // =========================================================================
    // SNAPSHOT / ROLLBACK
    // =========================================================================

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            sequence: self.sequence,
            balance: self.balance,
            owners: self.owners.clone(),
            owner_index: self.owner_index.clone(),
            quorum: self.quorum,
            events_len: self.events.len(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.sequence = snapshot.sequence;
        self.balance = snapshot.balance;
        self.owners = snapshot.owners;
        self.owner_index = snapshot.owner_index;
        self.quorum = snapshot.quorum;
        self.events.truncate(snapshot.events_len);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
