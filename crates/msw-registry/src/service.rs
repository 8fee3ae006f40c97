//! # Registry Service
//!
//! Creates accounts, owns their engines, and answers directory queries.
//! This layer also carries the workspace's structured logging: the engines
//! underneath are silent, so creation, deposits, and execution outcomes are
//! reported here and nowhere else.

use std::collections::{HashMap, HashSet};

use msw_account::{AccountEngine, AccountParams, CallTarget, ExecutionRecord};
use shared_types::{Address, Bytes, U256};
use tracing::{info, instrument, warn};

use crate::domain::entities::{derive_address, AccountRecord};
use crate::errors::RegistryError;

/// Factory and directory for the accounts of one domain.
///
/// Registered state only ever grows: records are append-only and engines are
/// never evicted. A failed creation leaves no trace.
#[derive(Debug, Default)]
pub struct Registry {
    domain_id: u64,
    records: Vec<AccountRecord>,
    index: HashSet<Address>,
    engines: HashMap<Address, AccountEngine>,
}

impl Registry {
    /// A fresh registry for `domain_id`.
    #[must_use]
    pub fn new(domain_id: u64) -> Self {
        Self {
            domain_id,
            records: Vec::new(),
            index: HashSet::new(),
            engines: HashMap::new(),
        }
    }

    #[must_use]
    pub fn domain_id(&self) -> u64 {
        self.domain_id
    }

    /// Number of accounts ever created here.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.records.len() as u64
    }

    /// O(1) membership check over every address this registry created.
    #[must_use]
    pub fn is_managed_address(&self, address: &Address) -> bool {
        self.index.contains(address)
    }

    /// The record of the `index`-th creation.
    pub fn get_account(&self, index: u64) -> Result<&AccountRecord, RegistryError> {
        let count = self.count();
        self.records
            .get(index as usize)
            .ok_or(RegistryError::IndexOutOfRange { index, count })
    }

    /// Read access to a managed engine.
    #[must_use]
    pub fn engine(&self, address: &Address) -> Option<&AccountEngine> {
        self.engines.get(address)
    }

    /// Write access to a managed engine, for hosts that dispatch directly.
    #[must_use]
    pub fn engine_mut(&mut self, address: &Address) -> Option<&mut AccountEngine> {
        self.engines.get_mut(address)
    }

    /// Create an account and return its derived address.
    ///
    /// Parameters are validated before anything is registered; on rejection
    /// the registry is exactly as it was. The derived address is unique per
    /// creation because the creation index is part of its preimage.
    #[instrument(skip(self, owners), fields(owner_count = owners.len()))]
    pub fn create_account(
        &mut self,
        owners: Vec<Address>,
        quorum: u64,
        funding: U256,
    ) -> Result<Address, RegistryError> {
        let index = self.count();
        let address = derive_address(self.domain_id, index, quorum, &owners);

        let engine = AccountEngine::new(AccountParams {
            address,
            domain_id: self.domain_id,
            owners,
            quorum,
            funding,
        })?;

        self.records.push(AccountRecord {
            address,
            quorum,
            funding,
            index,
        });
        self.index.insert(address);
        self.engines.insert(address, engine);

        info!(
            account = ?address,
            index = index,
            quorum = quorum,
            funding = %funding,
            "Account created"
        );

        Ok(address)
    }

    /// Credit a managed account.
    #[instrument(skip(self))]
    pub fn deposit(
        &mut self,
        account: Address,
        sender: Address,
        amount: U256,
    ) -> Result<(), RegistryError> {
        let engine = self
            .engines
            .get_mut(&account)
            .ok_or(RegistryError::UnknownAccount(account))?;

        engine.deposit(sender, amount);

        info!(
            account = ?account,
            sender = ?sender,
            amount = %amount,
            balance = %engine.balance(),
            "Deposit received"
        );

        Ok(())
    }

    /// Execute a transaction against a managed account.
    ///
    /// Pure pass-through to the engine; this wrapper only resolves the
    /// address and reports the outcome.
    #[allow(clippy::too_many_arguments)]
    #[instrument(
        skip(self, payload, signatures, target),
        fields(signature_count = signatures.len())
    )]
    pub fn execute(
        &mut self,
        account: Address,
        submitter: Address,
        destination: Address,
        value: U256,
        payload: Bytes,
        signatures: &[Bytes],
        target: &mut dyn CallTarget,
    ) -> Result<ExecutionRecord, RegistryError> {
        let engine = self
            .engines
            .get_mut(&account)
            .ok_or(RegistryError::UnknownAccount(account))?;

        match engine.execute(submitter, destination, value, payload, signatures, target) {
            Ok(record) => {
                info!(
                    account = ?account,
                    destination = ?destination,
                    value = %value,
                    sequence = record.sequence,
                    "Transaction executed"
                );
                Ok(record)
            }
            Err(error) => {
                warn!(
                    account = ?account,
                    destination = ?destination,
                    error = %error,
                    "Execution rejected"
                );
                Err(RegistryError::Engine(error))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
