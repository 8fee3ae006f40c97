//! # Governance Flows
//!
//! Membership and quorum changes ride the same execute pipeline as spending.
//! These scenarios follow accounts across several sequence values: adding an
//! owner under the old quorum, enforcing the new one, shrinking back, and
//! watching rejected changes leave no trace.

#[cfg(test)]
mod tests {
    use msw_account::{AccountEvent, EngineError, GovernanceAction};
    use msw_registry::{Registry, RegistryError};
    use shared_types::{Address, Bytes, U256};

    use crate::harness::{authorize, keypairs, Keypair, TokenLedger};

    const DOMAIN: u64 = 31337;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn registry_with_account(
        owners: &[Keypair],
        quorum: u64,
        funding: U256,
    ) -> (Registry, Address) {
        let mut registry = Registry::new(DOMAIN);
        let account = registry
            .create_account(
                owners.iter().map(Keypair::identity).collect(),
                quorum,
                funding,
            )
            .expect("account creation should succeed");
        (registry, account)
    }

    /// Submit a governance action signed by `signers`, through the registry.
    fn submit_governance(
        registry: &mut Registry,
        account: Address,
        signers: &[&Keypair],
        action: GovernanceAction,
    ) -> Result<(), RegistryError> {
        let payload = action.encode();
        let engine = registry.engine(&account).expect("engine");
        let sigs = authorize(engine, signers, account, U256::zero(), &payload);

        let mut ledger = TokenLedger::new();
        registry
            .execute(
                account,
                signers[0].identity(),
                account,
                U256::zero(),
                payload,
                &sigs,
                &mut ledger,
            )
            .map(|_| ())
    }

    // =============================================================================
    // LIFECYCLE
    // =============================================================================

    #[test]
    fn test_add_owner_then_enforce_new_quorum() {
        let keys = keypairs(2);
        let (alice, bob) = (&keys[0], &keys[1]);
        let (mut registry, account) =
            registry_with_account(std::slice::from_ref(alice), 1, U256::from(100));

        // Alice alone satisfies the original quorum of 1.
        submit_governance(
            &mut registry,
            account,
            &[alice],
            GovernanceAction::AddOwner {
                owner: bob.identity(),
                quorum: 2,
            },
        )
        .expect("add should succeed");

        let engine = registry.engine(&account).expect("engine");
        assert_eq!(engine.owner_count(), 2);
        assert!(engine.is_owner(&bob.identity()));
        assert_eq!(engine.quorum(), 2);
        assert_eq!(engine.sequence(), 1);

        // Bob is a recognized owner now, but one signature is no longer
        // enough.
        let payee = Keypair::random().identity();
        let payload = Bytes::new();
        let sigs = authorize(engine, &[bob], payee, U256::from(10), &payload);

        let mut ledger = TokenLedger::new();
        let outcome = registry.execute(
            account,
            bob.identity(),
            payee,
            U256::from(10),
            payload.clone(),
            &sigs,
            &mut ledger,
        );
        assert!(matches!(
            outcome,
            Err(RegistryError::Engine(EngineError::BelowQuorum {
                valid: 1,
                required: 2
            }))
        ));

        // Both owners together spend normally.
        let engine = registry.engine(&account).expect("engine");
        let sigs = authorize(engine, &[alice, bob], payee, U256::from(10), &payload);
        registry
            .execute(
                account,
                bob.identity(),
                payee,
                U256::from(10),
                payload,
                &sigs,
                &mut ledger,
            )
            .expect("joint execution");

        let engine = registry.engine(&account).expect("engine");
        assert_eq!(engine.balance(), U256::from(90));
        assert_eq!(engine.sequence(), 2);
    }

    #[test]
    fn test_remove_owner_restores_solo_control() {
        let keys = keypairs(2);
        let (alice, bob) = (&keys[0], &keys[1]);
        let (mut registry, account) = registry_with_account(&keys, 2, U256::from(100));

        submit_governance(
            &mut registry,
            account,
            &[alice, bob],
            GovernanceAction::RemoveOwner {
                owner: bob.identity(),
                quorum: 1,
            },
        )
        .expect("removal should succeed");

        let engine = registry.engine(&account).expect("engine");
        assert_eq!(engine.owner_count(), 1);
        assert!(!engine.is_owner(&bob.identity()));
        assert_eq!(engine.quorum(), 1);

        // Bob is a stranger now and cannot even submit.
        let payee = Keypair::random().identity();
        let payload = Bytes::new();
        let sigs = authorize(engine, &[bob], payee, U256::from(5), &payload);

        let mut ledger = TokenLedger::new();
        let outcome = registry.execute(
            account,
            bob.identity(),
            payee,
            U256::from(5),
            payload.clone(),
            &sigs,
            &mut ledger,
        );
        assert!(matches!(
            outcome,
            Err(RegistryError::Engine(EngineError::NotOwner(_)))
        ));

        // Alice spends alone again.
        let engine = registry.engine(&account).expect("engine");
        let sigs = authorize(engine, &[alice], payee, U256::from(5), &payload);
        registry
            .execute(
                account,
                alice.identity(),
                payee,
                U256::from(5),
                payload,
                &sigs,
                &mut ledger,
            )
            .expect("solo execution");
    }

    #[test]
    fn test_update_quorum_lifecycle() {
        let keys = keypairs(3);
        let (mut registry, account) = registry_with_account(&keys, 1, U256::from(100));

        submit_governance(
            &mut registry,
            account,
            &[&keys[0]],
            GovernanceAction::UpdateQuorum { quorum: 3 },
        )
        .expect("raising the quorum");

        let engine = registry.engine(&account).expect("engine");
        assert_eq!(engine.quorum(), 3);

        // Two of three no longer clears the bar.
        let payee = Keypair::random().identity();
        let payload = Bytes::new();
        let sigs = authorize(
            engine,
            &[&keys[0], &keys[1]],
            payee,
            U256::from(1),
            &payload,
        );

        let mut ledger = TokenLedger::new();
        let outcome = registry.execute(
            account,
            keys[0].identity(),
            payee,
            U256::from(1),
            payload.clone(),
            &sigs,
            &mut ledger,
        );
        assert!(matches!(
            outcome,
            Err(RegistryError::Engine(EngineError::BelowQuorum {
                valid: 2,
                required: 3
            }))
        ));

        // All three sign and the transfer clears.
        let engine = registry.engine(&account).expect("engine");
        let sigs = authorize(
            engine,
            &[&keys[0], &keys[1], &keys[2]],
            payee,
            U256::from(1),
            &payload,
        );
        registry
            .execute(
                account,
                keys[2].identity(),
                payee,
                U256::from(1),
                payload,
                &sigs,
                &mut ledger,
            )
            .expect("full quorum execution");
    }

    // =============================================================================
    // BOUNDS & ATOMICITY
    // =============================================================================

    #[test]
    fn test_rejected_changes_leave_no_trace() {
        let keys = keypairs(2);
        let (alice, bob) = (&keys[0], &keys[1]);
        let stranger = Keypair::random().identity();
        let (mut registry, account) = registry_with_account(&keys, 2, U256::from(100));

        let attempts = [
            // Unknown owner cannot be removed.
            GovernanceAction::RemoveOwner {
                owner: stranger,
                quorum: 1,
            },
            // Quorum beyond the owner count.
            GovernanceAction::UpdateQuorum { quorum: 3 },
            // The zero address can never become an owner.
            GovernanceAction::AddOwner {
                owner: Address::ZERO,
                quorum: 2,
            },
            // Owners are unique.
            GovernanceAction::AddOwner {
                owner: alice.identity(),
                quorum: 2,
            },
            // Removing one of two owners cannot keep a quorum of 2.
            GovernanceAction::RemoveOwner {
                owner: bob.identity(),
                quorum: 2,
            },
        ];

        for action in attempts {
            let outcome = submit_governance(&mut registry, account, &[alice, bob], action);
            assert!(matches!(
                outcome,
                Err(RegistryError::Engine(EngineError::ExecutionFailed))
            ));
        }

        // Nothing moved: same owners, same quorum, no consumed sequence,
        // empty journal.
        let engine = registry.engine(&account).expect("engine");
        assert_eq!(engine.owner_count(), 2);
        assert_eq!(engine.quorum(), 2);
        assert_eq!(engine.sequence(), 0);
        assert_eq!(engine.balance(), U256::from(100));
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_last_owner_cannot_be_removed() {
        let keys = keypairs(1);
        let (mut registry, account) =
            registry_with_account(&keys, 1, U256::zero());

        let outcome = submit_governance(
            &mut registry,
            account,
            &[&keys[0]],
            GovernanceAction::RemoveOwner {
                owner: keys[0].identity(),
                quorum: 1,
            },
        );

        assert!(matches!(
            outcome,
            Err(RegistryError::Engine(EngineError::ExecutionFailed))
        ));
        let engine = registry.engine(&account).expect("engine");
        assert_eq!(engine.owner_count(), 1);
        assert_eq!(engine.sequence(), 0);
    }

    // =============================================================================
    // EVENT TRAIL
    // =============================================================================

    #[test]
    fn test_membership_changes_are_journaled_in_order() {
        let keys = keypairs(2);
        let (alice, bob) = (&keys[0], &keys[1]);
        let (mut registry, account) =
            registry_with_account(std::slice::from_ref(alice), 1, U256::zero());

        submit_governance(
            &mut registry,
            account,
            &[alice],
            GovernanceAction::AddOwner {
                owner: bob.identity(),
                quorum: 1,
            },
        )
        .expect("add");

        submit_governance(
            &mut registry,
            account,
            &[alice],
            GovernanceAction::RemoveOwner {
                owner: bob.identity(),
                quorum: 1,
            },
        )
        .expect("remove");

        // Each execution journals the membership change first, then the
        // Executed entry that carried it.
        let events = registry.engine(&account).expect("engine").events();
        assert_eq!(events.len(), 4);

        assert!(matches!(
            &events[0],
            AccountEvent::OwnerChanged { owner, added: true } if *owner == bob.identity()
        ));
        assert!(matches!(&events[1], AccountEvent::Executed { sequence: 0, .. }));
        assert!(matches!(
            &events[2],
            AccountEvent::OwnerChanged { owner, added: false } if *owner == bob.identity()
        ));
        assert!(matches!(&events[3], AccountEvent::Executed { sequence: 1, .. }));
    }
}
