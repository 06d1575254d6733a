//! # Slash Window Integration Tests
//!
//! Drives the full service against the in-memory staking keeper.
//!
//! Reference window: 10 periods per window, 50% minimum valid votes
//! (5 periods), 5% slash fraction, 1000 bonded tokens per validator.

use qc_18_oracle_accountability::{
    AccountabilityConfig, AccountabilityDependencies, BondStatus, GovernedParams,
    InMemoryStakingKeeper, InMemoryStateStore, KeeperOperation, OracleAccountabilityApi,
    OracleAccountabilityService, OracleEvent, OracleParams, PenaltyCounter, SkipReason,
    ValidatorView,
};
use shared_types::{Dec, ValidatorAddress};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// =============================================================================
// TEST HELPERS
// =============================================================================

const PERIODS_PER_WINDOW: u64 = 10;
const MIN_VALID_PERIODS: u64 = 5;
const BONDED_TOKENS: u128 = 1000;
const WINDOW_HEIGHT: u64 = 10;

type Service =
    OracleAccountabilityService<InMemoryStateStore, InMemoryStakingKeeper, GovernedParams>;

struct Harness {
    service: Service,
    keeper: Arc<InMemoryStakingKeeper>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn val(id: u8) -> ValidatorAddress {
    let mut bytes = [0u8; 20];
    bytes[19] = id;
    ValidatorAddress(bytes)
}

fn reference_params() -> OracleParams {
    OracleParams {
        vote_period: 1,
        slash_window: PERIODS_PER_WINDOW,
        min_valid_per_window: "0.5".parse().unwrap(),
        slash_fraction: "0.05".parse().unwrap(),
    }
}

fn harness() -> Harness {
    init_tracing();
    let keeper = Arc::new(InMemoryStakingKeeper::with_validators([
        ValidatorView::bonded(val(1), BONDED_TOKENS),
        ValidatorView::bonded(val(2), BONDED_TOKENS),
    ]));
    let service = OracleAccountabilityService::new(AccountabilityDependencies {
        store: Arc::new(InMemoryStateStore::new()),
        keeper: keeper.clone(),
        params: Arc::new(GovernedParams::new(reference_params()).unwrap()),
        config: AccountabilityConfig::default(),
    });
    Harness { service, keeper }
}

fn slashed_tokens() -> u128 {
    // floor(1000 * 0.95)
    950
}

impl Harness {
    fn tokens(&self, v: ValidatorAddress) -> u128 {
        self.keeper.get(&v).unwrap().tokens
    }

    fn jailed(&self, v: ValidatorAddress) -> bool {
        self.keeper.get(&v).unwrap().jailed
    }

    fn counter(&self, v: ValidatorAddress) -> PenaltyCounter {
        self.service.vote_penalty_counter(&v).unwrap()
    }
}

// =============================================================================
// WINDOW ARITHMETIC
// =============================================================================

#[test]
fn test_reference_window_threshold() {
    let h = harness();
    let accountant = h.service.window_accountant().unwrap();

    assert_eq!(accountant.periods_per_window(), PERIODS_PER_WINDOW);
    assert_eq!(accountant.min_valid_periods(), MIN_VALID_PERIODS);
}

// =============================================================================
// PENALTY DECISIONS
// =============================================================================

#[test]
fn test_no_penalty_at_exact_threshold() {
    let h = harness();
    h.service
        .set_vote_penalty_counter(&val(1), MIN_VALID_PERIODS, 5, 0)
        .unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert!(outcome.penalized.is_empty());
    assert_eq!(h.tokens(val(1)), BONDED_TOKENS);
    assert!(!h.jailed(val(1)));
    assert_eq!(h.counter(val(1)), PenaltyCounter::default());
}

#[test]
fn test_no_penalty_when_counts_exceed_window() {
    let h = harness();
    h.service
        .set_vote_penalty_counter(&val(1), PERIODS_PER_WINDOW, 0, PERIODS_PER_WINDOW)
        .unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert!(outcome.penalized.is_empty());
    assert_eq!(h.tokens(val(1)), BONDED_TOKENS);
    assert!(!h.jailed(val(1)));
    assert_eq!(h.counter(val(1)), PenaltyCounter::default());
}

#[test]
fn test_penalty_on_shortfall_from_misses() {
    let h = harness();
    h.service
        .set_vote_penalty_counter(&val(1), MIN_VALID_PERIODS - 1, 6, 0)
        .unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert!(outcome.is_penalized(&val(1)));
    assert_eq!(h.tokens(val(1)), slashed_tokens());
    assert!(h.jailed(val(1)));
    assert_eq!(h.counter(val(1)), PenaltyCounter::default());
}

#[test]
fn test_penalty_on_shortfall_from_abstentions() {
    let h = harness();
    h.service.set_vote_penalty_counter(&val(1), 0, 0, 6).unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert!(outcome.is_penalized(&val(1)));
    assert_eq!(h.tokens(val(1)), slashed_tokens());
    assert!(h.jailed(val(1)));
}

#[test]
fn test_misses_and_abstentions_are_fungible() {
    let misses = harness();
    misses.service.set_vote_penalty_counter(&val(1), 0, 6, 0).unwrap();
    misses.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    let abstains = harness();
    abstains.service.set_vote_penalty_counter(&val(1), 0, 0, 6).unwrap();
    abstains.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert_eq!(misses.keeper.get(&val(1)), abstains.keeper.get(&val(1)));
}

#[test]
fn test_no_penalty_on_unbonded_validator() {
    let h = harness();
    h.keeper.set_status(&val(1), BondStatus::Unbonded).unwrap();
    h.service
        .set_vote_penalty_counter(&val(1), MIN_VALID_PERIODS - 1, 6, 0)
        .unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert_eq!(outcome.skip_reason(&val(1)), Some(SkipReason::NotBonded));
    assert_eq!(h.tokens(val(1)), BONDED_TOKENS);
    assert!(!h.jailed(val(1)));
    assert_eq!(h.counter(val(1)), PenaltyCounter::default());
}

#[test]
fn test_no_double_penalty_on_jailed_validator() {
    let h = harness();
    h.keeper.set_jailed(&val(1), true).unwrap();
    h.service
        .set_vote_penalty_counter(&val(1), MIN_VALID_PERIODS - 1, 6, 0)
        .unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert_eq!(outcome.skip_reason(&val(1)), Some(SkipReason::AlreadyJailed));
    assert_eq!(h.tokens(val(1)), BONDED_TOKENS);
    assert!(h.keeper.operations().is_empty());
    assert_eq!(h.counter(val(1)), PenaltyCounter::default());
}

#[test]
fn test_second_pass_without_activity_is_noop() {
    let h = harness();
    h.service.set_vote_penalty_counter(&val(1), 0, 10, 0).unwrap();
    h.service.set_vote_penalty_counter(&val(2), 10, 0, 0).unwrap();
    h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();
    h.keeper.set_jailed(&val(1), false).unwrap();
    h.keeper.clear_operations();

    let outcome = h.service.slash_and_reset_counters(2 * WINDOW_HEIGHT).unwrap();

    assert_eq!(outcome.processed, 0);
    assert!(outcome.penalized.is_empty());
    assert!(h.keeper.operations().is_empty());
    assert!(!h.jailed(val(1)));
    assert!(!h.jailed(val(2)));
}

#[test]
fn test_zeroed_counters_do_not_trigger_penalty() {
    let h = harness();
    h.service.set_vote_penalty_counter(&val(1), 0, 0, 0).unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert_eq!(outcome.skip_reason(&val(1)), Some(SkipReason::NoActivity));
    assert!(!h.jailed(val(1)));
}

// =============================================================================
// SEQUENTIAL WINDOWS ON ONE VALIDATOR
// =============================================================================

#[test]
fn test_validator_lifecycle_across_windows() {
    let h = harness();
    let v = val(1);

    // Window 1: enough valid votes
    h.service
        .set_vote_penalty_counter(&v, PERIODS_PER_WINDOW - MIN_VALID_PERIODS, 0, MIN_VALID_PERIODS)
        .unwrap();
    h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();
    assert_eq!(h.tokens(v), BONDED_TOKENS);

    // Window 2: one short
    h.service
        .set_vote_penalty_counter(&v, MIN_VALID_PERIODS - 1, 0, 0)
        .unwrap();
    h.service.slash_and_reset_counters(2 * WINDOW_HEIGHT).unwrap();
    assert_eq!(h.tokens(v), slashed_tokens());
    assert!(h.jailed(v));

    // Window 3: still jailed, no second slash
    h.service.set_vote_penalty_counter(&v, 0, 10, 0).unwrap();
    h.service.slash_and_reset_counters(3 * WINDOW_HEIGHT).unwrap();
    assert_eq!(h.tokens(v), slashed_tokens());

    // Rehabilitated externally, fails again on abstentions
    h.keeper.set_jailed(&v, false).unwrap();
    h.keeper.set_tokens(&v, BONDED_TOKENS).unwrap();
    h.service
        .set_vote_penalty_counter(&v, 0, PERIODS_PER_WINDOW - MIN_VALID_PERIODS + 1, 0)
        .unwrap();
    h.service.slash_and_reset_counters(4 * WINDOW_HEIGHT).unwrap();
    assert_eq!(h.tokens(v), slashed_tokens());
    assert!(h.jailed(v));
}

// =============================================================================
// TALLY-DRIVEN WINDOW
// =============================================================================

#[test]
fn test_tally_increments_through_end_block() {
    let h = harness();

    for height in 1..=WINDOW_HEIGHT {
        // val(1) votes validly every period; val(2) only in the first four
        h.service.increment_valid(&val(1)).unwrap();
        if height <= 4 {
            h.service.increment_valid(&val(2)).unwrap();
        } else if height % 2 == 0 {
            h.service.increment_abstain(&val(2)).unwrap();
        } else {
            h.service.increment_miss(&val(2)).unwrap();
        }

        let outcome = h.service.end_block(height).unwrap();
        if height < WINDOW_HEIGHT {
            assert!(outcome.is_none());
        } else {
            let outcome = outcome.unwrap();
            assert_eq!(outcome.processed, 2);
            assert!(!outcome.is_penalized(&val(1)));
            assert!(outcome.is_penalized(&val(2)));
        }
    }

    assert_eq!(h.tokens(val(1)), BONDED_TOKENS);
    assert_eq!(h.tokens(val(2)), slashed_tokens());
    assert_eq!(h.counter(val(2)), PenaltyCounter::default());
}

#[test]
fn test_validator_unknown_to_staking_is_discarded() {
    let h = harness();
    h.service.increment_miss(&val(99)).unwrap();

    let outcome = h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    assert_eq!(outcome.skip_reason(&val(99)), Some(SkipReason::NotFound));
    assert_eq!(h.counter(val(99)), PenaltyCounter::default());
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_replicas_emit_identical_event_logs() {
    let run = || {
        let h = harness();
        for id in [7u8, 3, 5] {
            h.keeper.insert(ValidatorView::bonded(val(id), 12_345));
        }
        h.service.set_vote_penalty_counter(&val(7), 0, 10, 0).unwrap();
        h.service.set_vote_penalty_counter(&val(3), 1, 9, 0).unwrap();
        h.service.set_vote_penalty_counter(&val(5), 9, 1, 0).unwrap();
        h.service.set_vote_penalty_counter(&val(2), 0, 0, 10).unwrap();
        h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();
        (h.service.take_events(), h.keeper.operations())
    };

    let (events_a, ops_a) = run();
    let (events_b, ops_b) = run();

    assert_eq!(events_a, events_b);
    assert_eq!(ops_a, ops_b);

    let penalized: Vec<ValidatorAddress> = events_a
        .iter()
        .filter_map(|e| match e {
            OracleEvent::ValidatorPenalized(p) => Some(p.address),
            _ => None,
        })
        .collect();
    assert_eq!(penalized, vec![val(2), val(3), val(7)]);

    // floor(12345 * 0.95) = floor(11727.75)
    assert!(ops_a.contains(&KeeperOperation::ReduceStake {
        address: val(3),
        fraction: "0.05".parse::<Dec>().unwrap(),
        tokens_before: 12_345,
        tokens_after: 11_727,
    }));
}

#[test]
fn test_event_json_shape() {
    let h = harness();
    h.service.set_vote_penalty_counter(&val(1), 0, 10, 0).unwrap();
    h.service.slash_and_reset_counters(WINDOW_HEIGHT).unwrap();

    let events = h.service.take_events();
    let json = serde_json::to_string(&events).unwrap();

    assert!(json.contains("ValidatorPenalized"));
    assert!(json.contains("\"tokens_after\":950"));
    assert!(json.contains("\"slash_fraction\":\"0.050000000000000000\""));
}
