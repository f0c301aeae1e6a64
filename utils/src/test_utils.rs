#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::{Ledger, LedgerInfo};
use soroban_sdk::Env;

const TEST_MAX_ENTRY_TTL: u32 = 6_312_000;

pub fn jump(e: &Env, time: u64) {
    e.ledger().set(LedgerInfo {
        timestamp: e.ledger().timestamp().saturating_add(time),
        protocol_version: e.ledger().protocol_version(),
        sequence_number: e.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 999999,
        min_persistent_entry_ttl: 999999,
        max_entry_ttl: TEST_MAX_ENTRY_TTL,
    });
}
