//! Host-supplied constants the payment/offer/AMM engines read on every
//! transaction (§5.3): the reserve schedule, the base fee, and the active
//! amendment set. This is the smallest unit of "configuration" the engine
//! is not allowed to hardcode.

use super::amendments::AmendmentSet;

/// Bundles the per-ledger constants the apply logic needs but must not
/// invent itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum XRP reserve (in drops) an account must keep, independent of
    /// owned objects.
    pub reserve_base: i64,
    /// Additional reserve (in drops) charged per owned ledger object.
    pub reserve_increment: i64,
    /// Base transaction fee, in drops, before any load/fee-escalation
    /// multiplier the host may apply (fee escalation is out of scope, §1).
    pub base_fee: i64,
    pub amendments: AmendmentSet,
}

impl EngineConfig {
    pub fn new(reserve_base: i64, reserve_increment: i64, base_fee: i64, amendments: AmendmentSet) -> Self {
        Self {
            reserve_base,
            reserve_increment,
            base_fee,
            amendments,
        }
    }

    /// The reserve an account must hold given it owns `owner_count` objects.
    pub fn reserve_for(&self, owner_count: u32) -> i64 {
        self.reserve_base + self.reserve_increment * owner_count as i64
    }
}

impl Default for EngineConfig {
    /// Mainnet-shaped defaults: 10 XRP base reserve, 2 XRP per owned object,
    /// 10-drop base fee. A host targeting a different network overrides this.
    fn default() -> Self {
        Self {
            reserve_base: 10_000_000,
            reserve_increment: 2_000_000,
            base_fee: 10,
            amendments: AmendmentSet::all(),
        }
    }
}
