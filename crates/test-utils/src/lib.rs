//! Fixtures shared by the bridge test suites.

mod arb;
mod committee;

pub use arb::ArbitraryGenerator;
pub use committee::TestCommittee;
