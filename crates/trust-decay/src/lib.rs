//! # trust-decay
//!
//! Time decay of peer endorsements.
//! An endorsement keeps full weight for six calendar months after its last
//! certification, then loses weight linearly until it is worthless at twelve.
//! Effective trust is the sum of the remaining weights.

pub mod certification;
pub mod engine;
pub mod formula;
pub mod months;
pub mod policy;
pub mod score;
pub mod sweep;
pub mod warning;

pub use certification::{decaying_by_grantor, recertify, DecayingEndorsement};
pub use engine::{DecayEngine, EndorsementDecay};
pub use formula::{decay_factor, decay_factor_now, decay_info, decay_info_now};
pub use months::months_elapsed;
pub use policy::DecayPolicy;
pub use score::{effective_score, effective_score_now, trust_points};
pub use sweep::{DecaySweep, SweepInput, SweepReport};
