pub mod decay_info;
pub mod endorsement;
pub mod role_thresholds;
pub mod subject;
pub mod trust_level;

pub use decay_info::DecayInfo;
pub use endorsement::{Certified, Endorsement};
pub use role_thresholds::{RoleChange, RoleThresholds};
pub use subject::SubjectKey;
pub use trust_level::{TrustLevel, TrustRequirement};
