pub mod pool_state;
pub mod reward_info;
pub mod claim_info;

pub use pool_state::*;
pub use reward_info::*;
pub use claim_info::*;
