pub mod initialize;
pub mod deposit_reward;
pub mod withdraw_reward;
pub mod claim_reward;
pub mod get_claimed_amount;
pub mod set_tax_recipient;
pub mod set_pause;
pub mod set_allocation_root;

pub use initialize::*;
pub use deposit_reward::*;
pub use withdraw_reward::*;
pub use claim_reward::*;
pub use get_claimed_amount::*;
pub use set_tax_recipient::*;
pub use set_pause::*;
pub use set_allocation_root::*;
