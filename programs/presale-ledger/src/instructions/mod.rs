pub mod transfer_cpi;
pub mod initialize;
pub mod fund;
pub mod set_deadline;
pub mod register_buyer;
pub mod purchase;
pub mod claim;
pub mod sweep_unsold;

pub use initialize::*;
pub use fund::*;
pub use set_deadline::*;
pub use register_buyer::*;
pub use purchase::*;
pub use claim::*;
pub use sweep_unsold::*;
