pub mod initialize_engine;
pub mod initialize_vault;
pub mod record_payout;
pub mod record_risk_metrics;
pub mod record_views;
pub mod reject_clip;
pub mod set_throttle;
pub mod settle_monthly_bonus;
pub mod submit_clip;
pub mod verify_clip;

pub use initialize_engine::*;
pub use initialize_vault::*;
pub use record_payout::*;
pub use record_risk_metrics::*;
pub use record_views::*;
pub use reject_clip::*;
pub use set_throttle::*;
pub use settle_monthly_bonus::*;
pub use submit_clip::*;
pub use verify_clip::*;
