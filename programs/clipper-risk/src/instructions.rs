pub mod initialize_risk;
pub mod record_score;
pub mod register_creator;

pub use initialize_risk::*;
pub use record_score::*;
pub use register_creator::*;
