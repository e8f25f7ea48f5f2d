//! Reserve estimation: IBNR, Bornhuetter-Ferguson, and full chain-ladder runs

mod bf;
mod chain_ladder;
mod ibnr;

pub use bf::{bornhuetter_ferguson, BfEstimate};
pub use chain_ladder::{run_chain_ladder, ChainLadderReport, OriginResult};
pub use ibnr::compute_ibnr;
