//! Reserving System - Loss-reserving engine for cumulative claims triangles
//!
//! This library provides:
//! - Average loss-development factors from ragged claims triangles
//! - Chain-ladder projection of losses to ultimate
//! - IBNR reserves and Bornhuetter-Ferguson blended estimates
//! - Chat-completion collaborator configuration for the hosting service

pub mod ai;
pub mod development;
pub mod error;
pub mod projection;
pub mod reserves;
pub mod triangle;

// Re-export commonly used types
pub use development::average_development_factors;
pub use error::{ErrorKind, ReservingError};
pub use projection::{project_ultimate, ultimate};
pub use reserves::{bornhuetter_ferguson, compute_ibnr, run_chain_ladder, BfEstimate, ChainLadderReport};
pub use triangle::Triangle;
