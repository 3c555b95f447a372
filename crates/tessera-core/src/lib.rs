//! # tessera-core
//!
//! Shared vocabulary for the tessera adaptive integration engine.
//!
//! This crate provides:
//! - Result shapes an integrand may produce (`Codomain`): a single real or a
//!   fixed-length array of reals
//! - The value/error pair (`IntegralResult`) with its componentwise group structure
//! - Integration domains: `Interval` for quadrature, `Hyperbox` for cubature
//! - Convergence policies and norms for vector-valued results
//! - The `Rule` contract every fixed-order embedded rule implements
//!
//! ## Design Principles
//!
//! - **Static dispatch**: rules, policies and shapes are type parameters, never trait objects
//! - **Value semantics**: results and limits are `Copy` and carry no heap storage
//! - **No hidden validation**: limits and tolerances are taken as given; checked
//!   entry points live in the facade crate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codomain;
pub mod error;
pub mod limits;
pub mod norm;
pub mod result;
pub mod rule;

#[cfg(test)]
mod proptests;

pub use codomain::Codomain;
pub use error::{IntegrateError, IntegrateResult};
pub use limits::{Hyperbox, Interval};
pub use norm::{ConvergencePolicy, Individual, L1Norm, L2Norm, MaxNorm, Norm, Normed};
pub use result::IntegralResult;
pub use rule::Rule;
