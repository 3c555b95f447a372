//! # tessera-rules
//!
//! Fixed-order embedded integration rules for the tessera adaptive engine.
//!
//! # Available Rules
//!
//! - [`GaussKronrod15`]: 7-point Gauss embedded in a 15-point Kronrod rule (1-D)
//! - [`GaussKronrod31`]: 15-point Gauss embedded in a 31-point Kronrod rule (1-D)
//! - [`GenzMalikD7`]: degree-7 Genz–Malik rule with an embedded degree-5 rule (N-D boxes)
//!
//! Every rule reports the higher-order estimate as the value and the
//! componentwise distance to the embedded lower-order estimate as the error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod gauss_kronrod;
pub mod genz_malik;

pub use gauss_kronrod::{
    integrate_gk15, integrate_gk31, GaussKronrod, GaussKronrod15, GaussKronrod31,
    GaussKronrodTable,
};
pub use genz_malik::GenzMalikD7;
