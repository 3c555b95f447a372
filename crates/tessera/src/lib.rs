//! # Tessera
//!
//! Globally adaptive numerical integration over intervals and boxes.
//!
//! Tessera estimates definite integrals of real- or vector-valued functions
//! by repeatedly subdividing the sub-domain with the largest local error
//! estimate until the global estimate meets an absolute or relative
//! tolerance.
//!
//! ## Features
//!
//! - **Quadrature**: Gauss-Kronrod G7K15 on intervals ([`IntervalIntegrator`])
//! - **Cubature**: Genz-Malik degree 7/5 on `N`-boxes ([`HypercubeIntegrator`])
//! - **Vector integrands**: `[f64; N]` codomains with per-component or
//!   norm-based convergence
//! - **Budgets**: capped variants report [`Status::MaxSubdivisions`] instead
//!   of looping forever
//! - **Checked entry points**: `try_integrate` validates its input and
//!   returns [`IntegrateError`] on failure
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut quad = IntervalIntegrator::<f64>::new();
//! let peak = |x: f64| (-0.5 * (x / 0.01).powi(2)).exp();
//! let domain = Interval::new(-1.0, 1.0);
//! let (result, status) = quad.integrate_capped(&peak, domain, 1e-13, 0.0, 1000);
//!
//! assert_eq!(status, Status::Converged);
//! assert!((result.value - 0.01 * (2.0 * std::f64::consts::PI).sqrt()).abs() < 1e-13);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hypercube;
pub mod interval;
pub mod options;


pub use tessera_adaptive as adaptive;
pub use tessera_core as core;
pub use tessera_rules as rules;

pub use hypercube::HypercubeIntegrator;
pub use interval::IntervalIntegrator;
pub use options::{Integration, IntegrationOptions, DEFAULT_MAX_SUBDIVISIONS};
pub use tessera_adaptive::{Diagnostics, Status};
pub use tessera_core::{
    Hyperbox, IntegralResult, IntegrateError, IntegrateResult, Interval, L1Norm, L2Norm, MaxNorm,
    Normed,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::hypercube::HypercubeIntegrator;
    pub use crate::interval::IntervalIntegrator;
    pub use crate::options::{Integration, IntegrationOptions};
    pub use tessera_adaptive::{MultiIntegrator, Status};
    pub use tessera_core::{
        Hyperbox, Individual, IntegralResult, IntegrateError, Interval, L1Norm, L2Norm, MaxNorm,
        Normed,
    };
}
