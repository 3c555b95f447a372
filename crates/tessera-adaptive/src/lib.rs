//! # tessera-adaptive
//!
//! The adaptive subdivision engine.
//!
//! A [`MultiIntegrator`] keeps a max-heap of [`Region`]s keyed by their local
//! error, repeatedly replaces the worst region by its evaluated children, and
//! stops when the running global estimate meets the tolerance or a
//! subdivision budget runs out.
//!
//! ## Regions
//!
//! - [`IntervalRegion`]: bisects an interval, for 1-D quadrature rules
//! - [`BoxRegion`]: splits a box into its `2^N` orthants, for cubature rules
//!
//! ## Example
//!
//! ```ignore
//! use tessera_adaptive::{IntervalRegion, MultiIntegrator};
//! use tessera_core::Interval;
//! use tessera_rules::GaussKronrod15;
//!
//! let mut integrator = MultiIntegrator::<IntervalRegion<GaussKronrod15>>::new();
//! let result = integrator.integrate(&|x: f64| x.sin(), &[Interval::new(0.0, 3.0)], 1e-12, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hyperbox;
pub mod integrator;
pub mod interval;
pub mod region;


pub use hyperbox::BoxRegion;
pub use integrator::{Diagnostics, MultiIntegrator, Status};
pub use interval::IntervalRegion;
pub use region::Region;
