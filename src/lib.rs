//! # Linear regression by full-batch gradient descent
//!
//! `linreg-descent` provides a pure Rust implementation of ordinary least
//! squares linear regression, fitted by fixed-iteration, constant-rate,
//! full-batch gradient descent on the mean-squared-error cost.
//!
//! Unlike a closed-form solver, the optimizer records the cost and the
//! parameter vector after every iteration, so the whole convergence
//! trajectory is available to the caller for inspection or plotting.
//!
//! The crate also ships small helpers to assemble synthetic regression
//! datasets: a uniform feature-matrix generator with per-column bounds and
//! a target generator that adds Gaussian noise to a known linear model.
//!
//! ## Example
//!
//! ```
//! use linreg_descent::{GradientDescent, ParamGuard};
//! use ndarray::{array, Array1};
//!
//! # fn main() -> linreg_descent::Result<()> {
//! let x = array![[0.0], [1.0], [2.0], [3.0]];
//! let y = array![1.0, 3.0, 5.0, 7.0];
//!
//! let model = GradientDescent::params()
//!     .learning_rate(0.05)
//!     .n_iterations(5000)
//!     .check()?
//!     .fit(&x, &y, Array1::zeros(2))?;
//!
//! // y = 1 + 2x, the trained vector approaches [1, 2]
//! let trained = model.trained_params()?;
//! assert_eq!(trained.len(), 2);
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod error;
mod hyperparams;
mod hypothesis;
mod synthetic;

pub use algorithm::{
    gradient_step, GradientDescent, LogProgress, ProgressObserver, ProgressRecord,
};
pub use error::{LinRegError, Result};
pub use hyperparams::{GradientDescentParams, GradientDescentValidParams, ParamGuard};
pub use hypothesis::{CostFunction, LinearHypothesis, MseCost};
pub use synthetic::{create_feature_matrix, generate_targets};

use ndarray::NdFloat;
use num_traits::{FromPrimitive, NumCast, Signed};
use rand::distributions::uniform::SampleUniform;

/// Floating point numbers for which the crate is implemented
///
/// The bounds collect what ndarray and the random distributions require of
/// the element type; the trait is implemented for `f32` and `f64`.
pub trait Float:
    NdFloat + FromPrimitive + Signed + SampleUniform + Default + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}
