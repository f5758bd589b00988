use crate::error::{LinRegError, Result};
use crate::Float;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A set of hyperparameters whose values have not been checked for
/// validity. A reference to the checked hyperparameters can only be
/// obtained after checking has completed.
///
/// The validation done in `check_ref()` and `check()` is identical.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: std::error::Error;

    /// Checks the hyperparameters and returns a reference to the checked
    /// hyperparameters if successful
    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error>;

    /// Checks the hyperparameters and returns the checked hyperparameters
    /// if successful
    fn check(self) -> std::result::Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// A verified hyperparameter set ready for running the gradient descent
///
/// See [`GradientDescentParams`](crate::GradientDescentParams) for more
/// information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentValidParams<F: Float> {
    pub(crate) learning_rate: F,
    pub(crate) n_iterations: usize,
    pub(crate) verbose: bool,
}

impl<F: Float> GradientDescentValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Hyperparameters of the gradient descent optimizer
///
/// The optimizer runs for a fixed number of iterations with a constant
/// learning rate; there is no early-stopping criterion. Use
/// [`check`](ParamGuard::check) to validate the configuration before
/// fitting.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentParams<F: Float>(pub(crate) GradientDescentValidParams<F>);

impl<F: Float> Default for GradientDescentParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> GradientDescentParams<F> {
    /// Create new hyperparameters with default values
    pub fn new() -> Self {
        Self(GradientDescentValidParams {
            learning_rate: F::cast(0.01),
            n_iterations: 1000,
            verbose: false,
        })
    }

    /// Set the learning rate, the factor scaling the negative gradient in
    /// every update.
    ///
    /// Defaults to `0.01` if not set
    ///
    /// The learning rate must be positive and finite
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the number of parameter updates to perform.
    ///
    /// Defaults to `1000` if not set
    ///
    /// Zero iterations is valid and yields empty histories
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.0.n_iterations = n_iterations;
        self
    }

    /// Emit progress records to the observer roughly ten times over the
    /// course of the run.
    ///
    /// Defaults to `false` if not set
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for GradientDescentParams<F> {
    type Checked = GradientDescentValidParams<F>;
    type Error = LinRegError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.learning_rate.is_finite() || self.0.learning_rate <= F::zero() {
            Err(LinRegError::InvalidParams(format!(
                "learning rate must be positive and finite, but is {}",
                self.0.learning_rate
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        let params = GradientDescentParams::<f64>::new().check().unwrap();
        assert_eq!(params.learning_rate(), 0.01);
        assert_eq!(params.n_iterations(), 1000);
        assert!(!params.verbose());
    }

    #[test]
    fn builder_overrides_defaults() {
        let params = GradientDescentParams::new()
            .learning_rate(0.5)
            .n_iterations(10)
            .verbose(true)
            .check()
            .unwrap();
        assert_eq!(params.learning_rate(), 0.5);
        assert_eq!(params.n_iterations(), 10);
        assert!(params.verbose());
    }

    #[test]
    fn zero_learning_rate_is_rejected() {
        let result = GradientDescentParams::new().learning_rate(0.0).check();
        assert!(matches!(result, Err(LinRegError::InvalidParams(_))));
    }

    #[test]
    fn negative_learning_rate_is_rejected() {
        let result = GradientDescentParams::new().learning_rate(-0.1).check();
        assert!(matches!(result, Err(LinRegError::InvalidParams(_))));
    }

    #[test]
    fn non_finite_learning_rate_is_rejected() {
        let result = GradientDescentParams::new().learning_rate(f64::NAN).check();
        assert!(matches!(result, Err(LinRegError::InvalidParams(_))));

        let result = GradientDescentParams::new()
            .learning_rate(f64::INFINITY)
            .check();
        assert!(matches!(result, Err(LinRegError::InvalidParams(_))));
    }

    #[test]
    fn zero_iterations_are_valid() {
        let params = GradientDescentParams::<f64>::new().n_iterations(0).check();
        assert!(params.is_ok());
    }
}
