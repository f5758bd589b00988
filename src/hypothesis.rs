use crate::error::{LinRegError, Result};
use crate::Float;
use ndarray::{s, Array1, ArrayBase, ArrayView1, ArrayView2, Data, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Evaluate the affine model `theta[0] + x · theta[1..]` for every row of `x`.
///
/// The bias column of ones is implicit and never materialized.
pub(crate) fn affine_predict<F: Float, D: Data<Elem = F>>(
    theta: ArrayView1<F>,
    x: &ArrayBase<D, Ix2>,
) -> Result<Array1<F>> {
    if theta.len() != x.ncols() + 1 {
        return Err(LinRegError::ShapeMismatch(format!(
            "parameter vector of length {} expects {} feature columns, but the matrix has {}",
            theta.len(),
            theta.len().saturating_sub(1),
            x.ncols()
        )));
    }
    let bias = theta[0];
    let weights = theta.slice(s![1..]);
    Ok(x.dot(&weights) + bias)
}

/// An affine function of a feature matrix, `ŷ = theta[0] + X · theta[1..]`
///
/// The parameter vector is bound at construction time; evaluation is
/// deterministic and free of side effects. Index 0 of the parameter vector
/// is the bias, the remaining entries are one weight per feature column.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearHypothesis<F> {
    theta: Array1<F>,
}

impl<F: Float> LinearHypothesis<F> {
    /// Bind a parameter vector; it must at least contain the bias term.
    pub fn new(theta: Array1<F>) -> Result<Self> {
        if theta.is_empty() {
            return Err(LinRegError::InvalidParams(
                "parameter vector must at least contain the bias term".to_string(),
            ));
        }
        Ok(LinearHypothesis { theta })
    }

    /// Predict one target value per row of `x`
    ///
    /// `x` must have `params().len() - 1` columns, otherwise a
    /// `ShapeMismatch` error is returned.
    pub fn eval<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        affine_predict(self.theta.view(), x)
    }

    /// Get the bias term
    pub fn bias(&self) -> F {
        self.theta[0]
    }

    /// Get the per-feature weights
    pub fn weights(&self) -> ArrayView1<F> {
        self.theta.slice(s![1..])
    }

    /// Get the full parameter vector, bias first
    pub fn params(&self) -> ArrayView1<F> {
        self.theta.view()
    }
}

/// A scalar cost evaluated as a function of the parameter vector
///
/// Implementors bind the training data in their constructor and expose a
/// single evaluation operation, preserving the "bind data, evaluate later"
/// contract without relying on closures.
pub trait CostFunction<F: Float> {
    fn cost(&self, theta: ArrayView1<F>) -> Result<F>;
}

/// Mean-squared-error cost bound to a fixed dataset
///
/// `cost(θ) = 1/(2n) Σ (ŷ(θ) − y)²` with the conventional 1/2 factor that
/// cancels in the gradient. The cost is non-negative and zero exactly when
/// the predictions match the targets elementwise.
pub struct MseCost<'a, F> {
    x: ArrayView2<'a, F>,
    y: ArrayView1<'a, F>,
}

impl<'a, F: Float> MseCost<'a, F> {
    /// Bind the training data
    ///
    /// `x` and `y` must agree in their number of rows and must not be empty.
    pub fn new(x: ArrayView2<'a, F>, y: ArrayView1<'a, F>) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(LinRegError::NotEnoughSamples);
        }
        if x.nrows() != y.len() {
            return Err(LinRegError::ShapeMismatch(format!(
                "feature matrix has {} rows but the target vector has {} entries",
                x.nrows(),
                y.len()
            )));
        }
        Ok(MseCost { x, y })
    }
}

impl<'a, F: Float> CostFunction<F> for MseCost<'a, F> {
    fn cost(&self, theta: ArrayView1<F>) -> Result<F> {
        let residual = affine_predict(theta, &self.x)? - &self.y;
        let n = F::cast(self.x.nrows());
        Ok(residual.mapv(|r| r * r).sum() / (F::cast(2.0) * n))
    }
}
