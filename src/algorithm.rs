use crate::error::{LinRegError, Result};
use crate::hyperparams::{GradientDescentParams, GradientDescentValidParams, ParamGuard};
use crate::hypothesis::{affine_predict, CostFunction, LinearHypothesis, MseCost};
use crate::Float;
use ndarray::{s, Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A structured snapshot of the optimization state, emitted under verbose
/// mode roughly ten times over the course of a run.
pub struct ProgressRecord<'a, F: Float> {
    pub iteration: usize,
    pub cost: F,
    pub params: ArrayView1<'a, F>,
}

/// Receives progress records during a verbose fit
///
/// The optimizer core performs no I/O itself; all reporting goes through
/// this seam.
pub trait ProgressObserver<F: Float> {
    fn observe(&mut self, record: ProgressRecord<'_, F>);
}

/// Default progress sink, one log line per record
pub struct LogProgress;

impl<F: Float> ProgressObserver<F> for LogProgress {
    fn observe(&mut self, record: ProgressRecord<'_, F>) {
        log::info!(
            "iteration {}: cost = {}, theta = {}",
            record.iteration,
            record.cost,
            record.params
        );
    }
}

/// Perform a single descent step `θ' = θ − α · ∇J(θ)`
///
/// The gradient is the exact closed form of the mean-squared-error cost,
/// `∇J(θ) = 1/n · [1|X]ᵀ (ŷ(θ) − y)`: its bias component is the mean
/// residual, its weight components are `Xᵀ r / n`. The input `theta` is
/// left untouched and a fresh vector is returned.
pub fn gradient_step<F, D, T>(
    x: &ArrayBase<D, Ix2>,
    y: &ArrayBase<T, Ix1>,
    theta: ArrayView1<F>,
    learning_rate: F,
) -> Result<Array1<F>>
where
    F: Float,
    D: Data<Elem = F>,
    T: Data<Elem = F>,
{
    if x.nrows() == 0 {
        return Err(LinRegError::NotEnoughSamples);
    }
    if y.len() != x.nrows() {
        return Err(LinRegError::ShapeMismatch(format!(
            "feature matrix has {} rows but the target vector has {} entries",
            x.nrows(),
            y.len()
        )));
    }
    let residual = affine_predict(theta, x)? - y;
    let n = F::cast(x.nrows());

    let mut next = theta.to_owned();
    next[0] = next[0] - learning_rate * residual.sum() / n;
    next.slice_mut(s![1..])
        .scaled_add(-learning_rate / n, &x.t().dot(&residual));
    Ok(next)
}

/// A gradient descent run over a linear regression problem
///
/// Holds the cost and parameter histories recorded during the fit, one
/// entry per completed iteration and index-aligned with each other. The
/// last parameter snapshot is the trained model.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescent<F> {
    cost_history: Vec<F>,
    param_history: Vec<Array1<F>>,
}

impl<F: Float> GradientDescent<F> {
    /// Create default hyperparameters
    pub fn params() -> GradientDescentParams<F> {
        GradientDescentParams::new()
    }

    /// Cost after each iteration, index = iteration number
    pub fn cost_history(&self) -> &[F] {
        &self.cost_history
    }

    /// Parameter vector after each iteration, index-aligned with the cost
    /// history; every entry is an independent snapshot
    pub fn param_history(&self) -> &[Array1<F>] {
        &self.param_history
    }

    /// Number of completed iterations
    pub fn n_iterations(&self) -> usize {
        self.cost_history.len()
    }

    /// The final parameter vector
    ///
    /// Returns `EmptyHistory` if the optimizer ran for zero iterations.
    pub fn trained_params(&self) -> Result<ArrayView1<F>> {
        self.param_history
            .last()
            .map(|theta| theta.view())
            .ok_or(LinRegError::EmptyHistory)
    }

    /// The cost of the final parameter vector
    pub fn final_cost(&self) -> Result<F> {
        self.cost_history
            .last()
            .copied()
            .ok_or(LinRegError::EmptyHistory)
    }

    /// The trained model as an evaluable hypothesis
    pub fn hypothesis(&self) -> Result<LinearHypothesis<F>> {
        LinearHypothesis::new(self.trained_params()?.to_owned())
    }

    /// Predict one target value per row of `x` with the trained parameters
    pub fn predict<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<F>> {
        affine_predict(self.trained_params()?, x)
    }

    /// Hand both histories to the caller
    pub fn into_histories(self) -> (Vec<F>, Vec<Array1<F>>) {
        (self.cost_history, self.param_history)
    }
}

impl<F: Float> GradientDescentValidParams<F> {
    /// Run gradient descent on `(x, y)` starting from `theta0`, with the
    /// mean-squared-error cost and the default log-based progress sink.
    ///
    /// The feature matrix `x` must have shape `(n_samples, n_features)`,
    /// the target `y` shape `(n_samples)` and `theta0` length
    /// `n_features + 1` with the bias at index 0.
    pub fn fit<D, T>(
        &self,
        x: &ArrayBase<D, Ix2>,
        y: &ArrayBase<T, Ix1>,
        theta0: Array1<F>,
    ) -> Result<GradientDescent<F>>
    where
        D: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        let cost_function = MseCost::new(x.view(), y.view())?;
        self.fit_with(x, y, theta0, &cost_function, &mut LogProgress)
    }

    /// Run gradient descent with a caller-supplied cost function and
    /// progress observer.
    ///
    /// The descent direction is always the closed-form MSE gradient; the
    /// cost function only determines what is recorded in the cost history
    /// and reported to the observer.
    pub fn fit_with<D, T, C, O>(
        &self,
        x: &ArrayBase<D, Ix2>,
        y: &ArrayBase<T, Ix1>,
        theta0: Array1<F>,
        cost_function: &C,
        observer: &mut O,
    ) -> Result<GradientDescent<F>>
    where
        D: Data<Elem = F>,
        T: Data<Elem = F>,
        C: CostFunction<F>,
        O: ProgressObserver<F>,
    {
        if x.nrows() == 0 {
            return Err(LinRegError::NotEnoughSamples);
        }
        if y.len() != x.nrows() {
            return Err(LinRegError::ShapeMismatch(format!(
                "feature matrix has {} rows but the target vector has {} entries",
                x.nrows(),
                y.len()
            )));
        }
        if theta0.len() != x.ncols() + 1 {
            return Err(LinRegError::ShapeMismatch(format!(
                "initial parameter vector has length {} but {} features require length {}",
                theta0.len(),
                x.ncols(),
                x.ncols() + 1
            )));
        }

        let mut theta = theta0;
        let mut cost_history = Vec::with_capacity(self.n_iterations);
        let mut param_history = Vec::with_capacity(self.n_iterations);
        // clamped so runs shorter than ten iterations report every step
        let stride = (self.n_iterations / 10).max(1);

        for iteration in 0..self.n_iterations {
            theta = gradient_step(x, y, theta.view(), self.learning_rate)?;
            let cost = cost_function.cost(theta.view())?;
            cost_history.push(cost);
            param_history.push(theta.clone());

            if self.verbose && iteration % stride == 0 {
                observer.observe(ProgressRecord {
                    iteration,
                    cost,
                    params: theta.view(),
                });
            }
        }

        Ok(GradientDescent {
            cost_history,
            param_history,
        })
    }
}

impl<F: Float> GradientDescentParams<F> {
    /// Validate the hyperparameters, then fit
    pub fn fit<D, T>(
        &self,
        x: &ArrayBase<D, Ix2>,
        y: &ArrayBase<T, Ix1>,
        theta0: Array1<F>,
    ) -> Result<GradientDescent<F>>
    where
        D: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        self.check_ref()?.fit(x, y, theta0)
    }
}
