//! Synthetic regression datasets
//!
//! `create_feature_matrix` and `generate_targets` can be used to quickly
//! assemble a synthetic dataset with a known ground-truth parameter vector,
//! to test or benchmark the optimizer on a best-case scenario input.

use crate::error::{LinRegError, Result};
use crate::hypothesis::affine_predict;
use crate::Float;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Ix2};
use ndarray_rand::rand_distr::{Distribution, Normal, StandardNormal};
use ndarray_rand::RandomExt;
use rand::distributions::Uniform;
use rand::Rng;

/// Generate a `(sample_size, n_features)` matrix where column `j` is drawn
/// i.i.d. uniformly from the closed interval `[x_min[j], x_max[j]]`.
///
/// Both bound vectors must have length `n_features` and every lower bound
/// must not exceed its upper bound, otherwise an `InvalidBounds` error is
/// returned.
pub fn create_feature_matrix<F: Float, R: Rng + ?Sized>(
    sample_size: usize,
    n_features: usize,
    x_min: ArrayView1<F>,
    x_max: ArrayView1<F>,
    rng: &mut R,
) -> Result<Array2<F>> {
    if x_min.len() != n_features || x_max.len() != n_features {
        return Err(LinRegError::InvalidBounds(format!(
            "expected {} lower and upper bounds, got {} and {}",
            n_features,
            x_min.len(),
            x_max.len()
        )));
    }
    for (feature, (low, high)) in x_min.iter().zip(x_max.iter()).enumerate() {
        if low > high {
            return Err(LinRegError::InvalidBounds(format!(
                "lower bound {} exceeds upper bound {} for feature {}",
                low, high, feature
            )));
        }
    }

    let mut features = Array2::zeros((sample_size, n_features));
    for (feature, (low, high)) in x_min.iter().zip(x_max.iter()).enumerate() {
        let column = Array1::random_using(sample_size, Uniform::new_inclusive(*low, *high), rng);
        features.column_mut(feature).assign(&column);
    }
    Ok(features)
}

/// Generate training targets `y = θ[0] + X · θ[1..] + ε` with Gaussian
/// noise `ε ~ N(0, sigma)`, one sample per row of `x`.
///
/// `sigma` must be finite and non-negative; `sigma = 0` yields exact linear
/// targets.
pub fn generate_targets<F, D, R>(
    x: &ArrayBase<D, Ix2>,
    theta: ArrayView1<F>,
    sigma: F,
    rng: &mut R,
) -> Result<Array1<F>>
where
    F: Float,
    D: Data<Elem = F>,
    R: Rng + ?Sized,
    StandardNormal: Distribution<F>,
{
    if sigma < F::zero() || !sigma.is_finite() {
        return Err(LinRegError::InvalidParams(format!(
            "noise standard deviation must be finite and non-negative, but is {}",
            sigma
        )));
    }
    let targets = affine_predict(theta, x)?;
    if sigma == F::zero() {
        return Ok(targets);
    }
    let noise_distribution = Normal::new(F::zero(), sigma)
        .map_err(|err| LinRegError::InvalidParams(err.to_string()))?;
    let noise = Array1::random_using(targets.len(), noise_distribution, rng);
    Ok(targets + noise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn feature_matrix_has_requested_shape() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let features = create_feature_matrix(
            100,
            2,
            array![1.5, -0.5].view(),
            array![11.0, 5.0].view(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(features.dim(), (100, 2));
    }

    #[test]
    fn feature_columns_respect_their_bounds() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let x_min = array![1.5, -0.5, -100.0];
        let x_max = array![11.0, 5.0, 100.0];
        let features =
            create_feature_matrix(1000, 3, x_min.view(), x_max.view(), &mut rng).unwrap();

        for (feature, column) in features.columns().into_iter().enumerate() {
            assert!(column
                .iter()
                .all(|&value| value >= x_min[feature] && value <= x_max[feature]));
        }
    }

    #[test]
    fn degenerate_interval_yields_constant_column() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let features =
            create_feature_matrix(10, 1, array![3.0].view(), array![3.0].view(), &mut rng).unwrap();
        assert!(features.iter().all(|&value| value == 3.0));
    }

    #[test]
    fn crossed_bounds_are_rejected() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let result =
            create_feature_matrix(10, 1, array![2.0].view(), array![1.0].view(), &mut rng);
        assert!(matches!(result, Err(LinRegError::InvalidBounds(_))));
    }

    #[test]
    fn mismatched_bound_lengths_are_rejected() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let result = create_feature_matrix(
            10,
            2,
            array![0.0].view(),
            array![1.0, 2.0].view(),
            &mut rng,
        );
        assert!(matches!(result, Err(LinRegError::InvalidBounds(_))));
    }

    #[test]
    fn zero_sigma_yields_exact_linear_targets() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let x = array![[0.0], [1.0], [2.0]];
        let theta = array![1.0, 2.0];
        let targets = generate_targets(&x, theta.view(), 0.0, &mut rng).unwrap();
        assert_abs_diff_eq!(targets, array![1.0, 3.0, 5.0]);
    }

    #[test]
    fn noisy_targets_scatter_around_the_line() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let x: Array2<f64> = Array2::from_elem((500, 1), 1.0);
        let theta = array![0.0, 1.0];
        let targets = generate_targets(&x, theta.view(), 0.5, &mut rng).unwrap();

        assert_eq!(targets.len(), 500);
        assert!(targets.iter().all(|value| value.is_finite()));
        // noise has zero mean, the sample mean stays close to the line
        let mean = targets.sum() / 500.0;
        assert_abs_diff_eq!(mean, 1.0, epsilon = 0.1);
        // and it actually perturbs the exact targets
        assert!(targets.iter().any(|&value| (value - 1.0).abs() > 1e-3));
    }

    #[test]
    fn negative_sigma_is_rejected() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let x = array![[0.0], [1.0]];
        let result = generate_targets(&x, array![0.0, 1.0].view(), -1.0, &mut rng);
        assert!(matches!(result, Err(LinRegError::InvalidParams(_))));
    }

    #[test]
    fn target_generation_checks_shapes() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let x = array![[0.0, 1.0], [1.0, 2.0]];
        let result = generate_targets(&x, array![0.0, 1.0].view(), 0.0, &mut rng);
        assert!(matches!(result, Err(LinRegError::ShapeMismatch(_))));
    }
}
