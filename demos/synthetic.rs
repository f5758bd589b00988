use linreg_descent::{create_feature_matrix, generate_targets, GradientDescent, ParamGuard};
use ndarray::{array, Array1};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

// Fit a two-feature linear model on synthetic data.
// Run with `RUST_LOG=info` to see the verbose progress records.
fn main() -> linreg_descent::Result<()> {
    env_logger::init();

    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let theta_star = array![2.0, 3.0, -4.0];

    let x = create_feature_matrix(
        100,
        2,
        array![1.5, -0.5].view(),
        array![11.0, 5.0].view(),
        &mut rng,
    )?;
    let y = generate_targets(&x, theta_star.view(), 1.0, &mut rng)?;

    let model = GradientDescent::params()
        .learning_rate(0.001)
        .n_iterations(50_000)
        .verbose(true)
        .check()?
        .fit(&x, &y, Array1::zeros(3))?;

    println!("ground truth:       {}", theta_star);
    println!("trained parameters: {}", model.trained_params()?);
    println!("final cost:         {}", model.final_cost()?);

    Ok(())
}
