use FasterDistributions::{
    builders::norm,
    distribution_trait::{ContinuousDistribution, Distribution},
    distributions::Normal::Normal,
    params::as_scalar,
};
use ndarray::{Array1, ArrayD};
use rand::{SeedableRng, rngs::StdRng};

fn print_paired_vectors(input: &[f64], output: &[f64]) {
    assert!(input.len() == output.len());

    for (i, (a, b)) in input.iter().zip(output.iter()).enumerate() {
        println!("{i}\t{:.3}: \t{:.5}", a, b);
    }
    println!();
}

fn main() {
    // RUST_LOG=debug shows what is being constructed
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("*****************************************************************\n\
    This script shows how to use the distribution interface. We will use the \
    normal distribution, but the interface is common to all distriutions. \
    We will start with a standard normal distribution (0 mean and 1 variance). \n");

    let std_normal: Normal = Normal::default();

    println!("Mean: {} \t (Correct one: {})", as_scalar(&std_normal.mean()).unwrap(), 0.0);
    println!("Variance: {} \t (Correct one: {})", as_scalar(&std_normal.var()).unwrap(), 1.0);
    println!("Median: {} \t (Correct one: {})", as_scalar(&std_normal.median().unwrap()).unwrap(), 0.0);

    let inputs: Array1<f64> = (0..=16).map(|x: i32| (x as f64) * 0.5 - 4.0).collect();

    let pdf_values: ArrayD<f64> = std_normal.pdf(inputs.view().into_dyn()).unwrap();
    let cdf_values: ArrayD<f64> = std_normal.cdf(inputs.view().into_dyn()).unwrap();

    println!("***********************************************************");
    println!("Pdf: ");
    print_paired_vectors(inputs.as_slice().unwrap(), pdf_values.as_slice().unwrap());

    println!("Cdf: ");
    print_paired_vectors(inputs.as_slice().unwrap(), cdf_values.as_slice().unwrap());

    let inputs: Array1<f64> = (1..=19).map(|x: i32| x as f64 * (1.0 / 20.0)).collect();
    let quantile_values: ArrayD<f64> = std_normal.ppf(inputs.view().into_dyn()).unwrap();

    println!("Quantiles: ");
    print_paired_vectors(inputs.as_slice().unwrap(), quantile_values.as_slice().unwrap());

    println!("***********************************************************");
    println!("Now with 3 normals at once (loc = [0, 1, 10], scale = [1, 2, 100]). \n");

    let normals: Normal = norm()
        .loc(vec![0.0, 1.0, 10.0])
        .scale(vec![1.0, 2.0, 100.0])
        .call()
        .unwrap();

    let (lower, upper): (ArrayD<f64>, ArrayD<f64>) = normals.interval(0.95).unwrap();
    println!("95% intervals: ");
    print_paired_vectors(lower.as_slice().unwrap(), upper.as_slice().unwrap());

    let mut rng: StdRng = StdRng::seed_from_u64(42);
    let samples: ArrayD<f64> = normals.sample_multiple(5, &mut rng).unwrap();
    println!("5 samples of each one: \n{:.3}", samples);

    println!("***********************************************************");
}
