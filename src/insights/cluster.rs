use linfa::DatasetBase;
use linfa::traits::{Fit, Predict};
use linfa_clustering::KMeans;
use ndarray::{Array2, Axis};
use rand_xoshiro::Xoshiro256Plus;
use rand_xoshiro::rand_core::SeedableRng;

use crate::types::EnrichedTrack;

/// Number of similarity clusters the tracks are partitioned into.
pub const CLUSTER_COUNT: usize = 3;

/// Fixed seed for centroid initialization, so repeated runs over the same
/// dataset assign identical labels.
pub const CLUSTER_SEED: u64 = 42;

/// Partitions tracks into [`CLUSTER_COUNT`] similarity clusters.
///
/// Uses k-means over exactly two features, duration and popularity, each
/// standardized to zero mean and unit variance so neither dominates the
/// distance. Returns one label in `0..CLUSTER_COUNT` per row, in row order.
///
/// # Errors
///
/// Fewer rows than clusters cannot be partitioned; this returns a
/// descriptive error instead of silently proceeding.
pub fn cluster_tracks(rows: &[EnrichedTrack]) -> Result<Vec<usize>, String> {
    if rows.len() < CLUSTER_COUNT {
        return Err(format!(
            "clustering requires at least {} tracks, got {}",
            CLUSTER_COUNT,
            rows.len()
        ));
    }

    let mut features = Array2::<f64>::zeros((rows.len(), 2));
    for (idx, row) in rows.iter().enumerate() {
        features[[idx, 0]] = row.duration_min;
        features[[idx, 1]] = row.popularity as f64;
    }
    standardize(&mut features);

    let dataset = DatasetBase::from(features);
    let rng = Xoshiro256Plus::seed_from_u64(CLUSTER_SEED);

    let model = KMeans::params_with_rng(CLUSTER_COUNT, rng)
        .max_n_iterations(300)
        .fit(&dataset)
        .map_err(|e| format!("k-means fit failed: {}", e))?;

    let assigned = model.predict(dataset);

    Ok(assigned.targets.to_vec())
}

/// Rescales every column to zero mean and unit variance (population
/// variance). A constant column keeps variance zero and is only centered.
fn standardize(features: &mut Array2<f64>) {
    for mut column in features.axis_iter_mut(Axis(1)) {
        let mean = column.mean().unwrap_or(0.0);
        let std = column.std(0.0);
        if std > 0.0 {
            column.mapv_inplace(|v| (v - mean) / std);
        } else {
            column.mapv_inplace(|v| v - mean);
        }
    }
}
