// src/trig/batch.rs

use num_traits::{AsPrimitive, Float};
use rayon::prelude::*;

use crate::trig::{FastSin, SinDegree};

/// Approximates the sine of every angle in `angles`, in order, through a
/// single evaluator. Ordered inputs (e.g. a rotation sweep) keep the
/// evaluator on its incremental path for the whole slice.
pub fn sin_batch<T>(angles: &[T], degree: SinDegree) -> Vec<T>
where
    T: Float + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    let mut fast_sin = FastSin::with_degree(degree);
    angles.iter().map(|&angle| fast_sin.sin(angle)).collect()
}

/// Parallel form of [`sin_batch`]: splits the slice into contiguous chunks
/// and gives each chunk its own evaluator, since a single instance must not
/// be shared across threads. Output order matches input order.
pub fn par_sin_batch<T>(angles: &[T], degree: SinDegree) -> Vec<T>
where
    T: Float + AsPrimitive<f64> + Send + Sync,
    f64: AsPrimitive<T>,
{
    let chunk_size = (angles.len() / rayon::current_num_threads()).max(1);
    angles
        .par_chunks(chunk_size)
        .flat_map_iter(|chunk| {
            let mut fast_sin = FastSin::with_degree(degree);
            chunk
                .iter()
                .map(|&angle| fast_sin.sin(angle))
                .collect::<Vec<_>>()
        })
        .collect()
}
