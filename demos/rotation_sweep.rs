// demos/rotation_sweep.rs

use fast_sine::trig::{FastSin, SinDegree};

fn main() {
    // Run with RUST_LOG=trace to see when an angle jump forces the evaluator
    // off its incremental path.
    env_logger::init();

    let steps = 100_000;
    let step_size = 0.0005; // radians per update

    let mut fast_sin_7 = FastSin::<f64>::new();
    let mut fast_sin_9 = FastSin::<f64>::with_degree(SinDegree::Nine);

    let mut max_err_7 = 0.0_f64;
    let mut max_err_9 = 0.0_f64;
    let mut rotation = 0.0;
    for _ in 0..steps {
        rotation += step_size;
        let truth = f64::sin(rotation);
        max_err_7 = max_err_7.max((fast_sin_7.sin(rotation) - truth).abs());
        max_err_9 = max_err_9.max((fast_sin_9.sin(rotation) - truth).abs());
    }

    println!("Incremental rotation sweep: {} updates of {} rad", steps, step_size);
    println!("Max |error| vs std sin, degree 7: {:e}", max_err_7);
    println!("Max |error| vs std sin, degree 9: {:e}", max_err_9);

    // A large jump between consecutive calls falls back to a full reduction
    // and keeps the same accuracy.
    let jumped = rotation + 40.0 * std::f64::consts::PI + 0.25;
    let truth = f64::sin(jumped);
    println!(
        "After a {:.1} rad jump, degree 7 error: {:e}",
        jumped - rotation,
        (fast_sin_7.sin(jumped) - truth).abs()
    );
}
