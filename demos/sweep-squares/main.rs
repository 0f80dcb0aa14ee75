use heron_sqrt::cli::sweep::{run_sweep, ExplicitSweepParams, SweepParams};
use heron_sqrt::core::newton::ConvergenceParams;

/// Sweep the kernel over the first few perfect squares.
/// ```sh
/// cargo run --example sweep-squares
/// ```
pub fn main() {
    let params = SweepParams::Explicit(ExplicitSweepParams {
        inputs: vec![1.0, 4.0, 9.0, 16.0, 25.0],
        convergence_params: ConvergenceParams::default(),
    });
    run_sweep(&params, &mut std::io::stdout()).expect("Unable to write sweep output");
}
