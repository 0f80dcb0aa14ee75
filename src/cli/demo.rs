use std::io::{self, Write};

use crate::core::float_utils::is_nan;
use crate::core::newton::{sqrt_with_params, ConvergenceParams};
use crate::core::text_format::{format_g, format_g_full};

/// Input vector for the demonstration, in print order. Covers zero, an
/// irrational root, exact squares above and below one, both ends of the
/// magnitude range, and a negative input.
pub const DEMO_INPUTS: [f64; 7] = [0.0, 2.0, 9.0, 0.25, 1e-12, 1e12, -4.0];

/// Run the kernel over `DEMO_INPUTS` with the default parameters and write
/// one result line per input.
pub fn run_demo<W: Write>(writer: &mut W) -> io::Result<()> {
    let convergence_params = ConvergenceParams::default();
    for &magnitude in DEMO_INPUTS.iter() {
        let root = sqrt_with_params(magnitude, &convergence_params);
        write_result_line(writer, magnitude, root)?;
    }
    Ok(())
}

/// One line per input. NaN is detected with the self-inequality test, the
/// same library-free route the kernel itself uses; finite results carry the
/// self-check product r*r at full precision.
pub fn write_result_line<W: Write>(writer: &mut W, magnitude: f64, root: f64) -> io::Result<()> {
    if is_nan(root) {
        writeln!(writer, "a = {} -> sqrt(a) non reale (NaN)", format_g(magnitude))
    } else {
        let check = root * root;
        writeln!(
            writer,
            "a = {} -> sqrt(a) ~= {} (r*r={})",
            format_g(magnitude),
            format_g_full(root),
            format_g_full(check)
        )
    }
}
