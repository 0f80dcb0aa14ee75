use std::io::{self, Write};

use iter_num_tools::log_space;
use serde::{Deserialize, Serialize};

use crate::cli::demo::write_result_line;
use crate::core::newton::{sqrt_with_params, ConvergenceParams};

#[derive(Serialize, Deserialize, Debug)]
pub enum SweepParams {
    Explicit(ExplicitSweepParams),
    LogRange(LogRangeSweepParams),
}

/// Evaluate the kernel on each listed input, in order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExplicitSweepParams {
    pub inputs: Vec<f64>,
    pub convergence_params: ConvergenceParams,
}

/// Evaluate the kernel on `count` log-spaced magnitudes from `begin` to
/// `end` inclusive. Both endpoints must be positive.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogRangeSweepParams {
    pub begin: f64,
    pub end: f64,
    pub count: usize,
    pub convergence_params: ConvergenceParams,
}

pub fn run_sweep<W: Write>(params: &SweepParams, writer: &mut W) -> io::Result<()> {
    match params {
        SweepParams::Explicit(inner_params) => {
            for &magnitude in inner_params.inputs.iter() {
                let root = sqrt_with_params(magnitude, &inner_params.convergence_params);
                write_result_line(writer, magnitude, root)?;
            }
        }
        SweepParams::LogRange(inner_params) => {
            for magnitude in log_space(inner_params.begin..=inner_params.end, inner_params.count) {
                let root = sqrt_with_params(magnitude, &inner_params.convergence_params);
                write_result_line(writer, magnitude, root)?;
            }
        }
    }
    Ok(())
}
