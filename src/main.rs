use clap::Parser;
use heron_sqrt::cli::args::{CommandsEnum, HeronSqrtArgs};
use heron_sqrt::cli::demo::run_demo;
use heron_sqrt::cli::sweep::{run_sweep, SweepParams};

fn main() {
    let args: HeronSqrtArgs = HeronSqrtArgs::parse();

    let sweep_params = |path: &str| -> SweepParams {
        serde_json::from_str(&std::fs::read_to_string(path).expect("Unable to read param file"))
            .expect("Unable to parse param file")
    };

    let stdout = std::io::stdout();
    match &args.command {
        Some(CommandsEnum::Sweep(params)) => {
            run_sweep(&sweep_params(&params.params_path), &mut stdout.lock())
                .expect("Unable to write sweep output");
        }
        Some(CommandsEnum::Demo) | None => {
            run_demo(&mut stdout.lock()).expect("Unable to write demo output");
        }
    }
}
