use heron_sqrt::cli::demo::run_demo;

/// Print the fixed demonstration vector, one result line per input.
/// ```sh
/// cargo run --example demo-fixed-vector
/// ```
pub fn main() {
    run_demo(&mut std::io::stdout()).expect("Unable to write demo output");
}
