use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct HeronSqrtArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Print the fixed demonstration vector (also the default with no
    /// subcommand at all).
    Demo,
    /// Evaluate the kernel over the inputs described by a JSON parameter file.
    Sweep(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,
}
