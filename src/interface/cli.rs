use crate::interface::config::GenerateConfig;
use clap::Parser;

/// Compile the Vue templates of the current directory into Go string constants.
///
/// Meant to be run by `go generate` through a `//go:generate vueg` directive,
/// which supplies the invoking file and package through `GOFILE` and
/// `GOPACKAGE`.
#[derive(Parser, Debug)]
#[command(name = "vueg", version, about)]
pub struct VuegCli {
    /// Go file that invoked the generator; its name is never overwritten
    #[arg(long = "gofile", env = "GOFILE")]
    pub go_file: Option<String>,

    /// Package the generated constants are declared in
    #[arg(long = "gopackage", env = "GOPACKAGE", default_value = "")]
    pub go_package: String,

    /// Verbose output
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug output
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub debug: bool,
}

impl From<&VuegCli> for GenerateConfig {
    fn from(cli: &VuegCli) -> Self {
        GenerateConfig {
            go_package: cli.go_package.clone(),
            go_file: cli.go_file.clone().filter(|f| !f.is_empty()),
            verbose: Some(cli.verbose),
            debug: Some(cli.debug),
            ..Default::default()
        }
    }
}
