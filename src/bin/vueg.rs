use clap::Parser;
use vueg::interface::cli::VuegCli;
use vueg::interface::output::print_generated_files;
use vueg::{generate_from_config, GenerateConfig, Logger};

fn main() {
    let cli = VuegCli::parse();
    let config = GenerateConfig::from(&cli);
    let logger = Logger::new(config.is_verbose(), config.is_debug());

    match generate_from_config(&config) {
        Ok(generated) => print_generated_files(&logger, &generated),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
