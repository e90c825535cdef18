//! `siteboot` — Configuration bootstrap for a self-hosted portfolio site.

use clap::Parser;

use siteboot::cli::args::Cli;
use siteboot::config::{Bootstrap, ConfigLoader, LoaderOptions};
use siteboot::error::{ConfigError, ExitCode};
use siteboot::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    let options = cli
        .config
        .map_or_else(LoaderOptions::default, LoaderOptions::new);
    let loader = ConfigLoader::new(options);

    match loader.load() {
        Ok(Bootstrap::Ready(config)) => {
            println!(
                "[!] Configuration OK: '{}' by {}",
                config.site_name, config.author_name
            );
        }
        Ok(Bootstrap::CreatedDefault { path }) => {
            println!(
                "[!] Config file not found. Created default: {}",
                path.display()
            );
            println!("[!] Please edit {} and restart.", path.display());
        }
        Ok(Bootstrap::Healed { path, added }) => {
            for key in &added {
                println!("[!] Key '{key}' was missing in config. Added default value.");
            }
            println!(
                "[!] Updated {} with missing keys. Please review and restart if needed.",
                path.display()
            );
        }
        Err(err) => {
            match &err {
                ConfigError::InsecureCredential { field, path } => {
                    eprintln!("\n[SECURITY ALERT] {err}");
                    eprintln!(
                        "Please change '{field}' in {} immediately.\n",
                        path.display()
                    );
                }
                _ => eprintln!("[ERROR] {err}"),
            }
            std::process::exit(err.exit_code());
        }
    }

    std::process::exit(ExitCode::SUCCESS);
}
