pub mod exporter;
pub mod global_option_handler;
pub mod org_command_handler;
pub mod printer;

use exporter::Exporter;
use global_option_handler::GlobalOptionHandler;
use org_command_handler::OrgCommandHandler;
use printer::Printer;

use glor_core::fetcher::HttpJsonFetcher;
use glor_core::org::OrgClient;

use clap::{crate_version, Arg, ArgAction, Command};
use colored::Colorize;
use indicatif::ProgressBar;
use log::error;
use reqwest::ClientBuilder;
use std::process::exit;
use std::time::Duration;

const APP_USER_AGENT: &str = concat!("glor/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() {
    env_logger::init();

    let matches = Command::new("glor")
        .version(crate_version!())
        .author("Shadawck <shadawck@protonmail.com>")
        .about("Osint tool - List public repositories of a github organization.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Add a summary line with the repository count.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Export the repository list as json to the given path.")
                .num_args(1),
        )
        .subcommand(
            Command::new("org")
                .about("List the public repositories of a github organisation.")
                .arg(
                    Arg::new("org_name")
                        .value_name("NAME")
                        .required(true)
                        .help("Github name of an organisation (e.g. apache)."),
                )
                .arg(
                    Arg::new("license")
                        .short('l')
                        .long("license")
                        .help("Only keep repositories under this license key (e.g. apache-2.0).")
                        .num_args(1),
                ),
        )
        .get_matches();

    // Github rejects requests without a user agent.
    let client = ClientBuilder::new()
        .user_agent(APP_USER_AGENT)
        .build()
        .unwrap();
    let global_config = GlobalOptionHandler::config(&matches);

    if let Some(("org", sub_match)) = matches.subcommand() {
        let org_config = OrgCommandHandler::config(sub_match);

        let fetcher = HttpJsonFetcher::new(client);
        let org_client = OrgClient::new(org_config.name.clone(), fetcher);

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Fetching repositories of {}", org_config.name));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let repos = org_client
            .public_repos(org_config.license.as_deref())
            .await;
        spinner.finish_and_clear();

        match repos {
            Ok(repos) => {
                let printer = Printer::new(org_config, global_config.clone());
                printer.print_org(&repos);

                let exporter = Exporter::new(global_config);
                exporter.export_org(&repos);
            }
            Err(e) => {
                error!("fetch failed: {}", e);
                eprintln!("{}", e.to_string().red());
                exit(1);
            }
        }
    }
}
