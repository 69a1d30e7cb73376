use clap::ArgMatches;
use glor_core::config::GlobalConfig;

pub struct GlobalOptionHandler();

impl GlobalOptionHandler {
    pub fn config(matches: &ArgMatches) -> GlobalConfig {
        let verbose = matches.get_flag("verbose");

        let output = matches
            .get_one::<String>("output")
            .unwrap_or(&"".to_string())
            .to_owned();

        GlobalConfig { output, verbose }
    }
}
