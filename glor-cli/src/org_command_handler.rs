use clap::ArgMatches;
use glor_core::config::OrgConfig;

pub struct OrgCommandHandler {}

impl OrgCommandHandler {
    pub fn config(subcommand_match: &ArgMatches) -> OrgConfig {
        let name = subcommand_match
            .get_one::<String>("org_name")
            .unwrap()
            .to_owned();

        let license = subcommand_match.get_one::<String>("license").cloned();

        OrgConfig { name, license }
    }
}
