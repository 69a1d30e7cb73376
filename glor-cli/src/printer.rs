use colored::Colorize;
use glor_core::config::{GlobalConfig, OrgConfig};
use glor_core::types::RepoName;

pub struct Printer {
    org_config: OrgConfig,
    global_config: GlobalConfig,
}

impl Printer {
    pub fn new(org_config: OrgConfig, global_config: GlobalConfig) -> Self {
        Self {
            org_config,
            global_config,
        }
    }

    pub fn print_org(&self, repos: &[RepoName]) {
        let org_format = format!("[ Organization : {} ]", self.org_config.name).magenta();
        println!("{}", org_format);

        if let Some(license) = &self.org_config.license {
            let license_format = format!("[ License : {} ]", license).yellow();
            println!("{}", license_format);
        }

        for repo in repos {
            println!("{}", repo.to_string().green());
        }

        if self.global_config.verbose {
            println!();
            println!("{} repositories", repos.len());
        }
    }
}
