use colored::Colorize;
use glor_core::config::GlobalConfig;
use glor_core::types::RepoName;
use std::{fs, path::PathBuf, str::FromStr};

pub struct Exporter {
    global_config: GlobalConfig,
}

impl Exporter {
    pub fn new(global_config: GlobalConfig) -> Self {
        Self { global_config }
    }

    pub fn export_org(self, data: &[RepoName]) {
        let output = self.global_config.output;

        if !output.is_empty() {
            let mut path = PathBuf::from_str(&output).unwrap();

            if path.is_dir() {
                path.push("org.json");
            }

            let json_value = serde_json::to_string_pretty(data).unwrap();
            fs::write(path.as_path(), json_value).unwrap();

            println!("File -> {}", path.to_str().unwrap().yellow());
        }
    }
}
