#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub output: String,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct OrgConfig {
    pub name: String,
    pub license: Option<String>,
}
