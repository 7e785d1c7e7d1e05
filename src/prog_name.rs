use std::fmt::Display;
use std::path::Path;

/// Display name for the running executable, derived once from the invocation path and passed
/// to whatever formats user-facing messages.
#[derive(Debug, Clone)]
pub(crate) struct ProgName(String);

const DEFAULT_NAME: &str = "portsum";

impl ProgName {
    pub(crate) fn from_argv0(argv0: Option<&str>) -> Self {
        let name = argv0
            .map(Path::new)
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_NAME);
        ProgName(name.to_owned())
    }
}

impl Display for ProgName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
