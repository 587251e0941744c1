use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraceConfig {
    /// Per-step timeout while walking the delegation chain, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Root server addresses; empty means the built-in IANA table
    #[serde(default)]
    pub root_hints: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            root_hints: Vec::new(),
        }
    }
}
