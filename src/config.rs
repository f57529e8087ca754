/// Where the activities API lives and how long status messages stay up.
///
/// Built once in `main` and passed to the root component as props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub message_ttl_ms: u32,
}

pub const DEFAULT_MESSAGE_TTL_MS: u32 = 5_000;

impl AppConfig {
    /// Reads `ACTIVITIES_API_BASE` at build time; empty means same origin.
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("ACTIVITIES_API_BASE").unwrap_or_default())
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            api_base: base.trim().trim_end_matches('/').to_string(),
            message_ttl_ms: DEFAULT_MESSAGE_TTL_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_same_origin_with_five_second_messages() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base, "");
        assert_eq!(cfg.message_ttl_ms, 5_000);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = AppConfig::with_base(" https://school.example.edu/api// ");
        assert_eq!(cfg.api_base, "https://school.example.edu/api");
    }
}
