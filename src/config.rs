use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use crate::side::SideRules;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:35.0) Gecko/20100101 Firefox/35.0";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_MATCHES: usize = 50;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub user_agent: String,
    pub http_timeout_secs: u64,
    /// Largest match count the CLI accepts.
    pub max_matches: usize,
    pub side_rules: SideRules,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_matches: DEFAULT_MAX_MATCHES,
            side_rules: SideRules::default(),
            log_level: LevelFilter::WARN,
        }
    }
}

impl AppConfig {
    /// Reads `.env.local` and `.env` if present, then the `VLR_*` variables.
    pub fn load() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let rules = defaults.side_rules;

        let user_agent = lookup("VLR_USER_AGENT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.user_agent);

        Self {
            user_agent,
            http_timeout_secs: parsed(&lookup, "VLR_HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.http_timeout_secs)
                .max(1),
            max_matches: parsed(&lookup, "VLR_MAX_MATCHES").unwrap_or(defaults.max_matches),
            side_rules: SideRules {
                halftime_round: parsed(&lookup, "VLR_HALFTIME_ROUND")
                    .unwrap_or(rules.halftime_round)
                    .max(2),
                overtime_round: parsed(&lookup, "VLR_OVERTIME_ROUND")
                    .unwrap_or(rules.overtime_round)
                    .max(2),
                overtime_cycle: parsed(&lookup, "VLR_OVERTIME_CYCLE")
                    .unwrap_or(rules.overtime_cycle)
                    .max(2),
            },
            log_level: parsed(&lookup, "VLR_LOG").unwrap_or(defaults.log_level),
        }
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|raw| raw.trim().parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = config_from(&[]);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.http_timeout_secs, 10);
        assert_eq!(cfg.max_matches, 50);
        assert_eq!(cfg.side_rules, SideRules::default());
        assert_eq!(cfg.log_level, LevelFilter::WARN);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = config_from(&[
            ("VLR_MAX_MATCHES", "20"),
            ("VLR_HALFTIME_ROUND", "16"),
            ("VLR_OVERTIME_ROUND", " 31 "),
            ("VLR_LOG", "debug"),
            ("VLR_USER_AGENT", "test-agent"),
        ]);
        assert_eq!(cfg.max_matches, 20);
        assert_eq!(cfg.side_rules.halftime_round, 16);
        assert_eq!(cfg.side_rules.overtime_round, 31);
        assert_eq!(cfg.side_rules.overtime_cycle, 2);
        assert_eq!(cfg.log_level, LevelFilter::DEBUG);
        assert_eq!(cfg.user_agent, "test-agent");
    }

    #[test]
    fn garbage_values_fall_back() {
        let cfg = config_from(&[("VLR_HTTP_TIMEOUT_SECS", "soon"), ("VLR_USER_AGENT", "  ")]);
        assert_eq!(cfg.http_timeout_secs, 10);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    }
}
