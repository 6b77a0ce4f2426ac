//! Competition configuration with TOML file support.

use compete_types::{Address, Timestamp};
use compete_utils::{LogFormat, TryInitError};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::CompetitionError;

/// Construction-time parameters of a competition. Immutable once an engine
/// has been built from it.
///
/// Can be loaded from a TOML file via [`CompetitionConfig::from_toml_file`]
/// or built programmatically with [`CompetitionConfig::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionConfig {
    /// Identity of the asset ledger payouts are made on.
    pub asset_ledger: Address,

    /// The only identity allowed to disqualify and finalize.
    pub oracle: Address,

    /// Identity of the certification registry.
    pub certifier: Address,

    /// The engine's own account on the asset ledger; payouts are debited here.
    pub custody_address: Address,

    /// Competition start (Unix seconds).
    pub start_time: Timestamp,

    /// Competition length in seconds; the competition ends at
    /// `start_time + competition_duration_secs`.
    pub competition_duration_secs: u64,

    /// Payout threshold. Stored and exposed; not enforced by the engine.
    pub payout_threshold: u64,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CompetitionConfig {
    pub fn new(
        asset_ledger: Address,
        oracle: Address,
        certifier: Address,
        custody_address: Address,
        start_time: Timestamp,
        competition_duration_secs: u64,
        payout_threshold: u64,
    ) -> Self {
        Self {
            asset_ledger,
            oracle,
            certifier,
            custody_address,
            start_time,
            competition_duration_secs,
            payout_threshold,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CompetitionError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CompetitionError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CompetitionError> {
        toml::from_str(s).map_err(|e| CompetitionError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CompetitionError> {
        toml::to_string_pretty(self).map_err(|e| CompetitionError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber using `log_format` and
    /// `log_level`. `RUST_LOG` takes precedence over `log_level` when set.
    pub fn init_logging(&self) -> Result<(), TryInitError> {
        compete_utils::init_logging(self.log_format, &self.log_level)
    }

    /// End of the competition, or `None` if it overflows.
    pub fn end_time(&self) -> Option<Timestamp> {
        self.start_time
            .checked_add_secs(self.competition_duration_secs)
    }

    /// Reject configurations no engine can run with.
    pub fn validate(&self) -> Result<(), CompetitionError> {
        let roles = [
            ("asset_ledger", &self.asset_ledger),
            ("oracle", &self.oracle),
            ("certifier", &self.certifier),
            ("custody_address", &self.custody_address),
        ];
        for (name, addr) in roles {
            if addr.is_zero() {
                return Err(CompetitionError::Config(format!(
                    "{name} must not be the zero address"
                )));
            }
        }
        if self.competition_duration_secs == 0 {
            return Err(CompetitionError::Config(
                "competition_duration_secs must be positive".to_string(),
            ));
        }
        if self.end_time().is_none() {
            return Err(CompetitionError::Config(
                "start_time + competition_duration_secs overflows".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompetitionConfig {
        CompetitionConfig::new(
            Address::new([1; 20]),
            Address::new([2; 20]),
            Address::new([3; 20]),
            Address::new([4; 20]),
            Timestamp::new(1_700_000_000),
            600,
            80,
        )
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = sample();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = CompetitionConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_log_defaults() {
        let toml = r#"
            asset_ledger = "0x0101010101010101010101010101010101010101"
            oracle = "0x0202020202020202020202020202020202020202"
            certifier = "0x0303030303030303030303030303030303030303"
            custody_address = "0x0404040404040404040404040404040404040404"
            start_time = 1700000000
            competition_duration_secs = 600
            payout_threshold = 80
        "#;
        let config = CompetitionConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config, sample());
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn json_log_format_parses() {
        let mut toml = sample().to_toml_string().unwrap();
        toml = toml.replace("log_format = \"human\"", "log_format = \"json\"");
        let config = CompetitionConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn malformed_address_is_config_error() {
        let toml = sample()
            .to_toml_string()
            .unwrap()
            .replace("0x0202020202020202020202020202020202020202", "0x02");
        assert!(matches!(
            CompetitionConfig::from_toml_str(&toml),
            Err(CompetitionError::Config(_))
        ));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = CompetitionConfig::from_toml_file("/nonexistent/competition.toml");
        assert!(matches!(result, Err(CompetitionError::Config(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("competition.toml");
        std::fs::write(&path, sample().to_toml_string().unwrap()).unwrap();
        assert_eq!(CompetitionConfig::from_toml_file(&path).unwrap(), sample());
    }

    #[test]
    fn init_logging_installs_configured_subscriber_once() {
        let mut config = sample();
        config.log_format = LogFormat::Json;
        config.log_level = "debug".to_string();
        assert!(config.init_logging().is_ok());
        assert!(config.init_logging().is_err());
    }

    #[test]
    fn end_time_is_start_plus_duration() {
        assert_eq!(sample().end_time(), Some(Timestamp::new(1_700_000_600)));
    }

    #[test]
    fn validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_oracle() {
        let mut config = sample();
        config.oracle = Address::ZERO;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("oracle"));
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let mut config = sample();
        config.competition_duration_secs = 0;
        assert!(matches!(config.validate(), Err(CompetitionError::Config(_))));
    }

    #[test]
    fn validate_rejects_overflowing_end() {
        let mut config = sample();
        config.start_time = Timestamp::new(u64::MAX - 10);
        assert!(matches!(config.validate(), Err(CompetitionError::Config(_))));
    }
}
