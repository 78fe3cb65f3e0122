use serde::{Deserialize, Serialize};

/// Bootstrap configuration: the tail numbers seeded at system start.
///
/// Bootstrapping re-runs `initFlightRecord` for every listed tail number,
/// which destructively resets any existing record (see
/// [`Dispatcher::bootstrap`](crate::Dispatcher::bootstrap)). The defaults
/// match the seeds existing installs were provisioned with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Tail numbers to initialize.
    pub seed_tail_numbers: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            seed_tail_numbers: vec!["TailNumber1".to_string(), "TailNumber2".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds() {
        let config = BootstrapConfig::default();
        assert_eq!(config.seed_tail_numbers, ["TailNumber1", "TailNumber2"]);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: BootstrapConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn explicit_seeds_override_defaults() {
        let config: BootstrapConfig =
            serde_json::from_str(r#"{"seed_tail_numbers":["AC123"]}"#).unwrap();
        assert_eq!(config.seed_tail_numbers, ["AC123"]);
    }
}
