use crate::rating::types::RatingValue;

#[derive(Debug, Clone)]
pub struct WarSettings {
    pub maximum: usize,
    pub general_threshold: RatingValue,
    pub women_threshold: RatingValue,
    pub home_federation: String,
}

impl Default for WarSettings {
    fn default() -> Self {
        Self {
            maximum: 50,
            general_threshold: 1800,
            women_threshold: 1000,
            home_federation: "IRL".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "war_ranking.db".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub war: WarSettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            war: WarSettings::default(),
            database: DatabaseSettings::default(),
        }
    }

    pub fn with_maximum(mut self, maximum: Option<usize>) -> Self {
        if let Some(maximum) = maximum {
            self.war.maximum = maximum;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.war.maximum, 50);
        assert_eq!(config.war.general_threshold, 1800);
        assert_eq!(config.war.women_threshold, 1000);
        assert_eq!(config.war.home_federation, "IRL");
    }

    #[test]
    fn test_maximum_override() {
        assert_eq!(AppConfig::new().with_maximum(Some(10)).war.maximum, 10);
        assert_eq!(AppConfig::new().with_maximum(None).war.maximum, 50);
    }
}
