use crate::core::organizer::{SeatOrganizer, CREDIT_CATEGORY};
use crate::core::ranking::SeatRanking;
use crate::utils::error::{Result, SeatError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub seats: SeatsConfig,
    pub ranking: Option<RankingConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatsConfig {
    pub filter_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Replace the default ranking instead of overriding entries of it.
    #[serde(default)]
    pub replace_defaults: bool,
    #[serde(default)]
    pub priorities: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SEAT_CATEGORY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn filter_category(&self) -> &str {
        self.seats
            .filter_category
            .as_deref()
            .unwrap_or(CREDIT_CATEGORY)
    }

    pub fn ranking(&self) -> SeatRanking {
        match &self.ranking {
            Some(ranking) if ranking.replace_defaults => {
                SeatRanking::from_priorities(ranking.priorities.clone())
            }
            Some(ranking) => SeatRanking::default().with_overrides(ranking.priorities.clone()),
            None => SeatRanking::default(),
        }
    }

    pub fn organizer(&self) -> SeatOrganizer {
        self.organizer_with_category(None)
    }

    /// Organizer for this config, with `category` taking precedence over
    /// `seats.filter_category` when given.
    pub fn organizer_with_category(&self, category: Option<&str>) -> SeatOrganizer {
        SeatOrganizer::new(self.ranking())
            .with_category(category.unwrap_or_else(|| self.filter_category()))
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(category) = &self.seats.filter_category {
            validate_non_empty_string("seats.filter_category", category)?;
        }

        if let Some(ranking) = &self.ranking {
            for seat_type in ranking.priorities.keys() {
                validate_non_empty_string("ranking.priorities", seat_type)?;
            }

            if ranking.replace_defaults && ranking.priorities.is_empty() {
                return Err(SeatError::ConfigValidationError {
                    field: "ranking.priorities".to_string(),
                    message: "replace_defaults requires at least one priority".to_string(),
                });
            }
        }

        Ok(())
    }
}
