use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub id_number: String,
    pub mobile_number: String,
    pub password_hash: String,
    pub uid: String,
    pub pincode: String,
    pub sector: String,
    pub language: Language,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Preferred UI language of a citizen account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Kn,
    Ta,
    Te,
    Ml,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Kn => "kn",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Ml => "ml",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "kn" => Ok(Language::Kn),
            "ta" => Ok(Language::Ta),
            "te" => Ok(Language::Te),
            "ml" => Ok(Language::Ml),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
