use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum ConversionStatus {
    #[default]
    Any,
    ConvertedOnly,
    NotConvertedOnly,
}

impl ConversionStatus {
    pub fn matches(self, converted: bool) -> bool {
        match self {
            Self::Any => true,
            Self::ConvertedOnly => converted,
            Self::NotConvertedOnly => !converted,
        }
    }
}

impl fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Any => "any",
            Self::ConvertedOnly => "converted",
            Self::NotConvertedOnly => "not-converted",
        };
        f.write_str(label)
    }
}

impl FromStr for ConversionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "all" => Ok(Self::Any),
            "converted" | "converted-only" | "yes" => Ok(Self::ConvertedOnly),
            "not-converted" | "not-converted-only" | "no" => Ok(Self::NotConvertedOnly),
            other => Err(format!(
                "unknown conversion status {other:?} (expected any, converted, not-converted)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    #[default]
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Reject,
    Lenient,
}
