use std::{fs, path::Path, str::FromStr};

use anchor_lang::prelude::Pubkey;
use eyre::{Result, WrapErr};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Parses a JSON file. A missing file is `Ok(None)`; anything unreadable or
/// malformed is an error.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read JSON file '{}'", path.display()))?;
    let value = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse JSON file '{}'", path.display()))?;

    Ok(Some(value))
}

pub fn deserialize_pubkey<'de, D>(deserializer: D) -> std::result::Result<Pubkey, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Pubkey::from_str(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_optional_pubkey<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Pubkey>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    s.map(|s| Pubkey::from_str(&s).map_err(serde::de::Error::custom))
        .transpose()
}

pub fn deserialize_pubkey_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<Pubkey>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings: Vec<String> = Vec::deserialize(deserializer)?;
    strings
        .iter()
        .map(|s| Pubkey::from_str(s).map_err(serde::de::Error::custom))
        .collect()
}
