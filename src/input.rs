use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::error::{HeatmapError, Result};
use crate::Post;

/// Parses a batch from either a bare JSON array or a `{ "posts": [...] }`
/// envelope, filling in ids for posts that arrive without one.
pub fn parse_posts(json: &str) -> Result<Vec<Post>> {
    let payload: Value = serde_json::from_str(json)?;
    let batch = match payload {
        Value::Array(posts) => Value::Array(posts),
        Value::Object(mut envelope) => match envelope.remove("posts") {
            Some(posts @ Value::Array(_)) => posts,
            _ => {
                return Err(HeatmapError::InvalidArgument(
                    "expected a \"posts\" array in the batch object".to_string(),
                ))
            }
        },
        _ => {
            return Err(HeatmapError::InvalidArgument(
                "expected a JSON array of posts".to_string(),
            ))
        }
    };

    let mut posts: Vec<Post> = serde_json::from_value(batch)?;
    assign_missing_ids(&mut posts);
    Ok(posts)
}

pub fn read_posts(path: &Path) -> Result<Vec<Post>> {
    let contents = std::fs::read_to_string(path)?;
    parse_posts(&contents)
}

pub fn read_posts_from(mut reader: impl Read) -> Result<Vec<Post>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_posts(&buffer)
}

pub fn assign_missing_ids(posts: &mut [Post]) {
    for post in posts.iter_mut() {
        if post.id.trim().is_empty() {
            post.id = derive_post_id(post);
        }
    }
}

pub fn derive_post_id(post: &Post) -> String {
    let payload = format!(
        "{}:{}:{}:{}",
        post.platform.label(),
        post.created_at.to_rfc3339(),
        post.title.as_deref().unwrap_or_default(),
        post.content.as_deref().unwrap_or_default()
    );
    format!("post_{:x}", stable_hash64(&payload))
}

fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Accepts string or numeric ids. Null reads as blank and is filled in by
/// `assign_missing_ids`.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

/// RFC 3339 strings or epoch milliseconds. Anything else reads as the epoch.
pub(crate) fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(timestamp_from_value)
        .unwrap_or_default())
}

fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            match DateTime::parse_from_rfc3339(text) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(_) => text
                    .parse::<i64>()
                    .ok()
                    .and_then(DateTime::from_timestamp_millis),
            }
        }
        Value::Number(number) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Missing, null, negative and unparseable counts all read as zero.
pub(crate) fn coalesce_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value).unwrap_or(0))
}

pub(crate) fn coalesce_optional_count<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                return Some(count);
            }
            number.as_f64()?
        }
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    count_from_f64(number)
}

fn count_from_f64(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.trunc() as u64)
}
