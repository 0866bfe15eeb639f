use std::num::NonZeroU32;

use anyhow::{Context, Result, anyhow};

const DEFAULT_BLOG_SERVICE_ADDR: &str = "localhost:8000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub grpc_addr: String,
    pub log_level: String,
    pub page_size: NonZeroU32,
    pub db_max_connections: u32,
    pub grpc_concurrency_limit: usize,
    pub grpc_request_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = get_required(&lookup, "BLOG_SERVICE_DB_STRING")
            .context("BLOG_SERVICE_DB_STRING is required")?;
        let grpc_addr = normalize_listen_addr(&get_or_default(
            &lookup,
            "BLOG_SERVICE_ADDR",
            DEFAULT_BLOG_SERVICE_ADDR,
        ));
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let page_size = parse_non_zero(&lookup, "BLOG_SERVICE_PAGE_SIZE", 100)?;
        let db_max_connections = parse_positive(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let grpc_concurrency_limit = parse_positive(&lookup, "GRPC_CONCURRENCY_LIMIT", 256usize)?;
        let grpc_request_timeout_secs =
            parse_positive(&lookup, "GRPC_REQUEST_TIMEOUT_SECS", 10u64)?;

        Ok(Self {
            database_url,
            grpc_addr,
            log_level,
            page_size,
            db_max_connections,
            grpc_concurrency_limit,
            grpc_request_timeout_secs,
        })
    }
}

fn get_required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    let value = lookup(key).ok_or_else(|| anyhow!("{key} is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default + ToString,
{
    let value = get_or_default(lookup, key, &default.to_string())
        .parse::<T>()
        .map_err(|_| anyhow!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_non_zero(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u32,
) -> Result<NonZeroU32> {
    get_or_default(lookup, key, &default.to_string())
        .parse::<NonZeroU32>()
        .map_err(|err| anyhow!("Failed to parse {key}, expecting integer > 0: {err}"))
}

/// `:8000` binds every interface.
fn normalize_listen_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}
