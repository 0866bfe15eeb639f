use anyhow::{Result, anyhow};

const DEFAULT_BLOG_SERVICE_ADDR: &str = "localhost:8000";
const DEFAULT_ADMIN_ADDR: &str = ":8080";

#[derive(Debug, Clone)]
pub struct Settings {
    pub blog_service_addr: String,
    pub admin_addr: String,
    pub log_level: String,
    pub rpc_timeout_secs: u64,
    pub rpc_concurrency_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let blog_service_addr = get_or_default(&lookup, "BLOG_SERVICE_ADDR", DEFAULT_BLOG_SERVICE_ADDR);
        let admin_addr = normalize_listen_addr(&get_or_default(
            &lookup,
            "ADMIN_ADDR",
            DEFAULT_ADMIN_ADDR,
        ));
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let rpc_timeout_secs = parse_positive(&lookup, "BLOG_SERVICE_RPC_TIMEOUT_SECS", 10u64)?;
        let rpc_concurrency_limit =
            parse_positive(&lookup, "BLOG_SERVICE_CONCURRENCY_LIMIT", 256usize)?;

        Ok(Self {
            blog_service_addr,
            admin_addr,
            log_level,
            rpc_timeout_secs,
            rpc_concurrency_limit,
        })
    }
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

fn normalize_listen_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}
