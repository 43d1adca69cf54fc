use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__BACKOFFICE_ENV (env.js) wins over window.__BACKOFFICE_CONFIG.
    read_global("__BACKOFFICE_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__BACKOFFICE_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get("./config.json")
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid runtime config")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) => return cache_base_url(&url),
        Ok(_) => log::debug!("config.json has no api_base_url"),
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL: {}", base_url);
}
