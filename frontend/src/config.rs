use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(object_key: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object_key.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &keys[0].into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &keys[1].into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__CSLSCHEDULE_ENV (env.js) wins over window.__CSLSCHEDULE_CONFIG
    read_global("__CSLSCHEDULE_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__CSLSCHEDULE_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__CSLSCHEDULE_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_cfg: &RuntimeConfig) {}

fn config_json_url() -> anyhow::Result<String> {
    let window = crate::utils::storage::window().map_err(|e| anyhow!(e))?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow!("location.origin is unavailable"))?;
    Ok(format!("{}/config.json", origin))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let url = config_json_url()?;
    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?;
    if !resp.status().is_success() {
        return Err(anyhow!("{} returned {}", url, resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .with_context(|| format!("failed to parse {}", url))
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    API_BASE_URL.get_or_init(|| value.to_string()).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals().as_deref().and_then(normalize_base_url) {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(cfg) => {
            write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::warn!("Runtime config unavailable, using default: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::debug!("API base URL: {}", base_url);
}
