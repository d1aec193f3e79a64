use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_USER_ID: i64 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub user_id: Option<i64>,
}

/// Fully resolved configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub user_id: i64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl RuntimeConfig {
    /// Fills unset fields from `other`.
    pub fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            user_id: self.user_id.or(other.user_id),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.user_id.is_some()
    }

    pub fn resolve(self) -> ResolvedConfig {
        let defaults = ResolvedConfig::default();
        ResolvedConfig {
            api_base_url: self
                .api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            user_id: self.user_id.unwrap_or(defaults.user_id),
        }
    }
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Expect optional global object: window.<name> = { api_base_url: "...", user_id: 1 }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &JsValue::from_str(name)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let lookup = |lower: &str, upper: &str| {
        js_sys::Reflect::get(&obj, &JsValue::from_str(lower))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &JsValue::from_str(upper)).ok())
            .filter(|v| !v.is_undefined() && !v.is_null())
    };
    Some(RuntimeConfig {
        api_base_url: lookup("api_base_url", "API_BASE_URL").and_then(|v| v.as_string()),
        user_id: lookup("user_id", "USER_ID")
            .and_then(|v| v.as_f64())
            .and_then(user_id_from_number),
    })
}

/// JS numbers are floats; only whole, finite values are usable ids.
fn user_id_from_number(raw: f64) -> Option<i64> {
    if !raw.is_finite() || raw.fract() != 0.0 {
        log::warn!("ignoring non-integral user_id {}", raw);
        return None;
    }
    Some(raw as i64)
}

fn snapshot_from_globals() -> RuntimeConfig {
    if cfg!(not(target_arch = "wasm32")) {
        return RuntimeConfig::default();
    }
    // window.__LOGIN_ENV (env.js) takes precedence over window.__LOGIN_CONFIG.
    read_global("__LOGIN_ENV")
        .unwrap_or_default()
        .or(read_global("__LOGIN_CONFIG").unwrap_or_default())
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    if cfg!(not(target_arch = "wasm32")) {
        return None;
    }
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache(config: ResolvedConfig) -> ResolvedConfig {
    CONFIG.get_or_init(|| config).clone()
}

pub async fn await_config() -> ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    if globals.is_complete() {
        return cache(globals.resolve());
    }
    let merged = match fetch_runtime_config().await {
        Some(file) => globals.or(file),
        None => globals,
    };
    log::debug!("runtime config resolved: {:?}", merged);
    cache(merged.resolve())
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

/// Id fetched on submit. Falls back to the default until `init` has run.
pub fn user_id() -> i64 {
    CONFIG
        .get()
        .map(|cfg| cfg.user_id)
        .unwrap_or(DEFAULT_USER_ID)
}

pub async fn init() {
    let _ = await_config().await;
}
