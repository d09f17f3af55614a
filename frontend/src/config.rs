use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::components::guard::GuardPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Shape of `config.json` and of the `window.__STAFFDESK_*` globals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "GUARDED_PATHS")]
    pub guarded_paths: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub guarded_paths: Option<Vec<String>>,
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Later sources only fill what earlier ones left empty.
fn merge(sources: impl IntoIterator<Item = RuntimeConfig>) -> ResolvedConfig {
    let mut api_base_url = None;
    let mut guarded_paths = None;
    for source in sources {
        if api_base_url.is_none() {
            api_base_url = source
                .api_base_url
                .map(|url| normalize_base_url(&url))
                .filter(|url| !url.is_empty());
        }
        if guarded_paths.is_none() {
            guarded_paths = source.guarded_paths;
        }
    }
    ResolvedConfig {
        api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        guarded_paths,
    }
}

fn cache(config: ResolvedConfig) -> ResolvedConfig {
    RESOLVED.get_or_init(|| config).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_string(obj: &JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
        })
    }

    fn read_paths(obj: &JsValue, keys: &[&str]) -> Option<Vec<String>> {
        keys.iter().find_map(|key| {
            let value = js_sys::Reflect::get(obj, &(*key).into()).ok()?;
            if !js_sys::Array::is_array(&value) {
                return None;
            }
            Some(
                js_sys::Array::from(&value)
                    .iter()
                    .filter_map(|item| item.as_string())
                    .collect(),
            )
        })
    }

    pub fn from_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let obj = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if obj.is_undefined() || obj.is_null() {
            return None;
        }
        Some(RuntimeConfig {
            api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
            guarded_paths: read_paths(&obj, &["GUARDED_PATHS", "guarded_paths"]),
        })
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let response = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !response.status().is_success() {
            log::debug!("No config.json served (status {})", response.status());
            return None;
        }
        match response.json::<RuntimeConfig>().await {
            Ok(config) => Some(config),
            Err(err) => {
                log::warn!("Ignoring malformed config.json: {}", err);
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn resolve() -> ResolvedConfig {
    let mut sources = Vec::new();
    sources.extend(browser::from_global("__STAFFDESK_ENV"));
    sources.extend(browser::from_global("__STAFFDESK_CONFIG"));
    if !sources.iter().any(|source| source.api_base_url.is_some()) {
        sources.extend(browser::fetch_config_json().await);
    }
    merge(sources)
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve() -> ResolvedConfig {
    merge([RuntimeConfig {
        api_base_url: std::env::var("STAFFDESK_API_BASE_URL").ok(),
        guarded_paths: None,
    }])
}

pub async fn await_runtime_config() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    cache(resolve().await)
}

pub async fn await_api_base_url() -> String {
    await_runtime_config().await.api_base_url
}

/// Guard policy from the resolved config, or the built-in allow-list when
/// resolution has not finished.
pub fn guard_policy() -> GuardPolicy {
    match RESOLVED.get().and_then(|config| config.guarded_paths.clone()) {
        Some(paths) => GuardPolicy::with_guarded_paths(paths),
        None => GuardPolicy::default(),
    }
}

pub async fn init() {
    let config = await_runtime_config().await;
    log::info!("Runtime config resolved (api: {})", config.api_base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        assert_eq!(normalize_base_url(" https://api.example.com/ "), "https://api.example.com");
        assert_eq!(normalize_base_url("http://h:3000//"), "http://h:3000");
    }

    #[test]
    fn earlier_sources_win_per_field() {
        let resolved = merge([
            RuntimeConfig {
                api_base_url: Some("https://env.example.com/".into()),
                guarded_paths: None,
            },
            RuntimeConfig {
                api_base_url: Some("https://file.example.com".into()),
                guarded_paths: Some(vec!["/".into(), "/login".into()]),
            },
        ]);
        assert_eq!(resolved.api_base_url, "https://env.example.com");
        assert_eq!(
            resolved.guarded_paths,
            Some(vec!["/".to_string(), "/login".to_string()])
        );
    }

    #[test]
    fn empty_sources_fall_back_to_default() {
        let resolved = merge([RuntimeConfig {
            api_base_url: Some("   ".into()),
            guarded_paths: None,
        }]);
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert!(resolved.guarded_paths.is_none());
    }

    #[test]
    fn config_json_accepts_upper_case_keys() {
        let parsed: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"https://x","GUARDED_PATHS":["/"]}"#).unwrap();
        assert_eq!(parsed.api_base_url.as_deref(), Some("https://x"));
        assert_eq!(parsed.guarded_paths, Some(vec!["/".to_string()]));
    }
}
