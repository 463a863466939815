// src/config.rs
// Optional runtime settings embedded in index.html:
//   <script id="anatomy-insure-config" type="application/json">{ ... }</script>

use serde::Deserialize;
use web_sys::window;

use crate::verification::DEFAULT_TICK_MS;

const CONFIG_SCRIPT_ID: &str = "anatomy-insure-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub verify_interval_ms: u32,
    pub network_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verify_interval_ms: DEFAULT_TICK_MS,
            network_label: "Ethereum Mainnet".into(),
        }
    }
}

impl AppConfig {
    /// Blank input means "use defaults".
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut cfg: AppConfig =
            serde_json::from_str(raw).map_err(|e| format!("Invalid config JSON: {e}"))?;
        if cfg.verify_interval_ms == 0 {
            cfg.verify_interval_ms = DEFAULT_TICK_MS;
        }
        Ok(cfg)
    }

    /// Reads the embedded block. A parse failure still yields usable defaults
    /// alongside the error message.
    pub fn load() -> (Self, Option<String>) {
        match read_embedded_json(CONFIG_SCRIPT_ID) {
            None => (Self::default(), None),
            Some(raw) => match Self::parse(&raw) {
                Ok(cfg) => (cfg, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let w = window()?;
    let doc = w.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}
