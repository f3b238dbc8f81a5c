use crate::{
    errors::{ConfigError, ConfigResult},
    search_query::QueryLanguageVersion,
    storage::{BackendLocal, StorageManager},
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_HOTKEY_TOGGLE_HIGHLIGHTS: &str = "Ctrl+Shift+H";
const DEFAULT_HOTKEY_SELECT_NEXT: &str = "Ctrl+Shift+N";
const DEFAULT_HOTKEY_SELECT_ALL: &str = "Ctrl+Shift+A";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Highlight search terms as soon as a browser window opens
    #[serde(default = "default_highlight_by_default")]
    pub highlight_by_default: bool,

    #[serde(default = "default_hotkey_toggle_highlights")]
    pub hotkey_toggle_highlights: String,
    #[serde(default = "default_hotkey_select_next")]
    pub hotkey_select_next_matching_card: String,
    #[serde(default = "default_hotkey_select_all")]
    pub hotkey_select_all_matching_cards: String,

    /// Pins the grammar; takes precedence over `host_version`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_language: Option<QueryLanguageVersion>,

    /// Host release, e.g. "2.1.24"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_version: Option<String>,

    /// Search-bar texts that are never highlighted (e.g. the host's placeholder)
    #[serde(default)]
    pub ignored_queries: Vec<String>,

    #[serde(skip_serializing, skip_deserializing)]
    pub(crate) base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight_by_default: default_highlight_by_default(),
            hotkey_toggle_highlights: default_hotkey_toggle_highlights(),
            hotkey_select_next_matching_card: default_hotkey_select_next(),
            hotkey_select_all_matching_cards: default_hotkey_select_all(),
            query_language: None,
            host_version: None,
            ignored_queries: Vec::new(),
            base_path: String::new(),
        }
    }
}

fn default_highlight_by_default() -> bool {
    true
}

fn default_hotkey_toggle_highlights() -> String {
    DEFAULT_HOTKEY_TOGGLE_HIGHLIGHTS.to_string()
}

fn default_hotkey_select_next() -> String {
    DEFAULT_HOTKEY_SELECT_NEXT.to_string()
}

fn default_hotkey_select_all() -> String {
    DEFAULT_HOTKEY_SELECT_ALL.to_string()
}

impl Config {
    fn validate(&self) -> ConfigResult<()> {
        let hotkeys = [
            ("hotkey_toggle_highlights", &self.hotkey_toggle_highlights),
            (
                "hotkey_select_next_matching_card",
                &self.hotkey_select_next_matching_card,
            ),
            (
                "hotkey_select_all_matching_cards",
                &self.hotkey_select_all_matching_cards,
            ),
        ];
        for (field, hotkey) in hotkeys {
            if hotkey.trim().is_empty() {
                return Err(ConfigError::validation(field, "hotkey cannot be empty"));
            }
        }

        if let Some(version) = &self.host_version {
            QueryLanguageVersion::for_host_version(version)?;
        }

        Ok(())
    }

    /// Grammar to tokenize with: pinned `query_language`, else derived from
    /// `host_version`, else the modern grammar.
    pub fn query_language_version(&self) -> QueryLanguageVersion {
        if let Some(version) = self.query_language {
            return version;
        }

        match self.host_version.as_deref() {
            Some(host) => QueryLanguageVersion::for_host_version(host).unwrap_or_else(|err| {
                log::warn!("{err}; falling back to {}", QueryLanguageVersion::default());
                QueryLanguageVersion::default()
            }),
            None => QueryLanguageVersion::default(),
        }
    }

    pub fn load_with(base_path: &str) -> ConfigResult<Self> {
        let store = BackendLocal::new(base_path)?;

        // create new if does not exist
        if !store.exists(CONFIG_FILE) {
            log::info!("Creating default config at {base_path}/{CONFIG_FILE}");
            store.write(CONFIG_FILE, serde_yml::to_string(&Self::default())?.as_bytes())?;
        }

        let config_str = String::from_utf8(store.read(CONFIG_FILE)?)?;
        let mut config: Self = serde_yml::from_str(&config_str)?;

        config.base_path = base_path.to_string();

        config.validate()?;

        // resave so newly added keys show up in the file
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> ConfigResult<()> {
        let store = BackendLocal::new(&self.base_path)?;

        let config_str = serde_yml::to_string(&self)?;
        store.write(CONFIG_FILE, config_str.as_bytes())?;
        Ok(())
    }
}
