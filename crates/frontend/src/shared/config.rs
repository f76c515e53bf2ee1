use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PortalConfig {
    pub lists: ListsConfig,
    pub notifications: NotificationsConfig,
}

/// Размеры страниц списков
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListsConfig {
    pub payment_approval_page_size: usize,
    pub recipients_page_size: usize,
    pub templates_page_size: usize,
    pub users_page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Время показа toast, мс
    pub toast_ms: u32,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            payment_approval_page_size: 5,
            recipients_page_size: 10,
            templates_page_size: 10,
            users_page_size: 10,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { toast_ms: 5000 }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[lists]
payment_approval_page_size = 5
recipients_page_size = 10
templates_page_size = 10
users_page_size = 10

[notifications]
toast_ms = 5000
"#;

/// Ключ localStorage с пользовательской конфигурацией (TOML)
pub const CONFIG_STORAGE_KEY: &str = "ach_portal_config";

/// Load configuration
///
/// Override text (if any) is parsed on top of the defaults; missing keys keep default values.
/// Without override the embedded default config is used.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<PortalConfig> {
    let config: PortalConfig = match override_toml {
        Some(text) if !text.trim().is_empty() => {
            log::info!("Loading config from override");
            toml::from_str(text)?
        }
        _ => {
            log::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };
    Ok(config.normalized())
}

/// Как [`load_config`], но ошибка разбора даёт конфигурацию по умолчанию
pub fn load_config_or_default(override_toml: Option<&str>) -> PortalConfig {
    match load_config(override_toml) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid portal config, falling back to defaults: {}", e);
            PortalConfig::default()
        }
    }
}

/// Конфигурация из localStorage браузера (если сохранена)
pub fn load_browser_config() -> PortalConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());
    load_config_or_default(stored.as_deref())
}

impl PortalConfig {
    /// Нулевой размер страницы заменяется значением по умолчанию
    fn normalized(mut self) -> Self {
        let defaults = ListsConfig::default();
        let lists = &mut self.lists;
        if lists.payment_approval_page_size == 0 {
            lists.payment_approval_page_size = defaults.payment_approval_page_size;
        }
        if lists.recipients_page_size == 0 {
            lists.recipients_page_size = defaults.recipients_page_size;
        }
        if lists.templates_page_size == 0 {
            lists.templates_page_size = defaults.templates_page_size;
        }
        if lists.users_page_size == 0 {
            lists.users_page_size = defaults.users_page_size;
        }
        self
    }
}
