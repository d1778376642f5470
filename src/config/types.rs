use serde::Deserialize;

/// Main configuration structure for du-harvest
///
/// Every section has defaults, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub bulletin: BulletinConfig,
    pub athletics: AthleticsConfig,
    pub calendar: CalendarConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    pub timeout_secs: u64,

    /// TCP connect timeout (seconds)
    pub connect_timeout_secs: u64,

    /// Maximum number of calendar detail pages fetched at once
    pub max_concurrent_enrichments: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("du-harvest/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_concurrent_enrichments: 16,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Directory receiving the JSON files, created on demand
    ///
    /// Relative paths, including the default `results`, resolve against the
    /// process working directory, not the executable's location. Pass an
    /// absolute path (or `--output-dir`) to pin the output somewhere fixed.
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "results".to_string(),
        }
    }
}

/// Course bulletin source
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BulletinConfig {
    pub url: String,
    pub file_name: String,
    pub collection: String,

    /// Selector for one course block
    pub block: String,
    pub code: String,
    pub title: String,

    /// Selector for the auxiliary text searched for the excluded marker
    pub extra: String,

    /// Courses are kept only when their code starts with this
    pub code_prefix: String,

    /// Courses whose auxiliary text contains this are dropped
    pub excluded_marker: String,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            url: "https://bulletin.du.edu".to_string(),
            file_name: "bulletin.json".to_string(),
            collection: "courses".to_string(),
            block: ".courseblock".to_string(),
            code: ".courseblocktitle strong".to_string(),
            title: ".courseblocktitle".to_string(),
            extra: ".courseblockextra".to_string(),
            code_prefix: "COMP-3".to_string(),
            excluded_marker: "Prerequisite".to_string(),
        }
    }
}

/// Athletics schedule source
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AthleticsConfig {
    pub url: String,
    pub file_name: String,
    pub collection: String,
    pub block: String,
    pub home_team: String,
    pub opponent: String,
    pub date: String,
}

impl Default for AthleticsConfig {
    fn default() -> Self {
        Self {
            url: "https://denverpioneers.com/index.aspx".to_string(),
            file_name: "athletic_events.json".to_string(),
            collection: "events".to_string(),
            block: ".carousel-item".to_string(),
            home_team: ".team-name".to_string(),
            opponent: ".opponent-name".to_string(),
            date: ".event-date".to_string(),
        }
    }
}

/// Events calendar source
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CalendarConfig {
    pub url: String,

    /// Prefix for relative detail links
    pub link_base: String,
    pub file_name: String,
    pub collection: String,
    pub block: String,
    pub title: String,
    pub date: String,
    pub time: String,

    /// Selector for the anchor whose `href` points at the detail page
    pub link: String,

    /// Selector applied to each detail page
    pub description: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            url: "https://www.du.edu/calendar".to_string(),
            link_base: "https://www.du.edu/calendar".to_string(),
            file_name: "calendar_events.json".to_string(),
            collection: "events".to_string(),
            block: ".event-item".to_string(),
            title: ".event-title".to_string(),
            date: ".event-date".to_string(),
            time: ".event-time".to_string(),
            link: "a.event-link".to_string(),
            description: ".event-description".to_string(),
        }
    }
}
