use std::env;
use std::str::FromStr;

use anyhow::{Context as _, ensure};
use pager_utils::pagination::{
    DEFAULT_CALLBACK_FORMAT, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_BUTTONS, PaginationError,
    PaginatorBuilder, validate_max_buttons,
};

/// Runtime configuration for the pagination commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Command name embedded in callback data of the list keyboard.
    pub command: String,
    pub items_per_page: usize,
    pub max_buttons: usize,
    pub force_button_count: bool,
    pub callback_format: String,
    /// Number of entries in the demo catalog.
    pub catalog_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command: "list".to_owned(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_buttons: DEFAULT_MAX_BUTTONS,
            force_button_count: false,
            callback_format: DEFAULT_CALLBACK_FORMAT.to_owned(),
            catalog_size: 24,
        }
    }
}

impl Settings {
    /// Load settings from `PAGER_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Self {
            command: lookup("PAGER_COMMAND").unwrap_or(defaults.command),
            items_per_page: parse_var(&lookup, "PAGER_ITEMS_PER_PAGE")?
                .unwrap_or(defaults.items_per_page),
            max_buttons: parse_var(&lookup, "PAGER_MAX_BUTTONS")?.unwrap_or(defaults.max_buttons),
            force_button_count: parse_var(&lookup, "PAGER_FORCE_BUTTON_COUNT")?
                .unwrap_or(defaults.force_button_count),
            callback_format: lookup("PAGER_CALLBACK_FORMAT").unwrap_or(defaults.callback_format),
            catalog_size: parse_var(&lookup, "PAGER_CATALOG_SIZE")?
                .unwrap_or(defaults.catalog_size),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Check the invariants the paginator enforces, so bad config fails at start-up.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.command.is_empty(), "PAGER_COMMAND must not be empty");
        if self.items_per_page == 0 {
            return Err(PaginationError::InvalidItemsPerPage).context("PAGER_ITEMS_PER_PAGE");
        }
        validate_max_buttons(self.max_buttons).context("PAGER_MAX_BUTTONS")?;
        if self.catalog_size == 0 {
            return Err(PaginationError::EmptyItems).context("PAGER_CATALOG_SIZE");
        }

        Ok(())
    }

    /// Paginator builder preloaded with these settings.
    pub fn paginator_builder(&self) -> PaginatorBuilder {
        PaginatorBuilder::new()
            .command(self.command.as_str())
            .items_per_page(self.items_per_page)
            .max_buttons(self.max_buttons, self.force_button_count)
            .callback_format(self.callback_format.as_str())
    }
}

fn parse_var<V>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<V>>
where
    V: FromStr,
    V::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<V>()
        .map(Some)
        .with_context(|| format!("invalid value for {key}: {raw:?}"))
}
