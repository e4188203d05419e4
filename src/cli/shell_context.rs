use std::{env, path::PathBuf, sync::Arc};

use bufy_config::{Config, ConfigManager, Theme};
use bufy_core::{AccountStore, BudgetListView, SettingsNavigation, StoreBackedActions};
use bufy_domain::BudgetFilter;
use dialoguer::theme::ColorfulTheme;
use tracing::warn;

use crate::currency::AmountFormat;
use crate::errors::CliError;

use super::{
    commands::CommandSet,
    output::{self, OutputPreferences},
};

/// Overrides the directory holding `config/config.json`.
pub const HOME_ENV: &str = "BUDGET_VIEW_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub commands: CommandSet,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub store: Arc<AccountStore>,
    pub actions: StoreBackedActions,
    pub view: BudgetListView,
    pub settings: SettingsNavigation,
    pub snapshot_path: Option<PathBuf>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Builds the context under `$BUDGET_VIEW_HOME` or `~/.budget_view`.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = Config::resolve_base_dir(env::var_os(HOME_ENV).map(PathBuf::from));
        Self::with_home(mode, base)
    }

    pub fn with_home(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;

        let store = Arc::new(AccountStore::default());
        let actions = StoreBackedActions::new(Arc::clone(&store));
        let mut view = BudgetListView::attach(Arc::clone(&store));
        match config.default_filter.parse::<BudgetFilter>() {
            Ok(filter) => view.set_filter(filter),
            Err(err) => warn!("ignoring configured default filter: {}", err),
        }

        let context = Self {
            mode,
            commands: CommandSet::builtin(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            store,
            actions,
            view,
            settings: SettingsNavigation::default(),
            snapshot_path: None,
            last_command: None,
            running: true,
        };
        context.apply_output_preferences();
        Ok(context)
    }

    /// Pushes config-driven display settings into the output helpers.
    pub fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_mode: self.config.theme == Theme::Plain,
            color_disabled: !self.config.ui_color_enabled || self.mode == CliMode::Script,
            quiet_mode: false,
        });
    }

    /// Amount formatting for the configured locale and currency.
    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat::new(&self.config.locale, &self.config.currency)
    }

    /// Line-editor history kept next to `config.json`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.config_manager
            .config_path()
            .parent()
            .map(|dir| dir.join("history.txt"))
    }

    pub fn prompt(&self) -> String {
        let file = self
            .snapshot_path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str());
        match file {
            Some(name) => format!("budget [{}]> ", name),
            None => "budget> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.names().collect()
    }
}
