use crate::{cli::commands, config::Config, core::SplitApp};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every command handler for one shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub app: SplitApp,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config) -> Self {
        Self::with_app(mode, config, SplitApp::new())
    }

    pub fn with_app(mode: CliMode, config: Config, app: SplitApp) -> Self {
        Self {
            mode,
            registry: CommandRegistry::with_entries(commands::all_definitions()),
            app,
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        "split> ".to_string()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
