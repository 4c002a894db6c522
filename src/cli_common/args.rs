//! Общие аргументы командной строки

use clap::Args;
use std::path::PathBuf;

use super::output::OutputFormat;

/// Общие аргументы для всех команд
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Аргументы для работы с выводом
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Поисковые базы резолвера
#[derive(Args, Debug, Clone, Default)]
pub struct ResolverArgs {
    /// Privileged search base (path or URI), may be repeated
    #[arg(long = "privileged", value_name = "BASE")]
    pub privileged: Vec<String>,

    /// Fallback search base (path or URI), may be repeated
    #[arg(long = "fallback", value_name = "BASE")]
    pub fallback: Vec<String>,

    /// Directory where the upward node_modules search starts
    #[arg(long)]
    pub context_dir: Option<PathBuf>,

    /// Configuration file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    /// Определяет уровень логирования на основе флагов
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Проверяет, нужно ли выводить информацию
    pub fn should_print(&self) -> bool {
        !self.quiet
    }
}

impl ResolverArgs {
    /// Накладывает флаги поверх конфигурации: непустой список баз заменяет
    /// список из файла
    pub fn apply_to(&self, config: &mut crate::config::ResolverConfig) {
        if !self.privileged.is_empty() {
            config.privileged = self.privileged.clone();
        }
        if !self.fallback.is_empty() {
            config.fallback = self.fallback.clone();
        }
        if let Some(dir) = &self.context_dir {
            config.context_dir = Some(dir.clone());
        }
    }
}
