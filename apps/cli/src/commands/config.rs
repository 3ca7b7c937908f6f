use anyhow::Result;
use tracing::info;

use samurai_types::{CharClassKind, HighlightSettings};
use crate::{ConfigAction, config_manager::ConfigManager};
use crate::error::CliError;

pub fn config_command(action: ConfigAction, config_manager: &ConfigManager) -> Result<()> {
    match action {
        ConfigAction::Show => show_settings(config_manager),
        ConfigAction::Init { force } => init_settings(force, config_manager),
    }
}

fn show_settings(config_manager: &ConfigManager) -> Result<()> {
    let settings = config_manager.load_settings()?;
    let source = if config_manager.settings_exist() {
        config_manager.settings_path().display().to_string()
    } else {
        "(defaults)".to_string()
    };

    println!("Settings: {}", source);
    print!("{}", format_settings(&settings));
    Ok(())
}

fn init_settings(force: bool, config_manager: &ConfigManager) -> Result<()> {
    if config_manager.settings_exist() && !force {
        return Err(CliError::config(format!(
            "Settings already exist at {}",
            config_manager.settings_path().display()
        ))
        .into());
    }

    info!("Writing default settings");
    config_manager.save_settings(&HighlightSettings::default())?;
    println!("Wrote default settings to {}", config_manager.settings_path().display());
    Ok(())
}

fn format_settings(settings: &HighlightSettings) -> String {
    CharClassKind::HIGHLIGHTED
        .iter()
        .map(|kind| {
            let marker = if settings.is_enabled(*kind) { "on" } else { "off" };
            format!("  {:<20} {}\n", kind.name(), marker)
        })
        .collect()
}
