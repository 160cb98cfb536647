use crate::commands::{CmdMessage, CmdResult, VitrinaPaths};
use crate::config::{ConfigKey, VitrinaConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(ConfigKey),
    Set(ConfigKey, String),
}

pub fn run(paths: &VitrinaPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = VitrinaConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in ConfigKey::all() {
                result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(*key))));
            }
        }
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(format!("{} = {}", key, config.get(key))));
        }
        ConfigAction::Set(key, value) => {
            config.set(key, &value)?;
            config.save(&paths.config_dir)?;
            tracing::info!(key = %key, dir = %paths.config_dir.display(), "config updated");
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(key)
            )));
        }
    }

    Ok(result.with_config(config))
}
