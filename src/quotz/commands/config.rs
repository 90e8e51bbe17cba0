use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuotzConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = QuotzConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            result = result.with_config(config);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_show_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        run(
            dir.path(),
            ConfigAction::Set("sync-interval".to_string(), "60".to_string()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("sync-interval".to_string())).unwrap();
        assert!(result.messages[0].content.contains("60"));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("bogus".to_string())).is_err());
    }
}
