use crate::commands::{CmdMessage, CmdResult, DeckPaths};
use crate::config::DeckConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &DeckPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = DeckConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DeckConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DeckConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn paths(dir: &tempfile::TempDir) -> DeckPaths {
        DeckPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show_key() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(
            &paths,
            ConfigAction::Set("concurrency".into(), "2".into()),
        )
        .unwrap();
        assert_eq!(result.config.map(|c| c.concurrency), Some(2));

        let result = run(&paths, ConfigAction::ShowKey("concurrency".into())).unwrap();
        assert_eq!(result.messages[0].content, "2");
    }

    #[test]
    fn invalid_value_is_reported_and_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        let result = run(
            &paths,
            ConfigAction::Set("concurrency".into(), "zero".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(DeckConfig::default()));
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
