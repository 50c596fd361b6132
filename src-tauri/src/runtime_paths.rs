use std::{env, path::PathBuf};

use crate::{DEFAULT_ROOT_DIR_NAME, ROOT_DIR_ENV};

pub fn default_root_dir() -> Option<PathBuf> {
    root_dir_from(env::var(ROOT_DIR_ENV).ok(), home::home_dir())
}

fn root_dir_from(env_override: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(raw) = env_override {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(DEFAULT_ROOT_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::root_dir_from;

    #[test]
    fn root_dir_from_prefers_env_override() {
        assert_eq!(
            root_dir_from(Some(" /data/chlorine ".to_string()), Some(PathBuf::from("/home/me"))),
            Some(PathBuf::from("/data/chlorine"))
        );
    }

    #[test]
    fn root_dir_from_ignores_blank_override() {
        assert_eq!(
            root_dir_from(Some("   ".to_string()), Some(PathBuf::from("/home/me"))),
            Some(PathBuf::from("/home/me").join(".chlorine"))
        );
    }

    #[test]
    fn root_dir_from_returns_none_without_home() {
        assert_eq!(root_dir_from(None, None), None);
    }
}
