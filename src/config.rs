//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TranscripaError;

/// Transcripa 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranscripaConfig {
    /// 규칙 로드 에러를 사용자에게 표시할지 여부
    #[serde(default = "default_show_errors")]
    pub show_errors: bool,
    /// 규칙 문서 경로
    #[serde(default = "default_rules_path")]
    pub rules_path: String,
    /// 마지막으로 사용한 언어
    #[serde(default)]
    pub language: Option<String>,
    /// 마지막으로 사용한 로마자 표기 프로필 인덱스
    #[serde(default)]
    pub profile: Option<usize>,
}

fn default_show_errors() -> bool {
    true
}

fn default_rules_path() -> String {
    "data/languages.json".to_string()
}

impl Default for TranscripaConfig {
    fn default() -> Self {
        Self {
            show_errors: default_show_errors(),
            rules_path: default_rules_path(),
            language: None,
            profile: None,
        }
    }
}

/// 설정 파일 경로: ~/.config/transcripa/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("transcripa").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TranscripaConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> TranscripaConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            TranscripaConfig::default()
        }),
        Err(_) => TranscripaConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &TranscripaConfig) -> Result<(), TranscripaError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리가 없으면 생성)
pub fn save_config_to(config: &TranscripaConfig, path: &Path) -> Result<(), TranscripaError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

impl TranscripaConfig {
    /// 마지막으로 사용한 언어/프로필 기록
    /// 값이 바뀌었으면 true
    pub fn remember_selection(&mut self, language: &str, profile: Option<usize>) -> bool {
        if self.language.as_deref() == Some(language) && self.profile == profile {
            return false;
        }
        self.language = Some(language.to_string());
        self.profile = profile;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranscripaConfig::default();
        assert!(config.show_errors);
        assert_eq!(config.rules_path, "data/languages.json");
        assert_eq!(config.language, None);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = TranscripaConfig {
            show_errors: false,
            rules_path: "/tmp/rules.json".into(),
            language: Some("Korean".into()),
            profile: Some(1),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TranscripaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 설정 파일에 show_errors/rules_path가 없는 경우 기본값 사용
        let json = r#"{"language": "Korean"}"#;
        let config: TranscripaConfig = serde_json::from_str(json).unwrap();
        assert!(config.show_errors);
        assert_eq!(config.rules_path, "data/languages.json");
        assert_eq!(config.language.as_deref(), Some("Korean"));
        assert_eq!(config.profile, None);
    }

    #[test]
    fn test_config_path_file_name() {
        assert!(config_path().ends_with("transcripa/config.json"));
    }

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("transcripa-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let path = temp_config_path("roundtrip");
        let mut config = TranscripaConfig::default();
        config.remember_selection("Russian", Some(0));

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path);
        assert_eq!(loaded.language.as_deref(), Some("Russian"));
        assert_eq!(loaded.profile, Some(0));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_or_broken_file_uses_default() {
        let path = temp_config_path("broken");
        assert_eq!(load_config_from(&path), TranscripaConfig::default());

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_config_from(&path), TranscripaConfig::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_remember_selection() {
        let mut config = TranscripaConfig::default();
        assert!(config.remember_selection("Korean", Some(1)));
        assert!(!config.remember_selection("Korean", Some(1)));
        assert!(config.remember_selection("Korean", None));
        assert_eq!(config.profile, None);
    }
}
