//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::romanizer::{Romanizer, Style};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "ROMAJA_CONFIG";

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// romaja 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RomanizerConfig {
    /// 출력 형식 (hyphenated / compact)
    #[serde(default)]
    pub style: Style,
    /// 결과를 대괄호로 감싸 출력 ([an-nyeong])
    #[serde(default = "default_bracketed")]
    pub bracketed: bool,
    /// 한글 외 문자가 섞인 입력에 경고 로그 출력
    #[serde(default = "default_warn_non_korean")]
    pub warn_non_korean: bool,
}

fn default_bracketed() -> bool {
    false
}

fn default_warn_non_korean() -> bool {
    true
}

impl Default for RomanizerConfig {
    fn default() -> Self {
        Self {
            style: Style::default(),
            bracketed: default_bracketed(),
            warn_non_korean: default_warn_non_korean(),
        }
    }
}

impl RomanizerConfig {
    /// 설정에 맞는 변환기 생성
    pub fn romanizer(&self) -> Romanizer {
        Romanizer::new(self.style)
    }

    /// 변환 결과를 출력 형식에 맞게 감싸기
    pub fn format_output(&self, result: &str) -> String {
        if self.bracketed {
            format!("[{}]", result)
        } else {
            result.to_string()
        }
    }
}

/// 설정 파일 경로: $ROMAJA_CONFIG 또는 ~/.config/romaja/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(std::env::temp_dir);
    home.join(".config").join("romaja").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomanizerConfig {
    let path = config_path();
    if !path.exists() {
        return RomanizerConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|e| {
        log::warn!("설정 파일 로드 실패 ({}), 기본값 사용: {}", path.display(), e);
        RomanizerConfig::default()
    })
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<RomanizerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 저장
pub fn save_config(config: &RomanizerConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 생성 포함)
pub fn save_config_to(config: &RomanizerConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    log::info!("설정 저장: {}", path.display());
    Ok(())
}
