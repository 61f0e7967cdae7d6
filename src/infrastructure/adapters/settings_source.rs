//! 설정 소스 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Settings;
use crate::application::ports::SettingsSource;
use crate::infrastructure::config;

/// 프로세스 환경변수 기반 설정 소스 어댑터.
pub struct EnvSettingsSource;

impl SettingsSource for EnvSettingsSource {
    fn load(&self) -> Result<Settings> {
        config::load_settings_from_env()
    }
}
