//! 负责处理解码器的持久化配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    error::{FeedError, Result},
    model::timestamp::TimestampFormat,
};

const CONFIG_FILE_NAME: &str = "feed_decoder.json";

/// 解码器配置。
///
/// 不同接口返回的时间戳格式不同，因此分别配置。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DecoderConfig {
    /// 动态流帖子 `created_at` 的格式。
    pub post_timestamp: TimestampFormat,
    /// 播放历史 `played_at` 的格式。
    pub history_timestamp: TimestampFormat,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            post_timestamp: TimestampFormat::Iso8601,
            history_timestamp: TimestampFormat::EpochSeconds,
        }
    }
}

/// 获取应用配置目录下指定文件的完整路径。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "feed_decoder.json"。
pub(crate) fn get_config_file_path(filename: &str) -> Result<PathBuf> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push("soundcloud-feed");
        fs::create_dir_all(&config_dir)?;
        config_dir.push(filename);
        Ok(config_dir)
    } else {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "无法找到用户配置目录").into())
    }
}

/// 从用户配置目录加载解码器配置；文件不存在时创建并保存默认配置。
pub fn load_decoder_config() -> Result<DecoderConfig> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)?;
    load_decoder_config_from(&config_path)
}

/// 将解码器配置保存到用户配置目录。
pub fn save_decoder_config(config: &DecoderConfig) -> Result<()> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)?;
    save_decoder_config_to(config, &config_path)
}

/// 从指定文件加载解码器配置；文件不存在时创建并保存默认配置。
pub fn load_decoder_config_from(path: &Path) -> Result<DecoderConfig> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let config: DecoderConfig =
                serde_json::from_str(&content).map_err(|source| FeedError::Config {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("已从 {:?} 加载解码器配置。", path);
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("解码器配置文件不存在，将创建并保存默认配置。");
            let config = DecoderConfig::default();
            save_decoder_config_to(&config, path)?;
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

/// 将解码器配置序列化为 JSON 并保存到指定文件。
pub fn save_decoder_config_to(config: &DecoderConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config).map_err(|source| FeedError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content)?;
    info!("解码器配置已保存到 {:?}。", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "soundcloud_feed_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_file_creates_default() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let config = load_decoder_config_from(&path).unwrap();
        assert_eq!(config, DecoderConfig::default());
        assert!(path.exists(), "默认配置应被写入文件");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_saved_config_is_loaded_back() {
        let path = temp_path("saved");
        let config = DecoderConfig {
            post_timestamp: TimestampFormat::Legacy,
            history_timestamp: TimestampFormat::EpochMillis,
        };
        save_decoder_config_to(&config, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"post_timestamp\": \"legacy\""));
        assert_eq!(load_decoder_config_from(&path).unwrap(), config);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "post_timestamp": "epoch_seconds" }"#).unwrap();

        let config = load_decoder_config_from(&path).unwrap();
        assert_eq!(config.post_timestamp, TimestampFormat::EpochSeconds);
        assert_eq!(config.history_timestamp, TimestampFormat::EpochSeconds);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();

        let err = load_decoder_config_from(&path).unwrap_err();
        assert!(matches!(&err, FeedError::Config { path: p, .. } if p == &path));
        assert!(!err.is_structural());

        fs::remove_file(&path).unwrap();
    }
}
