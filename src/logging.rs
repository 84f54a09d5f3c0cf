//! 日志初始化
//!
//! 终端被 UI 占用，日志只写文件。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;
use crate::error::AppError;

/// 获取数据目录路径 (~/.local/share/beerlist/)
pub fn data_dir() -> Result<PathBuf, AppError> {
    let dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join("beerlist");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 安装全局 tracing subscriber，返回日志文件路径
pub fn init(config: &Config) -> Result<PathBuf, AppError> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => data_dir()?.join("beerlist.log"),
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
        .try_init()?;

    Ok(path)
}

/// 解析配置中的 log_level
fn config_filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directive).map_err(|source| AppError::LogFilter {
        directive: directive.to_string(),
        source,
    })
}
