//! 配置加载
//!
//! 从 `~/.config/beerlist/config.toml` 读取，文件不存在时使用默认值。
//! 环境变量 `BEERLIST_CONFIG` 可指定其他路径。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

const CONFIG_ENV: &str = "BEERLIST_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 列表面板标题
    pub title: String,
    /// tracing 过滤指令，`RUST_LOG` 优先
    pub log_level: String,
    /// 日志文件路径，缺省写入数据目录
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Beers".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// 从指定路径加载配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 配置文件路径：`BEERLIST_CONFIG` 或 `<config_dir>/beerlist/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("beerlist").join("config.toml"))
}
