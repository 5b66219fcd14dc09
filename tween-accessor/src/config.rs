//! # Config 模块
//!
//! 数据驱动的颜色访问器绑定配置。
//!
//! ```json
//! { "channels": "rgba", "label": "fade_panel" }
//! ```
//!
//! 所有字段都有默认值，缺省时绑定透明度通道。

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Weak;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Color;
use crate::color_accessor::{ColorAccessor, ColorChannels};
use crate::error::{AccessorResult, ConfigError};

/// 颜色访问器绑定配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// 暴露的颜色分量
    #[serde(default)]
    pub channels: ColorChannels,

    /// 调试标签
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BindingConfig {
    /// 从 JSON 文本解析
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::Parse)
    }

    /// 从文件加载配置
    ///
    /// 文件不存在、读取或解析失败时使用默认配置。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "绑定配置不存在，使用默认配置");
            return Self::default();
        }

        let result = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|content| Self::from_json(&content));
        match result {
            Ok(config) => {
                debug!(path = %path.display(), "绑定配置加载成功");
                config
            }
            Err(e) => {
                warn!(error = %e, "绑定配置加载失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 按配置绑定颜色目标
    pub fn bind(&self, target: &Weak<RefCell<Color>>) -> AccessorResult<ColorAccessor> {
        if let Some(label) = &self.label {
            debug!(label = %label, "按配置绑定颜色目标");
        }
        ColorAccessor::new(target, self.channels)
    }
}
