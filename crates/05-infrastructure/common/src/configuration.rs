//! 配置相关的基础接口定义

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// 可配置组件 trait
///
/// 需要配置的组件必须实现此 trait
pub trait Configurable: Send + Sync {
    /// 配置类型
    type Config: for<'de> Deserialize<'de> + Serialize + Clone + Send + Sync + 'static;

    /// 应用配置
    fn configure(&mut self, config: Self::Config) -> Result<(), ConfigError>;

    /// 获取配置路径
    fn get_config_path() -> &'static str;
}
