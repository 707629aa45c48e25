//! 问候组件配置

use serde::{Deserialize, Serialize};

/// 问候组件配置，对应配置路径 `members.greeter`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// 初始年龄
    pub age: i32,
}
