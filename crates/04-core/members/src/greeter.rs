//! 问候组件

use crate::config::GreeterConfig;
use infrastructure_common::{Component, ConfigError, Configurable};

/// 未提供名称时使用的默认名称
pub const DEFAULT_NAME: &str = "no name";

const GREETING_PREFIX: &str = "Hello ";

/// 问候组件
///
/// 名称参数接受 `&str` 或 `Option<&str>`，`None` 视为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Greeter {
    age: i32,
}

impl Greeter {
    /// 创建 `age` 为 0 的实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建指定 `age` 的实例
    pub fn with_age(age: i32) -> Self {
        Self { age }
    }

    /// 由配置创建实例
    pub fn from_config(config: GreeterConfig) -> Self {
        Self::with_age(config.age)
    }

    /// 当前年龄
    pub fn age(&self) -> i32 {
        self.age
    }

    /// 替换年龄，只影响当前实例
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// 返回 `"Hello " + name`
    pub fn greet<'a>(&self, name: impl Into<Option<&'a str>>) -> String {
        let name = name.into().unwrap_or_default();
        let mut greeting = String::with_capacity(GREETING_PREFIX.len() + name.len());
        greeting.push_str(GREETING_PREFIX);
        greeting.push_str(name);
        greeting
    }

    /// 返回 `greet("no name") + " " + age`
    pub fn greet_with_default_name(&self) -> String {
        self.greet_with_name(DEFAULT_NAME)
    }

    /// 返回 `greet(name) + " " + age`
    pub fn greet_with_name<'a>(&self, name: impl Into<Option<&'a str>>) -> String {
        format!("{} {}", self.greet(name), self.age)
    }
}

impl Component for Greeter {
    const NAME: &'static str = "greeter";
}

impl Configurable for Greeter {
    type Config = GreeterConfig;

    fn configure(&mut self, config: Self::Config) -> Result<(), ConfigError> {
        self.age = config.age;
        Ok(())
    }

    fn get_config_path() -> &'static str {
        "members.greeter"
    }
}
