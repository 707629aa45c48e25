//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置绑定失败: {path}, 原因: {source}")]
    BindError {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ComponentCreationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("组件类型不匹配: {type_name}")]
    TypeMismatch { type_name: String },

    #[error("作用域不匹配: 期望 {expected}, 实际 {actual}")]
    ScopeMismatch { expected: String, actual: String },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn not_registered<T: ?Sized>() -> Self {
        Self::ComponentNotRegistered {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch<T: ?Sized>() -> Self {
        Self::TypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
