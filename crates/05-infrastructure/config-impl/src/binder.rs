//! 类型化配置绑定器实现

use infrastructure_common::{ConfigError, ConfigResult, Configurable};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// 默认配置文件（不含扩展名）
pub const DEFAULT_CONFIG_FILE: &str = "config/app";

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "SAMPLE";

/// 默认环境变量层级分隔符
pub const DEFAULT_ENV_SEPARATOR: &str = "__";

/// 配置文件源
#[derive(Debug, Clone)]
struct FileSource {
    path: PathBuf,
    required: bool,
}

/// 类型化配置绑定器实现
///
/// 后添加的文件覆盖先添加的文件，环境变量覆盖所有文件
#[derive(Debug, Clone)]
pub struct TypedConfigBinderImpl {
    /// 配置文件源
    files: Vec<FileSource>,
    /// 环境变量前缀，为空时不读取环境变量
    env_prefix: Option<String>,
}

impl TypedConfigBinderImpl {
    /// 创建新的类型化配置绑定器
    ///
    /// 默认读取可选的 `config/app.*` 文件和 `SAMPLE__` 前缀的环境变量
    pub fn new() -> Self {
        Self::empty()
            .with_optional_file(DEFAULT_CONFIG_FILE)
            .with_env_prefix(DEFAULT_ENV_PREFIX)
    }

    /// 创建不含任何配置源的绑定器
    pub fn empty() -> Self {
        Self {
            files: Vec::new(),
            env_prefix: None,
        }
    }

    /// 添加必需的配置文件
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        debug!("添加配置文件: {}", path.display());
        self.files.push(FileSource {
            path: path.to_path_buf(),
            required: true,
        });
        Ok(self)
    }

    /// 添加可选的配置文件，不存在时忽略
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.files.push(FileSource {
            path: path.as_ref().to_path_buf(),
            required: false,
        });
        self
    }

    /// 设置环境变量前缀
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// 构建叠加后的配置
    fn build_settings(&self) -> ConfigResult<config::Config> {
        let mut builder = config::Config::builder();

        for file in &self.files {
            builder = builder.add_source(
                config::File::with_name(&file.path.to_string_lossy()).required(file.required),
            );
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator(DEFAULT_ENV_SEPARATOR)
                    .try_parsing(true),
            );
        }

        builder.build().map_err(|e| {
            error!("配置构建失败: {}", e);
            ConfigError::ParseError {
                source: Box::new(e),
            }
        })
    }

    /// 绑定配置到指定类型
    pub fn bind_configuration<T>(&self, path: &str) -> ConfigResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("绑定配置到类型: {} -> {}", path, std::any::type_name::<T>());

        let settings = self.build_settings()?;
        settings.get::<T>(path).map_err(|e| {
            error!("配置绑定失败: path={}, error={}", path, e);
            ConfigError::BindError {
                path: path.to_string(),
                source: Box::new(e),
            }
        })
    }

    /// 绑定配置到指定类型，配置节不存在时使用默认值
    pub fn bind_or_default<T>(&self, path: &str) -> ConfigResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let settings = self.build_settings()?;
        match settings.get::<T>(path) {
            Ok(value) => Ok(value),
            Err(config::ConfigError::NotFound(_)) => {
                debug!("配置节不存在，使用默认值: {}", path);
                Ok(T::default())
            }
            Err(e) => Err(ConfigError::BindError {
                path: path.to_string(),
                source: Box::new(e),
            }),
        }
    }

    /// 绑定配置到实例
    pub fn bind_to_instance<T>(&self, instance: &mut T, path: &str) -> ConfigResult<()>
    where
        T: Configurable,
    {
        debug!("绑定配置到实例: {} -> {}", path, std::any::type_name::<T>());
        let config: T::Config = self.bind_configuration(path)?;
        instance.configure(config)
    }

    /// 按组件声明的配置路径绑定，配置节不存在时应用默认配置
    pub fn bind_component<T>(&self, instance: &mut T) -> ConfigResult<()>
    where
        T: Configurable,
        T::Config: Default,
    {
        let config: T::Config = self.bind_or_default(T::get_config_path())?;
        instance.configure(config)
    }
}

impl Default for TypedConfigBinderImpl {
    fn default() -> Self {
        Self::new()
    }
}
