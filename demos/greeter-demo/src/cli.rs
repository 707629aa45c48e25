//! 命令行参数与配置解析

use clap::Parser;
use config_impl::TypedConfigBinderImpl;
use infrastructure_common::{Configurable, InfrastructureError};
use sample_members::{Greeter, GreeterConfig};
use std::path::PathBuf;
use tracing::debug;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "greeter-demo")]
#[command(about = "解析问候组件并输出问候语")]
pub struct Args {
    /// 问候的名称，省略时只输出默认名称的问候
    #[arg(short, long)]
    pub name: Option<String>,

    /// 覆盖配置中的年龄
    #[arg(short, long, allow_negative_numbers = true)]
    pub age: Option<i32>,

    /// 配置文件路径（TOML / JSON / YAML）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 日志级别
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// 按命令行参数构建配置绑定器
fn build_binder(args: &Args) -> Result<TypedConfigBinderImpl, InfrastructureError> {
    match &args.config {
        Some(path) => Ok(TypedConfigBinderImpl::new().with_file(path)?),
        None => Ok(TypedConfigBinderImpl::new()),
    }
}

/// 解析最终生效的组件配置，命令行年龄优先于配置文件
pub fn resolve_config(args: &Args) -> Result<GreeterConfig, InfrastructureError> {
    let binder = build_binder(args)?;
    let mut config: GreeterConfig = binder.bind_or_default(Greeter::get_config_path())?;

    if let Some(age) = args.age {
        debug!("命令行覆盖年龄: {} -> {}", config.age, age);
        config.age = age;
    }

    Ok(config)
}
