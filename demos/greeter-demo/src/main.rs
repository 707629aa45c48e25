//! # 问候组件演示程序
//!
//! 从容器解析原型作用域的问候组件并输出三种问候语

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{resolve_config, Args};
use di_abstractions::ComponentRegistry;
use di_impl::DiContainerImpl;
use infrastructure_common::InfrastructureError;
use sample_members::{register_members, Greeter};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).context("无效的日志级别")?,
        )
        .init();

    info!("启动问候组件演示程序");

    let config = resolve_config(&args)?;

    let mut container = DiContainerImpl::new();
    register_members(&mut container, config)
        .await
        .map_err(InfrastructureError::from)?;

    let greeter = container
        .resolve::<Greeter>()
        .await
        .map_err(InfrastructureError::from)?;

    println!("{}", greeter.greet_with_default_name());
    if let Some(name) = args.name.as_deref() {
        println!("{}", greeter.greet(name));
        println!("{}", greeter.greet_with_name(name));
    }

    info!("演示程序结束");
    Ok(())
}
