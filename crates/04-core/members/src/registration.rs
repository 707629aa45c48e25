//! 组件注册

use crate::config::GreeterConfig;
use crate::greeter::Greeter;
use di_abstractions::ComponentRegistry;
use infrastructure_common::{DependencyResult, Lifetime};
use tracing::info;

/// 将本 crate 的组件注册到容器
///
/// [`Greeter`] 以原型生命周期注册，每次解析都由 `config` 构造新实例
pub async fn register_members<R>(registry: &mut R, config: GreeterConfig) -> DependencyResult<()>
where
    R: ComponentRegistry,
{
    info!("注册示例组件: greeter (age = {})", config.age);
    registry
        .register_factory(move || Ok(Greeter::from_config(config)), Lifetime::Prototype)
        .await
}
