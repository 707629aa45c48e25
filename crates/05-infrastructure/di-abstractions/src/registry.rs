//! 组件注册表抽象接口

use async_trait::async_trait;
use infrastructure_common::{Component, ComponentDescriptor, DependencyError, Lifetime};
use std::any::{Any, TypeId};
use std::sync::Arc;

/// 组件注册表 trait
///
/// 提供组件注册和解析的核心接口
#[async_trait]
pub trait ComponentRegistry: Send + Sync {
    /// 注册组件实例（单例）
    async fn register_instance<T>(&mut self, instance: T) -> Result<(), DependencyError>
    where
        T: Component;

    /// 注册组件工厂
    async fn register_factory<T, F>(
        &mut self,
        factory: F,
        lifetime: Lifetime,
    ) -> Result<(), DependencyError>
    where
        T: Component,
        F: Fn() -> Result<T, DependencyError> + Send + Sync + 'static;

    /// 解析组件
    ///
    /// 单例组件返回共享实例，原型组件每次返回新实例
    async fn resolve<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: Component;

    /// 创建独占的原型组件实例
    ///
    /// 仅适用于原型组件，单例组件返回 [`DependencyError::ScopeMismatch`]
    async fn create<T>(&self) -> Result<T, DependencyError>
    where
        T: Component;

    /// 检查组件是否已注册
    fn is_registered<T>(&self) -> bool
    where
        T: 'static;

    /// 检查组件是否已注册（通过 TypeId）
    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool;

    /// 获取所有已注册的组件描述符
    fn get_registered_components(&self) -> Vec<ComponentDescriptor>;

    /// 清理已注册的组件
    async fn clear(&mut self) -> Result<(), DependencyError>;
}

/// 类型擦除后的组件工厂函数
pub type ComponentFactoryFn =
    Arc<dyn Fn() -> Result<Box<dyn Any + Send + Sync>, DependencyError> + Send + Sync>;

/// 将强类型工厂包装为类型擦除的工厂
pub fn erase_factory<T, F>(factory: F) -> ComponentFactoryFn
where
    T: Component,
    F: Fn() -> Result<T, DependencyError> + Send + Sync + 'static,
{
    Arc::new(move || factory().map(|component| Box::new(component) as Box<dyn Any + Send + Sync>))
}

/// 组件注册信息
#[derive(Clone)]
pub struct ComponentRegistration {
    /// 组件描述符
    pub descriptor: ComponentDescriptor,
    /// 组件工厂，直接注册实例时为空
    pub factory: Option<ComponentFactoryFn>,
}

impl ComponentRegistration {
    /// 以工厂方式注册
    pub fn with_factory(descriptor: ComponentDescriptor, factory: ComponentFactoryFn) -> Self {
        Self {
            descriptor,
            factory: Some(factory),
        }
    }

    /// 以实例方式注册
    pub fn with_instance(descriptor: ComponentDescriptor) -> Self {
        Self {
            descriptor,
            factory: None,
        }
    }

    /// 组件生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.descriptor.lifetime
    }
}

impl std::fmt::Debug for ComponentRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistration")
            .field("descriptor", &self.descriptor)
            .field("factory", &self.factory.as_ref().map(|_| "<function>"))
            .finish()
    }
}
