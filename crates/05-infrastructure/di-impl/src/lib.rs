//! # 依赖注入具体实现
//!
//! 提供支持单例和原型两种生命周期的组件容器

use async_trait::async_trait;
use di_abstractions::{erase_factory, ComponentRegistration, ComponentRegistry};
use infrastructure_common::{Component, ComponentDescriptor, DependencyError, Lifetime};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 具体的依赖注入容器实现
#[derive(Debug, Default)]
pub struct DiContainerImpl {
    /// 组件注册信息
    registrations: Arc<RwLock<HashMap<TypeId, ComponentRegistration>>>,
    /// 单例实例缓存
    singletons: Arc<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找注册信息的副本，避免在调用工厂期间持有锁
    async fn registration_of<T: Component>(&self) -> Result<ComponentRegistration, DependencyError> {
        let registrations = self.registrations.read().await;
        registrations
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or_else(DependencyError::not_registered::<T>)
    }

    /// 调用工厂创建新实例
    fn instantiate<T: Component>(registration: &ComponentRegistration) -> Result<Box<T>, DependencyError> {
        let factory = registration.factory.as_ref().ok_or_else(|| {
            DependencyError::ComponentCreationFailed {
                type_name: std::any::type_name::<T>().to_string(),
                source: "组件以实例方式注册，没有可用的工厂".into(),
            }
        })?;

        factory()?
            .downcast::<T>()
            .map_err(|_| DependencyError::type_mismatch::<T>())
    }
}

#[async_trait]
impl ComponentRegistry for DiContainerImpl {
    async fn register_instance<T>(&mut self, instance: T) -> Result<(), DependencyError>
    where
        T: Component,
    {
        let type_id = TypeId::of::<T>();
        let descriptor = ComponentDescriptor::of(&instance, Lifetime::Singleton);
        info!("注册单例实例: {} ({})", descriptor.name, descriptor.type_name);

        self.singletons
            .write()
            .await
            .insert(type_id, Arc::new(instance) as Arc<dyn Any + Send + Sync>);
        self.registrations
            .write()
            .await
            .insert(type_id, ComponentRegistration::with_instance(descriptor));

        Ok(())
    }

    async fn register_factory<T, F>(
        &mut self,
        factory: F,
        lifetime: Lifetime,
    ) -> Result<(), DependencyError>
    where
        T: Component,
        F: Fn() -> Result<T, DependencyError> + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        let descriptor = ComponentDescriptor::new::<T>(T::NAME, lifetime);
        info!("注册组件工厂: {} [{}]", descriptor.name, lifetime);

        // 重新注册时丢弃旧的单例缓存
        self.singletons.write().await.remove(&type_id);
        self.registrations.write().await.insert(
            type_id,
            ComponentRegistration::with_factory(descriptor, erase_factory(factory)),
        );

        Ok(())
    }

    async fn resolve<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: Component,
    {
        let type_id = TypeId::of::<T>();

        // 首先检查单例缓存
        if let Some(cached) = self.singletons.read().await.get(&type_id) {
            return cached
                .clone()
                .downcast::<T>()
                .map_err(|_| DependencyError::type_mismatch::<T>());
        }

        let registration = self.registration_of::<T>().await?;
        let instance: Arc<T> = Arc::from(Self::instantiate::<T>(&registration)?);
        debug!(
            "创建组件实例: {} [{}]",
            registration.descriptor.name,
            registration.lifetime()
        );

        if !registration.lifetime().is_cached() {
            return Ok(instance);
        }

        // 并发解析时以先写入缓存的实例为准
        let shared = self
            .singletons
            .write()
            .await
            .entry(type_id)
            .or_insert_with(|| instance as Arc<dyn Any + Send + Sync>)
            .clone();

        shared
            .downcast::<T>()
            .map_err(|_| DependencyError::type_mismatch::<T>())
    }

    async fn create<T>(&self) -> Result<T, DependencyError>
    where
        T: Component,
    {
        let registration = self.registration_of::<T>().await?;

        if registration.lifetime() != Lifetime::Prototype {
            return Err(DependencyError::ScopeMismatch {
                expected: Lifetime::Prototype.to_string(),
                actual: registration.lifetime().to_string(),
            });
        }

        debug!("创建独占组件实例: {}", registration.descriptor.name);
        Ok(*Self::instantiate::<T>(&registration)?)
    }

    fn is_registered<T>(&self) -> bool
    where
        T: 'static,
    {
        self.is_registered_by_type_id(TypeId::of::<T>())
    }

    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool {
        if let Ok(registrations) = self.registrations.try_read() {
            registrations.contains_key(&type_id)
        } else {
            false
        }
    }

    fn get_registered_components(&self) -> Vec<ComponentDescriptor> {
        if let Ok(registrations) = self.registrations.try_read() {
            registrations
                .values()
                .map(|reg| reg.descriptor.clone())
                .collect()
        } else {
            Vec::new()
        }
    }

    async fn clear(&mut self) -> Result<(), DependencyError> {
        info!("清理容器中的全部组件");
        self.singletons.write().await.clear();
        self.registrations.write().await.clear();
        Ok(())
    }
}
