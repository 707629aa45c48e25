//! 组件基础接口定义
//!
//! 提供所有可注入组件必须实现的基础 trait

use crate::lifecycle::Lifetime;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt::Debug;

/// 组件基础 trait
///
/// 所有由容器管理的组件都必须实现此 trait
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件注册名称，按工厂注册时无需实例即可获取
    const NAME: &'static str;

    /// 组件名称
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// 组件优先级，数值越高优先级越高
    fn priority(&self) -> i32 {
        0
    }

    /// 组件是否启用
    fn is_enabled(&self) -> bool {
        true
    }
}

/// 组件描述符
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// 组件名称
    pub name: String,
    /// 组件类型ID
    pub type_id: TypeId,
    /// 组件完整类型名
    pub type_name: &'static str,
    /// 组件生命周期
    pub lifetime: Lifetime,
    /// 组件优先级
    pub priority: i32,
    /// 是否启用
    pub enabled: bool,
    /// 组件元数据
    pub metadata: HashMap<String, String>,
}

impl ComponentDescriptor {
    /// 创建新的组件描述符
    pub fn new<T: Component>(name: impl Into<String>, lifetime: Lifetime) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            lifetime,
            priority: 0,
            enabled: true,
            metadata: HashMap::new(),
        }
    }

    /// 从组件实例创建描述符
    pub fn of<T: Component>(instance: &T, lifetime: Lifetime) -> Self {
        Self::new::<T>(instance.name(), lifetime)
            .with_priority(instance.priority())
            .with_enabled(instance.is_enabled())
    }

    /// 设置优先级
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 设置启用状态
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// 添加元数据
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
