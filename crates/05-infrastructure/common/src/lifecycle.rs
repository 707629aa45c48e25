//! 组件生命周期

use std::fmt;

/// 组件生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifetime {
    /// 单例模式 - 首次解析后缓存，后续解析共享同一实例
    Singleton,
    /// 原型模式 - 每次解析都创建新实例
    #[default]
    Prototype,
}

impl Lifetime {
    /// 是否在容器中缓存实例
    pub fn is_cached(self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Prototype => f.write_str("prototype"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_prototype() {
        assert_eq!(Lifetime::default(), Lifetime::Prototype);
        assert!(!Lifetime::Prototype.is_cached());
        assert!(Lifetime::Singleton.is_cached());
        assert_eq!(Lifetime::Prototype.to_string(), "prototype");
    }
}
