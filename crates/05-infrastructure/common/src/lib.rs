//! # Infrastructure Common
//!
//! 这个 crate 提供了示例组件基础设施层的公共 traits 和错误类型。
//!
//! ## 核心组件
//!
//! - [`Component`] - 组件基础 trait
//! - [`Configurable`] - 可配置组件 trait
//! - [`Lifetime`] - 组件生命周期（单例 / 原型）
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 显式构造替代注解驱动的实例化

pub mod component;
pub mod configuration;
pub mod errors;
pub mod lifecycle;

pub use component::*;
pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
