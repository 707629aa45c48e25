//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册和解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 组件注册表接口
//! - [`ComponentRegistration`] - 组件注册信息

pub mod registry;

pub use registry::*;
