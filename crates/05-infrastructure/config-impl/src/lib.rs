//! # Configuration Implementation
//!
//! 基于 `config` crate 的分层配置绑定。
//!
//! ## 主要组件
//!
//! - [`TypedConfigBinderImpl`] - 类型化配置绑定器，按 "文件 -> 环境变量" 的顺序叠加配置源

pub mod binder;

pub use binder::*;
