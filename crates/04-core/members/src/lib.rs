//! # Sample Members
//!
//! 问候组件示例：持有一个整数属性 `age`，提供三个字符串格式化操作。
//!
//! 组件通过 [`register_members`] 以原型生命周期注册到容器，
//! 每次解析都会得到独立的新实例。
//!
//! ```
//! use sample_members::Greeter;
//!
//! let greeter = Greeter::new();
//! assert_eq!(greeter.greet_with_name("Alice"), "Hello Alice 0");
//! ```

pub mod config;
pub mod greeter;
pub mod registration;

pub use config::GreeterConfig;
pub use greeter::Greeter;
pub use registration::register_members;
