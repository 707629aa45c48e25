//! 原型作用域下问候组件的集成测试

use config_impl::TypedConfigBinderImpl;
use di_abstractions::ComponentRegistry;
use di_impl::DiContainerImpl;
use infrastructure_common::{Component, Configurable, Lifetime};
use sample_members::{register_members, Greeter, GreeterConfig};
use std::io::Write;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

async fn container_with(config: GreeterConfig) -> DiContainerImpl {
    init_test_logger();
    let mut container = DiContainerImpl::new();
    register_members(&mut container, config).await.unwrap();
    container
}

#[tokio::test]
async fn test_greeter_is_registered_as_prototype() {
    let container = container_with(GreeterConfig::default()).await;

    assert!(container.is_registered::<Greeter>());
    let components = container.get_registered_components();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "greeter");
    assert_eq!(components[0].name, Greeter::NAME);
    assert_eq!(components[0].lifetime, Lifetime::Prototype);
}

#[tokio::test]
async fn test_resolved_greeter_starts_at_zero() {
    let container = container_with(GreeterConfig::default()).await;

    let greeter = container.resolve::<Greeter>().await.unwrap();
    assert_eq!(greeter.greet("Foo"), "Hello Foo");
    assert_eq!(greeter.greet_with_name("Foo"), "Hello Foo 0");
    assert_eq!(greeter.greet_with_default_name(), "Hello no name 0");
}

#[tokio::test]
async fn test_each_resolution_is_a_new_instance() {
    let container = container_with(GreeterConfig::default()).await;

    let first = container.resolve::<Greeter>().await.unwrap();
    let second = container.resolve::<Greeter>().await.unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_mutating_one_instance_does_not_leak() {
    let container = container_with(GreeterConfig::default()).await;

    let mut greeter = container.create::<Greeter>().await.unwrap();
    let other = container.create::<Greeter>().await.unwrap();

    assert_eq!(greeter.greet_with_name("Bar"), "Hello Bar 0");
    greeter.set_age(10);
    assert_eq!(greeter.age(), 10);
    assert_eq!(greeter.greet_with_name("Bar"), "Hello Bar 10");

    assert_eq!(other.greet_with_name("Bar"), "Hello Bar 0");
    let fresh = container.resolve::<Greeter>().await.unwrap();
    assert_eq!(fresh.age(), 0);
}

#[tokio::test]
async fn test_configured_age_flows_into_instances() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[members.greeter]\nage = 7").unwrap();

    let binder = TypedConfigBinderImpl::empty().with_file(file.path()).unwrap();
    let config: GreeterConfig = binder.bind_or_default("members.greeter").unwrap();
    assert_eq!(config.age, 7);

    let container = container_with(config).await;
    let greeter = container.resolve::<Greeter>().await.unwrap();
    assert_eq!(greeter.greet_with_name("Bob"), "Hello Bob 7");
}

#[tokio::test]
async fn test_absent_section_binds_default_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[unrelated]\nvalue = true").unwrap();

    let binder = TypedConfigBinderImpl::empty().with_file(file.path()).unwrap();
    let mut greeter = Greeter::with_age(99);
    binder.bind_component(&mut greeter).unwrap();

    assert_eq!(greeter, Greeter::new());
    assert_eq!(greeter.greet_with_default_name(), "Hello no name 0");
}

#[tokio::test]
async fn test_default_binder_reads_age_from_environment() {
    std::env::set_var("SAMPLE__MEMBERS__GREETER__AGE", "21");

    let binder = TypedConfigBinderImpl::new();
    let config: GreeterConfig = binder
        .bind_or_default(Greeter::get_config_path())
        .unwrap();
    std::env::remove_var("SAMPLE__MEMBERS__GREETER__AGE");
    assert_eq!(config.age, 21);

    let container = container_with(config).await;
    let greeter = container.resolve::<Greeter>().await.unwrap();
    assert_eq!(greeter.greet_with_default_name(), "Hello no name 21");
}
