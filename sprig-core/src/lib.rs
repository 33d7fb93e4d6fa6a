// sprig-core: 一个最小的控制反转容器
//
// 提供：
// - 基于命名空间的组件扫描
// - 单例（可延迟）和原型作用域
// - BeanNameAware / InitializingBean 生命周期回调
// - BeanPostProcessor 管线

pub mod app;
pub mod bean;
pub mod bean_factory;
pub mod component;
pub mod config;
pub mod constants;
pub mod context;
pub mod discovery;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod registry;
pub mod scope;
pub mod singleton;
pub mod utils;

// 重新导出常用类型
pub use app::SprigApplication;
pub use bean::{construct_default, downcast_arc, Bean, BeanConstructor, BeanDefinition, BeanType};
pub use bean_factory::{BeanFactory, BeanFactoryExt, ListableBeanFactory};
pub use component::{Capabilities, ComponentRegistration};
pub use config::{ComponentScan, ContainerConfig, LifecycleSettings};
pub use constants::*;
pub use context::ApplicationContext;
pub use discovery::{ComponentDiscovery, InventoryDiscovery, StaticDiscovery, TypeDescriptor};
pub use error::{
    ApplicationError, ApplicationResult, ContainerError, ContainerResult, Diagnostic, Result,
};
pub use lifecycle::{BeanNameAware, BeanPostProcessor, InitializingBean, LifecyclePhase};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use registry::BeanDefinitionRegistry;
pub use scope::Scope;
pub use singleton::SingletonPool;

// 导出 inventory，供宏使用
pub use inventory;

/// Prelude 模块，包含常用的 traits 和类型
pub mod prelude {
    pub use crate::app::SprigApplication;
    pub use crate::bean::{Bean, BeanDefinition, BeanType};
    pub use crate::bean_factory::{BeanFactory, BeanFactoryExt, ListableBeanFactory};
    pub use crate::config::{ComponentScan, ContainerConfig};
    pub use crate::context::ApplicationContext;
    pub use crate::discovery::{ComponentDiscovery, InventoryDiscovery, StaticDiscovery};
    pub use crate::error::{ContainerError, ContainerResult, Result};
    pub use crate::lifecycle::{BeanNameAware, BeanPostProcessor, InitializingBean};
    pub use crate::logging::{LogFormat, LogLevel, LoggingConfig};
    pub use crate::scope::Scope;
    pub use crate::utils;
    // Re-export anyhow for convenience
    pub use anyhow::{anyhow, Context};
}
