//! Bean 生命周期能力
//!
//! 容器在创建 Bean 时按固定顺序回调这些 trait：
//!
//! 1. 实例化（无参构造函数）
//! 2. `BeanPostProcessor::post_process_before_initialization`（按发现顺序）
//! 3. `BeanNameAware::set_bean_name`
//! 4. `InitializingBean::after_properties_set`
//! 5. `BeanPostProcessor::post_process_after_initialization`（默认关闭，见 `ContainerConfig`）

use std::fmt;

use crate::bean::Bean;
use crate::error::ContainerResult;

/// 感知自身 Bean 名称
///
/// 这是 Bean 获知自己注册名称的唯一内置途径
pub trait BeanNameAware {
    fn set_bean_name(&mut self, name: &str);
}

/// 初始化回调，类似 Spring 的 afterPropertiesSet
///
/// 返回的错误只会被记录，不会阻止 Bean 被返回
pub trait InitializingBean {
    fn after_properties_set(&mut self) -> ContainerResult<()>;
}

/// BeanPostProcessor trait
///
/// 在 Bean 初始化的不同阶段提供钩子。钩子作用于同一个实例，
/// 可以修改其状态（例如填充字段、记录日志），但不能替换实例本身。
///
/// 处理器由组件扫描发现，按发现顺序执行，没有优先级机制；
/// 处理器自身不会注册为 Bean，也不会经过其他处理器。
///
/// # 示例
///
/// ```
/// use sprig_core::prelude::*;
///
/// #[derive(Default)]
/// struct LoggingBeanPostProcessor;
///
/// impl BeanPostProcessor for LoggingBeanPostProcessor {
///     fn post_process_before_initialization(
///         &self,
///         _bean: &mut dyn Bean,
///         bean_name: &str,
///     ) -> ContainerResult<()> {
///         println!("Before initialization: {}", bean_name);
///         Ok(())
///     }
/// }
///
/// impl Bean for LoggingBeanPostProcessor {
///     fn into_post_processor(self: Box<Self>) -> Option<Box<dyn BeanPostProcessor>> {
///         Some(self)
///     }
/// }
/// ```
pub trait BeanPostProcessor: Send + Sync {
    /// 在 BeanNameAware / InitializingBean 回调之前调用
    fn post_process_before_initialization(
        &self,
        _bean: &mut dyn Bean,
        _bean_name: &str,
    ) -> ContainerResult<()> {
        Ok(())
    }

    /// 在 InitializingBean 回调之后调用
    ///
    /// 只有 `ContainerConfig::apply_after_initialization` 打开时才会被调用
    fn post_process_after_initialization(
        &self,
        _bean: &mut dyn Bean,
        _bean_name: &str,
    ) -> ContainerResult<()> {
        Ok(())
    }

    /// 获取处理器的名称（用于日志和诊断）
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Bean 生命周期阶段，用于诊断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// 组件扫描 / 注册
    Scan,
    /// 调用无参构造函数
    Instantiation,
    /// BeanPostProcessor 前置处理
    BeforeInitialization,
    /// InitializingBean 回调
    Initialization,
    /// BeanPostProcessor 后置处理
    AfterInitialization,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            LifecyclePhase::Scan => "scan",
            LifecyclePhase::Instantiation => "instantiation",
            LifecyclePhase::BeforeInitialization => "before-initialization",
            LifecyclePhase::Initialization => "initialization",
            LifecyclePhase::AfterInitialization => "after-initialization",
        };
        f.write_str(phase)
    }
}
