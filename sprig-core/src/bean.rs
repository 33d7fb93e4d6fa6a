use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{ContainerError, ContainerResult};
use crate::lifecycle::{BeanNameAware, BeanPostProcessor, InitializingBean};
use crate::utils::naming::simple_type_name;
use crate::Scope;

/// 类型擦除辅助 trait，为所有 `'static + Send + Sync` 类型自动实现
pub trait AsAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Bean trait - 所有可以被容器管理的类型都需要实现此 trait
///
/// 生命周期能力（BeanNameAware / InitializingBean / BeanPostProcessor）
/// 通过下面的访问方法暴露，容器据此做类型安全的能力检查。
/// 通常由 `#[derive(Component)]` 生成实现。
///
/// # 示例
///
/// ```
/// use sprig_core::prelude::*;
///
/// #[derive(Default)]
/// struct Greeter {
///     name: String,
/// }
///
/// impl BeanNameAware for Greeter {
///     fn set_bean_name(&mut self, name: &str) {
///         self.name = name.to_string();
///     }
/// }
///
/// impl Bean for Greeter {
///     fn as_bean_name_aware(&mut self) -> Option<&mut dyn BeanNameAware> {
///         Some(self)
///     }
/// }
/// ```
pub trait Bean: AsAny {
    /// 实现了 BeanNameAware 时返回自身
    fn as_bean_name_aware(&mut self) -> Option<&mut dyn BeanNameAware> {
        None
    }

    /// 实现了 InitializingBean 时返回自身
    fn as_initializing_bean(&mut self) -> Option<&mut dyn InitializingBean> {
        None
    }

    /// 实现了 BeanPostProcessor 时转换为处理器
    fn into_post_processor(self: Box<Self>) -> Option<Box<dyn BeanPostProcessor>> {
        None
    }
}

impl dyn Bean {
    pub fn is<T: Bean>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Bean>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Bean>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bean")
    }
}

/// 将共享的 Bean 向下转型为具体类型
pub fn downcast_arc<T: Bean>(bean: Arc<dyn Bean>) -> Option<Arc<T>> {
    bean.into_any_arc().downcast::<T>().ok()
}

/// 无参构造函数
pub type BeanConstructor = fn() -> ContainerResult<Box<dyn Bean>>;

/// 通过 `Default` 构造 Bean，可直接作为 [`BeanConstructor`] 使用
pub fn construct_default<T: Bean + Default>() -> ContainerResult<Box<dyn Bean>> {
    Ok(Box::new(T::default()))
}

/// 可构造的 Bean 类型：类型名 + 可选的无参构造函数
#[derive(Clone, Copy)]
pub struct BeanType {
    type_name: &'static str,
    constructor: Option<BeanConstructor>,
}

impl BeanType {
    pub const fn new(type_name: &'static str, constructor: BeanConstructor) -> Self {
        Self {
            type_name,
            constructor: Some(constructor),
        }
    }

    /// 没有无参构造路径的类型，实例化时总会失败
    pub const fn without_constructor(type_name: &'static str) -> Self {
        Self {
            type_name,
            constructor: None,
        }
    }

    /// 使用 `Default` 作为构造路径
    pub fn of<T: Bean + Default>() -> Self {
        Self::new(std::any::type_name::<T>(), construct_default::<T>)
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn simple_name(&self) -> &'static str {
        simple_type_name(self.type_name)
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// 调用无参构造函数创建新实例
    pub fn instantiate(&self) -> ContainerResult<Box<dyn Bean>> {
        let constructor = self
            .constructor
            .ok_or_else(|| ContainerError::NoDefaultConstructor(self.type_name.to_string()))?;

        constructor().map_err(|e| ContainerError::InstantiationFailed {
            type_name: self.type_name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanType")
            .field("type_name", &self.type_name)
            .field("has_constructor", &self.has_constructor())
            .finish()
    }
}

/// Bean 定义 - 描述如何创建和管理 Bean
///
/// 注册后不再修改
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    /// Bean 的名称
    pub name: String,

    /// 要实例化的类型
    pub bean_type: BeanType,

    /// Bean 的作用域
    pub scope: Scope,

    /// 是否延迟初始化（仅对单例有效）
    pub lazy: bool,
}

impl BeanDefinition {
    /// 创建新的 Bean 定义（单例、非延迟）
    pub fn new(name: impl Into<String>, bean_type: BeanType) -> Self {
        Self {
            name: name.into(),
            bean_type,
            scope: Scope::default(),
            lazy: false,
        }
    }

    /// 设置作用域
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// 设置延迟初始化
    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn is_singleton(&self) -> bool {
        self.scope == Scope::Singleton
    }

    pub fn is_prototype(&self) -> bool {
        self.scope == Scope::Prototype
    }

    /// 是否需要在启动时预先实例化
    pub fn is_eager_singleton(&self) -> bool {
        self.is_singleton() && !self.lazy
    }
}
