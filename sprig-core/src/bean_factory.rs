//! Bean Factory - 容器的只读访问接口
//!
//! 需要查找 Bean 的代码应当依赖这些 trait 并通过引用拿到容器，
//! 而不是访问全局状态。

use std::sync::Arc;

use crate::bean::{downcast_arc, Bean};

/// BeanFactory - 最基础的容器接口
///
/// 注意：此 trait 不包含泛型方法，因此可以作为 trait object 使用
pub trait BeanFactory: Send + Sync {
    /// 通过名称获取 Bean
    ///
    /// 名称为空、未注册或创建失败时返回 `None`，从不 panic
    fn get_bean(&self, name: &str) -> Option<Arc<dyn Bean>>;

    /// 检查是否包含指定名称的 Bean 定义
    fn contains_bean(&self, name: &str) -> bool;
}

/// BeanFactoryExt - BeanFactory 的扩展 trait
///
/// 提供泛型方法，不能作为 trait object 使用
pub trait BeanFactoryExt: BeanFactory {
    /// 通过名称获取 Bean 并转换为具体类型，类型不匹配时返回 `None`
    fn get_bean_as<T: Bean>(&self, name: &str) -> Option<Arc<T>> {
        let bean = self.get_bean(name)?;
        let typed = downcast_arc::<T>(bean);
        if typed.is_none() {
            tracing::debug!(
                "Bean '{}' is not of requested type '{}'",
                name,
                std::any::type_name::<T>()
            );
        }
        typed
    }
}

impl<F: BeanFactory + ?Sized> BeanFactoryExt for F {}

/// ListableBeanFactory - 可列举的 Bean 工厂
pub trait ListableBeanFactory: BeanFactory {
    /// 获取所有 Bean 定义的名称
    fn bean_names(&self) -> Vec<String>;

    /// 获取 Bean 定义的数量
    fn bean_definition_count(&self) -> usize;
}
