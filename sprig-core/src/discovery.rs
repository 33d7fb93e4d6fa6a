//! 组件发现
//!
//! 容器只依赖 [`ComponentDiscovery`] 接口，不关心候选类型如何被枚举。
//! 内置两种实现：
//!
//! - [`InventoryDiscovery`]：读取 `#[derive(Component)]` 在链接期提交的注册表
//! - [`StaticDiscovery`]：手工维护的描述符清单

use crate::bean::{Bean, BeanType};
use crate::component::{Capabilities, ComponentRegistration};
use crate::utils::naming::{namespace_matches, namespace_of, normalize_namespace};

/// 候选类型描述符
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// 可构造的类型
    pub bean_type: BeanType,

    /// 类型所在的命名空间（模块路径）
    pub namespace: String,

    /// 是否带有 component 标记
    pub component: bool,

    /// 声明的名称，可能为空
    pub declared_name: String,

    /// 声明的作用域字符串
    pub declared_scope: Option<String>,

    /// 是否声明为延迟初始化
    pub lazy: bool,

    pub capabilities: Capabilities,
}

impl TypeDescriptor {
    /// 创建带 component 标记、无其他声明的描述符
    pub fn new(bean_type: BeanType, namespace: impl Into<String>) -> Self {
        Self {
            bean_type,
            namespace: namespace.into(),
            component: true,
            declared_name: String::new(),
            declared_scope: None,
            lazy: false,
            capabilities: Capabilities::NONE,
        }
    }

    /// 以 `Default` 为构造路径描述类型 `T`，命名空间取自类型路径
    pub fn of<T: Bean + Default>() -> Self {
        let bean_type = BeanType::of::<T>();
        let namespace = namespace_of(bean_type.type_name());
        Self::new(bean_type, namespace)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.declared_name = name.into();
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.declared_scope = Some(scope.into());
        self
    }

    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// 去掉 component 标记
    pub fn unmarked(mut self) -> Self {
        self.component = false;
        self
    }

    /// 解析后的 Bean 名称：声明值，否则为类型的简单名称
    pub fn bean_name(&self) -> String {
        let declared = self.declared_name.trim();
        if declared.is_empty() {
            self.bean_type.simple_name().to_string()
        } else {
            declared.to_string()
        }
    }
}

/// 组件发现器
///
/// 给定根命名空间，返回其下的候选类型。无法解析的命名空间
/// 返回空序列，而不是错误。
pub trait ComponentDiscovery: Send + Sync {
    fn discover<'a>(&'a self, root_namespace: &str)
        -> Box<dyn Iterator<Item = TypeDescriptor> + 'a>;

    /// 获取发现器名称
    fn name(&self) -> &str {
        "ComponentDiscovery"
    }
}

/// 基于 inventory 注册表的组件发现
///
/// 结果按类型名排序，保证同一个二进制内的发现顺序稳定
#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryDiscovery;

impl InventoryDiscovery {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentDiscovery for InventoryDiscovery {
    fn discover<'a>(
        &'a self,
        root_namespace: &str,
    ) -> Box<dyn Iterator<Item = TypeDescriptor> + 'a> {
        let root = normalize_namespace(root_namespace);

        let mut registrations: Vec<&'static ComponentRegistration> = Vec::new();
        for registration in inventory::iter::<ComponentRegistration> {
            if namespace_matches(registration.namespace, &root) {
                registrations.push(registration);
            }
        }
        registrations.sort_by_key(|registration| registration.type_name);

        tracing::trace!(
            "Inventory discovery found {} candidate(s) under '{}'",
            registrations.len(),
            root
        );

        Box::new(registrations.into_iter().map(ComponentRegistration::descriptor))
    }

    fn name(&self) -> &str {
        "InventoryDiscovery"
    }
}

/// 手工维护的组件清单
///
/// 按加入顺序返回匹配的描述符
#[derive(Debug, Default, Clone)]
pub struct StaticDiscovery {
    descriptors: Vec<TypeDescriptor>,
}

impl StaticDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, descriptor: TypeDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn add(&mut self, descriptor: TypeDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for StaticDiscovery {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

impl ComponentDiscovery for StaticDiscovery {
    fn discover<'a>(
        &'a self,
        root_namespace: &str,
    ) -> Box<dyn Iterator<Item = TypeDescriptor> + 'a> {
        let root = normalize_namespace(root_namespace);
        Box::new(
            self.descriptors
                .iter()
                .filter(move |descriptor| namespace_matches(&descriptor.namespace, &root))
                .cloned(),
        )
    }

    fn name(&self) -> &str {
        "StaticDiscovery"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Alpha;

    impl Bean for Alpha {}

    fn manifest() -> StaticDiscovery {
        StaticDiscovery::new()
            .with(TypeDescriptor::new(BeanType::of::<Alpha>(), "app::beans"))
            .with(
                TypeDescriptor::new(BeanType::of::<Alpha>(), "app::beans::nested").named("nested"),
            )
            .with(TypeDescriptor::new(BeanType::of::<Alpha>(), "other"))
    }

    #[test]
    fn test_static_discovery_filters_by_namespace() {
        let discovery = manifest();
        let names: Vec<String> = discovery
            .discover("app::beans")
            .map(|descriptor| descriptor.bean_name())
            .collect();
        assert_eq!(names, vec!["Alpha".to_string(), "nested".to_string()]);

        assert_eq!(discovery.discover("app.beans.nested").count(), 1);
        assert_eq!(discovery.discover("other").count(), 1);
    }

    #[test]
    fn test_unresolvable_namespace_yields_nothing() {
        let discovery = manifest();
        assert_eq!(discovery.discover("does::not::exist").count(), 0);
        assert_eq!(discovery.discover("").count(), 0);
    }

    #[test]
    fn test_descriptor_of_uses_type_path() {
        let descriptor = TypeDescriptor::of::<Alpha>();
        assert!(descriptor.component);
        assert!(descriptor.namespace.ends_with("discovery::tests"));
        assert_eq!(descriptor.bean_name(), "Alpha");
        assert_eq!(descriptor.named("  ").bean_name(), "Alpha");
    }

    #[test]
    fn test_inventory_discovery_ignores_unknown_namespace() {
        let discovery = InventoryDiscovery::new();
        assert_eq!(discovery.discover("no_such_crate::anywhere").count(), 0);
    }
}
