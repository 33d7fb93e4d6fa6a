use crate::bean::{BeanConstructor, BeanType};
use crate::discovery::TypeDescriptor;

/// 组件声明的生命周期能力
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// 实现了 BeanPostProcessor
    pub post_processor: bool,

    /// 实现了 BeanNameAware
    pub bean_name_aware: bool,

    /// 实现了 InitializingBean
    pub initializing_bean: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        post_processor: false,
        bean_name_aware: false,
        initializing_bean: false,
    };

    pub const fn post_processor() -> Self {
        Capabilities {
            post_processor: true,
            ..Self::NONE
        }
    }

    pub const fn with_bean_name_aware(mut self) -> Self {
        self.bean_name_aware = true;
        self
    }

    pub const fn with_initializing_bean(mut self) -> Self {
        self.initializing_bean = true;
        self
    }
}

/// Component 注册表 - 用于 inventory 收集
///
/// 由 `#[derive(Component)]` 在编译期提交，所有字段都是常量，
/// 扫描时通过 [`ComponentRegistration::descriptor`] 转换为 [`TypeDescriptor`]
#[derive(Debug)]
pub struct ComponentRegistration {
    /// 完整类型路径
    pub type_name: &'static str,

    /// 声明所在模块（`module_path!()`）
    pub namespace: &'static str,

    /// 声明的 Bean 名称，空字符串表示使用类型的简单名称
    pub name: &'static str,

    /// 声明的作用域
    pub scope: Option<&'static str>,

    /// 是否延迟初始化
    pub lazy: bool,

    pub capabilities: Capabilities,

    /// 无参构造函数
    pub constructor: Option<BeanConstructor>,
}

inventory::collect!(ComponentRegistration);

impl ComponentRegistration {
    pub fn bean_type(&self) -> BeanType {
        match self.constructor {
            Some(constructor) => BeanType::new(self.type_name, constructor),
            None => BeanType::without_constructor(self.type_name),
        }
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            bean_type: self.bean_type(),
            namespace: self.namespace.to_string(),
            component: true,
            declared_name: self.name.to_string(),
            declared_scope: self.scope.map(str::to_string),
            lazy: self.lazy,
            capabilities: self.capabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bean::{construct_default, Bean};

    #[derive(Default)]
    struct Registered;

    impl Bean for Registered {}

    #[test]
    fn test_capabilities_builders() {
        let caps = Capabilities::NONE
            .with_bean_name_aware()
            .with_initializing_bean();
        assert!(caps.bean_name_aware);
        assert!(caps.initializing_bean);
        assert!(!caps.post_processor);

        assert!(Capabilities::post_processor().post_processor);
        assert_eq!(Capabilities::default(), Capabilities::NONE);
    }

    #[test]
    fn test_registration_descriptor() {
        let registration = ComponentRegistration {
            type_name: "app::beans::Registered",
            namespace: "app::beans",
            name: "",
            scope: Some("prototype"),
            lazy: false,
            capabilities: Capabilities::NONE,
            constructor: Some(construct_default::<Registered>),
        };

        let descriptor = registration.descriptor();
        assert!(descriptor.component);
        assert_eq!(descriptor.namespace, "app::beans");
        assert_eq!(descriptor.declared_scope.as_deref(), Some("prototype"));
        assert_eq!(descriptor.bean_name(), "Registered");
        assert!(descriptor.bean_type.has_constructor());
    }
}
