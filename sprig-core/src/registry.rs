use std::collections::HashMap;

use crate::bean::BeanDefinition;

/// Bean 定义注册表
///
/// 名称到定义的映射。同名注册会静默覆盖旧定义（记录 warn 日志），
/// 不做合并。
#[derive(Debug, Default)]
pub struct BeanDefinitionRegistry {
    definitions: HashMap<String, BeanDefinition>,
}

impl BeanDefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 Bean 定义，返回被覆盖的旧定义
    pub fn register(&mut self, definition: BeanDefinition) -> Option<BeanDefinition> {
        tracing::trace!(
            "Registering bean definition: name='{}', type='{}', scope={}, lazy={}",
            definition.name,
            definition.bean_type.type_name(),
            definition.scope,
            definition.lazy
        );

        let name = definition.name.clone();
        let previous = self.definitions.insert(name.clone(), definition);

        if let Some(ref old) = previous {
            tracing::warn!(
                "Overriding bean definition '{}': replacing type '{}'",
                name,
                old.bean_type.type_name()
            );
        }

        previous
    }

    pub fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BeanDefinition)> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
