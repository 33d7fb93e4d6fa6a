//! 只记录日志的后置处理器

use sprig_core::prelude::*;
use sprig_core_macros::Component;

/// 依赖注入处理器的占位实现
#[derive(Component, Default)]
#[bean_post_processor]
pub struct AutowiredAnnotationBeanPostProcessor;

impl BeanPostProcessor for AutowiredAnnotationBeanPostProcessor {
    fn post_process_before_initialization(
        &self,
        _bean: &mut dyn Bean,
        bean_name: &str,
    ) -> ContainerResult<()> {
        tracing::info!("[autowired] before initialization of '{}'", bean_name);
        Ok(())
    }

    fn post_process_after_initialization(
        &self,
        _bean: &mut dyn Bean,
        bean_name: &str,
    ) -> ContainerResult<()> {
        tracing::info!("[autowired] after initialization of '{}'", bean_name);
        Ok(())
    }

    fn name(&self) -> &str {
        "AutowiredAnnotationBeanPostProcessor"
    }
}

/// 通用注解处理器的占位实现
#[derive(Component, Default)]
#[bean_post_processor]
pub struct CommonAnnotationBeanPostProcessor;

impl BeanPostProcessor for CommonAnnotationBeanPostProcessor {
    fn post_process_before_initialization(
        &self,
        _bean: &mut dyn Bean,
        bean_name: &str,
    ) -> ContainerResult<()> {
        tracing::info!("[common] before initialization of '{}'", bean_name);
        Ok(())
    }

    fn name(&self) -> &str {
        "CommonAnnotationBeanPostProcessor"
    }
}
