use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::bean::{Bean, BeanDefinition};
use crate::bean_factory::{BeanFactory, ListableBeanFactory};
use crate::config::{ComponentScan, ContainerConfig};
use crate::discovery::{ComponentDiscovery, InventoryDiscovery, TypeDescriptor};
use crate::error::{ContainerError, ContainerResult, Diagnostic};
use crate::lifecycle::{BeanPostProcessor, LifecyclePhase};
use crate::registry::BeanDefinitionRegistry;
use crate::singleton::SingletonPool;
use crate::Scope;

/// 应用上下文 - 容器的默认实现
///
/// 持有 Bean 定义注册表、单例池和 BeanPostProcessor 列表。
/// `scan` 需要 `&mut self`，因此上下文一旦被共享，注册表和处理器列表就是只读的；
/// 之后的 `get_bean` 可以在多个线程中并发调用。
pub struct ApplicationContext {
    config: ContainerConfig,

    /// 组件发现器
    discovery: Box<dyn ComponentDiscovery>,

    /// Bean 定义注册表
    registry: BeanDefinitionRegistry,

    /// 单例池
    singletons: SingletonPool,

    /// Bean 后置处理器列表（按发现顺序）
    bean_post_processors: Vec<Box<dyn BeanPostProcessor>>,

    /// 被记录并跳过的失败
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl ApplicationContext {
    /// 创建空的上下文，不做扫描
    pub fn new(config: ContainerConfig, discovery: impl ComponentDiscovery + 'static) -> Self {
        Self {
            config,
            discovery: Box::new(discovery),
            registry: BeanDefinitionRegistry::new(),
            singletons: SingletonPool::new(),
            bean_post_processors: Vec::new(),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// 启动容器：扫描组件，然后实例化所有非延迟单例
    ///
    /// 单个组件的失败只会被记录，不会中断启动；没有发现任何组件时得到一个空容器
    pub fn bootstrap(
        config: ContainerConfig,
        discovery: impl ComponentDiscovery + 'static,
    ) -> Self {
        let mut context = Self::new(config, discovery);

        let scan = context.config.scan.clone();
        context.scan(&scan);
        context.preinstantiate_singletons();

        tracing::info!(
            "ApplicationContext started: {} bean definition(s), {} singleton(s), \
             {} post-processor(s), {} diagnostic(s)",
            context.registry.len(),
            context.singletons.len(),
            context.bean_post_processors.len(),
            context.diagnostics.lock().len()
        );

        context
    }

    /// 使用 `#[derive(Component)]` 注册表启动容器
    pub fn run(config: ContainerConfig) -> Self {
        Self::bootstrap(config, InventoryDiscovery::new())
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 扫描根命名空间下的组件
    ///
    /// 实现了 BeanPostProcessor 的组件立即实例化并加入处理器列表，
    /// 其余组件注册为 Bean 定义（同名覆盖）。
    ///
    /// 处理器列表只追加不去重：重复扫描同一个根命名空间会再次加入同样的处理器，
    /// 之后每个钩子都会被调用多次。
    pub fn scan(&mut self, scan: &ComponentScan) {
        let Some(root) = scan.root_namespace() else {
            tracing::debug!("No base package configured, skipping component scan");
            return;
        };

        tracing::info!(
            "Starting component scan under '{}' using {}",
            root,
            self.discovery.name()
        );

        let candidates: Vec<TypeDescriptor> = self
            .discovery
            .discover(&root)
            .filter(|descriptor| {
                if !descriptor.component {
                    tracing::trace!(
                        "Skipping '{}': not marked as a component",
                        descriptor.bean_type.type_name()
                    );
                }
                descriptor.component
            })
            .collect();

        if candidates.is_empty() {
            tracing::warn!("No components found under '{}'", root);
            return;
        }

        let total = candidates.len();
        for (idx, descriptor) in candidates.into_iter().enumerate() {
            tracing::debug!(
                "Processing component [{}/{}]: '{}'",
                idx + 1,
                total,
                descriptor.bean_type.type_name()
            );

            if descriptor.capabilities.post_processor {
                self.register_post_processor(&descriptor);
            } else {
                self.register_definition(&descriptor);
            }
        }

        tracing::info!(
            "Component scan completed: {} bean definition(s), {} post-processor(s)",
            self.registry.len(),
            self.bean_post_processors.len()
        );
    }

    fn register_post_processor(&mut self, descriptor: &TypeDescriptor) {
        let type_name = descriptor.bean_type.type_name();

        let processor = descriptor
            .bean_type
            .instantiate()
            .and_then(|instance| {
                instance
                    .into_post_processor()
                    .ok_or_else(|| ContainerError::NotAPostProcessor(type_name.to_string()))
            });

        match processor {
            Ok(processor) => {
                tracing::debug!(
                    "Registered BeanPostProcessor '{}' at position {}",
                    processor.name(),
                    self.bean_post_processors.len()
                );
                self.bean_post_processors.push(processor);
            }
            Err(e) => {
                tracing::error!("Skipping BeanPostProcessor '{}': {}", type_name, e);
                self.record(type_name, LifecyclePhase::Scan, e);
            }
        }
    }

    fn register_definition(&mut self, descriptor: &TypeDescriptor) {
        let name = descriptor.bean_name();

        let scope = match descriptor.declared_scope.as_deref() {
            Some(declared) => match declared.parse::<Scope>() {
                Ok(scope) => scope,
                Err(_) => {
                    let e = ContainerError::InvalidScope {
                        bean: name.clone(),
                        scope: declared.to_string(),
                    };
                    tracing::error!("Skipping component '{}': {}", name, e);
                    self.record(name, LifecyclePhase::Scan, e);
                    return;
                }
            },
            None => Scope::Singleton,
        };

        let definition = BeanDefinition::new(name, descriptor.bean_type)
            .with_scope(scope)
            .with_lazy(descriptor.lazy);
        self.registry.register(definition);
    }

    /// 实例化所有非延迟加载的单例 Bean
    ///
    /// 创建失败的 Bean 不会进入单例池
    pub fn preinstantiate_singletons(&self) {
        let eager: Vec<&BeanDefinition> = self
            .registry
            .iter()
            .map(|(_, definition)| definition)
            .filter(|definition| definition.is_eager_singleton())
            .collect();

        tracing::debug!("Pre-instantiating {} singleton bean(s)", eager.len());

        for definition in eager {
            // 失败已在 resolve_singleton 中记录
            let _ = self.resolve_singleton(definition);
        }
    }

    /// 创建 Bean 实例并执行生命周期回调
    ///
    /// # 生命周期顺序
    /// 1. 实例化（无参构造函数），失败则中止
    /// 2. BeanPostProcessor.postProcessBeforeInitialization
    /// 3. BeanNameAware.setBeanName
    /// 4. InitializingBean.afterPropertiesSet
    /// 5. BeanPostProcessor.postProcessAfterInitialization（需在配置中打开）
    ///
    /// 2-5 步的失败只记录，不影响 Bean 返回。结果不会写入单例池。
    pub fn create_bean(
        &self,
        name: &str,
        definition: &BeanDefinition,
    ) -> ContainerResult<Box<dyn Bean>> {
        // 1. 实例化
        let mut bean = definition.bean_type.instantiate()?;

        // 2. 前置处理
        self.apply_bean_post_processors_before_initialization(bean.as_mut(), name);

        // 3. Aware 回调
        if let Some(aware) = bean.as_bean_name_aware() {
            aware.set_bean_name(name);
        }

        // 4. 初始化回调
        self.invoke_init_methods(bean.as_mut(), name);

        // 5. 后置处理
        if self.config.container.apply_after_initialization {
            self.apply_bean_post_processors_after_initialization(bean.as_mut(), name);
        }

        Ok(bean)
    }

    fn apply_bean_post_processors_before_initialization(&self, bean: &mut dyn Bean, name: &str) {
        for processor in &self.bean_post_processors {
            if let Err(e) = processor.post_process_before_initialization(bean, name) {
                self.record_processor_failure(
                    processor.as_ref(),
                    name,
                    LifecyclePhase::BeforeInitialization,
                    e,
                );
            }
        }
    }

    fn apply_bean_post_processors_after_initialization(&self, bean: &mut dyn Bean, name: &str) {
        for processor in &self.bean_post_processors {
            if let Err(e) = processor.post_process_after_initialization(bean, name) {
                self.record_processor_failure(
                    processor.as_ref(),
                    name,
                    LifecyclePhase::AfterInitialization,
                    e,
                );
            }
        }
    }

    fn invoke_init_methods(&self, bean: &mut dyn Bean, name: &str) {
        let Some(initializing) = bean.as_initializing_bean() else {
            return;
        };

        if let Err(e) = initializing.after_properties_set() {
            let e = ContainerError::InitializationFailed {
                bean: name.to_string(),
                reason: e.to_string(),
            };
            tracing::warn!("{}; returning partially initialized bean", e);
            self.record(name, LifecyclePhase::Initialization, e);
        }
    }

    fn resolve_singleton(&self, definition: &BeanDefinition) -> Option<Arc<dyn Bean>> {
        let name = definition.name.as_str();
        self.singletons
            .get_or_try_create(name, || {
                tracing::info!("Creating shared instance of singleton bean '{}'", name);
                self.create_bean(name, definition)
            })
            .map_err(|e| {
                tracing::error!("Failed to create singleton bean '{}': {}", name, e);
                self.record(name, LifecyclePhase::Instantiation, e);
            })
            .ok()
    }

    fn resolve_prototype(&self, definition: &BeanDefinition) -> Option<Arc<dyn Bean>> {
        let name = definition.name.as_str();
        tracing::debug!("Creating new instance of prototype bean '{}'", name);

        match self.create_bean(name, definition) {
            Ok(bean) => Some(Arc::from(bean)),
            Err(e) => {
                tracing::error!("Failed to create prototype bean '{}': {}", name, e);
                self.record(name, LifecyclePhase::Instantiation, e);
                None
            }
        }
    }

    fn record_processor_failure(
        &self,
        processor: &dyn BeanPostProcessor,
        bean_name: &str,
        phase: LifecyclePhase,
        error: ContainerError,
    ) {
        let e = ContainerError::PostProcessorFailed {
            processor: processor.name().to_string(),
            bean: bean_name.to_string(),
            reason: error.to_string(),
        };
        tracing::warn!("{}; continuing with remaining processors", e);
        self.record(bean_name, phase, e);
    }

    /// 相同的 (subject, phase, error) 只保留一条
    fn record(&self, subject: impl Into<String>, phase: LifecyclePhase, error: ContainerError) {
        let diagnostic = Diagnostic::new(subject, phase, error);
        let mut diagnostics = self.diagnostics.lock();
        if !diagnostics.contains(&diagnostic) {
            diagnostics.push(diagnostic);
        }
    }

    /// 获取 Bean 定义
    pub fn bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.registry.get(name)
    }

    /// 单例池中是否已经有该名称的实例
    pub fn contains_singleton(&self, name: &str) -> bool {
        self.singletons.contains(name)
    }

    pub fn singleton_count(&self) -> usize {
        self.singletons.len()
    }

    pub fn singleton_names(&self) -> Vec<String> {
        self.singletons.names()
    }

    /// 按注册顺序列出 BeanPostProcessor 名称
    pub fn post_processor_names(&self) -> Vec<String> {
        self.bean_post_processors
            .iter()
            .map(|processor| processor.name().to_string())
            .collect()
    }

    pub fn post_processor_count(&self) -> usize {
        self.bean_post_processors.len()
    }

    /// 到目前为止记录的所有诊断
    ///
    /// 重复出现的同一失败（例如反复获取创建失败的 Bean）只记录一次
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }
}

impl BeanFactory for ApplicationContext {
    fn get_bean(&self, name: &str) -> Option<Arc<dyn Bean>> {
        tracing::trace!("Requesting bean: '{}'", name);

        if name.is_empty() {
            return None;
        }

        let Some(definition) = self.registry.get(name) else {
            tracing::debug!("Bean '{}' not found in container", name);
            return None;
        };

        match definition.scope {
            Scope::Singleton => self.resolve_singleton(definition),
            Scope::Prototype => self.resolve_prototype(definition),
        }
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}

impl ListableBeanFactory for ApplicationContext {
    fn bean_names(&self) -> Vec<String> {
        self.registry.names()
    }

    fn bean_definition_count(&self) -> usize {
        self.registry.len()
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("discovery", &self.discovery.name())
            .field("bean_definitions", &self.registry.len())
            .field("singletons", &self.singletons.len())
            .field("post_processors", &self.post_processor_names())
            .finish()
    }
}
