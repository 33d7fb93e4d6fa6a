use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ContainerConfig;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::context::ApplicationContext;
use crate::discovery::{ComponentDiscovery, InventoryDiscovery};
use crate::error::ApplicationResult;
use crate::logging::LoggingConfig;

/// Sprig 应用程序
///
/// 提供便捷的应用启动方式：加载配置、初始化日志、扫描组件并预实例化单例
pub struct SprigApplication {
    /// 应用名称
    name: String,

    /// 配置文件路径，不存在时使用默认配置
    config_file: PathBuf,

    /// 代码中设置的配置，优先于配置文件
    config: Option<ContainerConfig>,

    /// 扫描根命名空间覆盖
    base_package: Option<String>,

    /// 是否显示 banner
    show_banner: bool,

    /// 日志配置覆盖
    logging_config: Option<LoggingConfig>,

    /// 是否初始化全局日志订阅者
    init_logging: bool,
}

impl SprigApplication {
    /// 创建新的应用
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            config: None,
            base_package: None,
            show_banner: true,
            logging_config: None,
            init_logging: true,
        }
    }

    /// 设置配置文件路径
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    /// 直接使用给定的配置，不再读取配置文件
    pub fn config(mut self, config: ContainerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// 设置扫描根命名空间
    pub fn base_package(mut self, base_package: impl Into<String>) -> Self {
        self.base_package = Some(base_package.into());
        self
    }

    /// 设置是否显示 banner
    pub fn banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// 设置日志配置
    ///
    /// 如果不设置，将使用配置文件中的 `[logging]` 段（再由环境变量覆盖）
    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = Some(config);
        self
    }

    /// 交给调用方初始化日志（例如测试中）
    pub fn without_logging_init(mut self) -> Self {
        self.init_logging = false;
        self
    }

    /// 使用 `#[derive(Component)]` 注册表运行应用
    pub fn run(self) -> ApplicationResult<ApplicationContext> {
        self.run_with_discovery(InventoryDiscovery::new())
    }

    /// 使用指定的组件发现器运行应用
    pub fn run_with_discovery(
        self,
        discovery: impl ComponentDiscovery + 'static,
    ) -> ApplicationResult<ApplicationContext> {
        let config = self.resolve_config()?;

        if self.init_logging {
            let logging_config = self
                .logging_config
                .clone()
                .unwrap_or_else(|| config.logging.clone());
            logging_config.init()?;
        }

        // 记录启动开始时间
        let start_time = Instant::now();

        if self.show_banner {
            self.print_banner();
        }

        tracing::info!("Starting {} application", self.name);
        match config.scan.root_namespace() {
            Some(root) => tracing::info!("Component scan root: {}", root),
            None => tracing::warn!("No base package configured; the container will be empty"),
        }

        let context = ApplicationContext::bootstrap(config, discovery);

        let diagnostics = context.diagnostics();
        if !diagnostics.is_empty() {
            tracing::warn!("{} problem(s) were recorded during startup", diagnostics.len());
            for diagnostic in &diagnostics {
                tracing::warn!("  {}", diagnostic);
            }
        }

        tracing::info!(
            "Started {} in {}ms",
            self.name,
            start_time.elapsed().as_millis()
        );

        Ok(context)
    }

    /// 解析配置
    ///
    /// 优先级（从低到高）：配置文件 -> 环境变量 -> 代码设置
    fn resolve_config(&self) -> ApplicationResult<ContainerConfig> {
        let mut config = match &self.config {
            Some(config) => config.clone(),
            None => Self::load_config_file(&self.config_file)?.with_env_overrides(),
        };

        if let Some(base_package) = &self.base_package {
            config = config.base_package(base_package.clone());
        }

        Ok(config)
    }

    fn load_config_file(path: &Path) -> ApplicationResult<ContainerConfig> {
        if path.exists() {
            let config = ContainerConfig::from_file(path)?;
            tracing::info!("Loaded configuration from: {}", path.display());
            Ok(config)
        } else {
            tracing::debug!("Configuration file not found: {}", path.display());
            Ok(ContainerConfig::default())
        }
    }

    /// 打印 banner
    fn print_banner(&self) {
        println!();
        println!(r"  ___ _ __  _ __(_) __ _ ");
        println!(r" / __| '_ \| '__| |/ _` |");
        println!(r" \__ \ |_) | |  | | (_| |");
        println!(r" |___/ .__/|_|  |_|\__, |");
        println!(r"     |_|           |___/ ");
        println!();
        println!("  :: Sprig ::        (v{})", env!("CARGO_PKG_VERSION"));
        println!();
    }
}

impl Default for SprigApplication {
    fn default() -> Self {
        Self::new("SprigApplication")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bean_factory::BeanFactory;
    use crate::discovery::{StaticDiscovery, TypeDescriptor};
    use crate::Bean;

    #[derive(Default)]
    struct Clock;
    impl Bean for Clock {}

    fn discovery() -> StaticDiscovery {
        StaticDiscovery::new().with(TypeDescriptor::of::<Clock>().in_namespace("demo::beans"))
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = SprigApplication::new("test")
            .config_file("no-such-application.toml")
            .resolve_config()
            .unwrap();
        assert!(!config.container.apply_after_initialization);
    }

    #[test]
    fn test_base_package_override() {
        let context = SprigApplication::new("test")
            .config(ContainerConfig::new().base_package("other"))
            .base_package("demo.beans")
            .banner(false)
            .without_logging_init()
            .run_with_discovery(discovery())
            .unwrap();

        assert!(context.get_bean("Clock").is_some());
    }

    #[test]
    fn test_run_without_base_package_is_empty() {
        let context = SprigApplication::new("test")
            .config(ContainerConfig::new())
            .banner(false)
            .without_logging_init()
            .run_with_discovery(discovery())
            .unwrap();

        assert!(!context.contains_bean("Clock"));
    }
}
