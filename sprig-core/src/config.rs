//! 容器配置
//!
//! 根配置描述了组件扫描的根命名空间以及若干容器行为开关，
//! 可以在代码中构建，也可以从 TOML 文件加载：
//!
//! ```toml
//! [scan]
//! base_package = "my_app::beans"
//!
//! [container]
//! apply_after_initialization = false
//!
//! [logging]
//! level = "debug"
//! format = "compact"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::BASE_PACKAGE_ENV;
use crate::error::{ApplicationError, ApplicationResult};
use crate::logging::LoggingConfig;
use crate::utils::naming::normalize_namespace;

/// 组件扫描配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComponentScan {
    /// 扫描的根命名空间，缺省或为空时扫描什么都不做
    pub base_package: Option<String>,
}

impl ComponentScan {
    pub fn new(base_package: impl Into<String>) -> Self {
        Self {
            base_package: Some(base_package.into()),
        }
    }

    /// 规范化后的根命名空间；缺省或为空时返回 None
    pub fn root_namespace(&self) -> Option<String> {
        self.base_package
            .as_deref()
            .map(normalize_namespace)
            .filter(|namespace| !namespace.is_empty())
    }
}

/// 容器行为开关
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LifecycleSettings {
    /// 是否在初始化回调之后调用 `post_process_after_initialization`
    ///
    /// 默认关闭：创建流程只调用前置处理
    pub apply_after_initialization: bool,
}

/// 根配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    pub scan: ComponentScan,

    pub container: LifecycleSettings,

    pub logging: LoggingConfig,
}

impl ContainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置扫描根命名空间
    pub fn base_package(mut self, base_package: impl Into<String>) -> Self {
        self.scan = ComponentScan::new(base_package);
        self
    }

    /// 打开或关闭后置处理钩子
    pub fn apply_after_initialization(mut self, enabled: bool) -> Self {
        self.container.apply_after_initialization = enabled;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> ApplicationResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从 TOML 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> ApplicationResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ApplicationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded container configuration from {}", path.display());
        Ok(config)
    }

    /// 用环境变量覆盖：`SPRIG_BASE_PACKAGE` 以及日志相关变量
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_package) = std::env::var(BASE_PACKAGE_ENV) {
            self.scan = ComponentScan::new(base_package);
        }
        self.logging = self.logging.with_env_overrides();
        self
    }
}
