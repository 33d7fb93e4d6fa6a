//! 错误类型
//!
//! 容器内部使用 [`ContainerError`] 描述单个 Bean / 组件的失败；
//! 应用启动（日志、配置加载）使用 [`ApplicationError`]。
//! 面向业务代码的统一错误类型仍然是 `anyhow::Result`。

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::lifecycle::LifecyclePhase;

pub use anyhow::Result;

/// 容器错误
///
/// 所有变体只携带字符串，便于克隆进诊断列表
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("No no-argument constructor available for type '{0}'")]
    NoDefaultConstructor(String),

    #[error("Failed to instantiate '{type_name}': {reason}")]
    InstantiationFailed { type_name: String, reason: String },

    #[error("Type '{0}' is declared as a BeanPostProcessor but does not implement it")]
    NotAPostProcessor(String),

    #[error("Invalid scope '{scope}' declared for bean '{bean}'")]
    InvalidScope { bean: String, scope: String },

    #[error("BeanPostProcessor '{processor}' failed on bean '{bean}': {reason}")]
    PostProcessorFailed {
        processor: String,
        bean: String,
        reason: String,
    },

    #[error("Initialization of bean '{bean}' failed: {reason}")]
    InitializationFailed { bean: String, reason: String },

    #[error("{0}")]
    Custom(String),
}

impl ContainerError {
    /// 用任意可显示的错误构造自定义错误
    pub fn custom(message: impl fmt::Display) -> Self {
        Self::Custom(message.to_string())
    }
}

pub type ContainerResult<T> = std::result::Result<T, ContainerError>;

/// 应用启动错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInitFailed(String),

    #[error("Failed to read configuration file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// 诊断记录
///
/// 容器对单个 Bean 的失败采取"记录并继续"的策略，
/// 每一次被吞掉的失败都会在日志之外以诊断的形式保留下来
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 出错的 Bean 名称或组件类型名
    pub subject: String,

    /// 出错时所处的生命周期阶段
    pub phase: LifecyclePhase,

    /// 具体错误
    pub error: ContainerError,
}

impl Diagnostic {
    pub fn new(subject: impl Into<String>, phase: LifecyclePhase, error: ContainerError) -> Self {
        Self {
            subject: subject.into(),
            phase,
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.phase, self.subject, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_error_messages() {
        let err = ContainerError::NoDefaultConstructor("app::Foo".to_string());
        assert_eq!(
            err.to_string(),
            "No no-argument constructor available for type 'app::Foo'"
        );

        let err = ContainerError::InvalidScope {
            bean: "foo".to_string(),
            scope: "request".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid scope 'request' declared for bean 'foo'");
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(
            "userService",
            LifecyclePhase::Initialization,
            ContainerError::InitializationFailed {
                bean: "userService".to_string(),
                reason: "boom".to_string(),
            },
        );

        assert_eq!(
            diagnostic.to_string(),
            "[initialization] userService: Initialization of bean 'userService' failed: boom"
        );
    }

    #[test]
    fn test_config_parse_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: ApplicationError = parse_err.into();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
