//! 核心常量定义
//!
//! 宏、配置和容器共用的字符串常量，避免各处硬编码不一致

/// 单例作用域的声明值
pub const SINGLETON_SCOPE: &str = "singleton";

/// 原型作用域的声明值
pub const PROTOTYPE_SCOPE: &str = "prototype";

/// 模块路径分隔符
pub const NAMESPACE_SEPARATOR: &str = "::";

/// 覆盖扫描根路径的环境变量
pub const BASE_PACKAGE_ENV: &str = "SPRIG_BASE_PACKAGE";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "application.toml";
