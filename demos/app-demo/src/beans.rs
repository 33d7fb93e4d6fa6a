use sprig_core::prelude::*;
use sprig_core_macros::Component;

/// 用户服务 - 演示 BeanNameAware 和 InitializingBean
#[derive(Component, Debug, Default)]
#[component("userService")]
#[bean_name_aware]
#[initializing_bean]
pub struct UserService {
    bean_name: String,
    ready: bool,
}

impl UserService {
    pub fn greet(&self, user: &str) -> String {
        format!("Hello, {}! (served by '{}')", user, self.bean_name)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl BeanNameAware for UserService {
    fn set_bean_name(&mut self, name: &str) {
        tracing::info!("UserService received bean name '{}'", name);
        self.bean_name = name.to_string();
    }
}

impl InitializingBean for UserService {
    fn after_properties_set(&mut self) -> ContainerResult<()> {
        tracing::info!("UserService initialized");
        self.ready = true;
        Ok(())
    }
}

/// 订单 - 每次获取都是新实例
#[derive(Component, Debug)]
#[scope("prototype")]
#[constructor("new")]
pub struct Order {
    id: u64,
}

impl Order {
    pub fn new() -> Self {
        static NEXT_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// 报表服务 - 第一次使用时才创建
#[derive(Component, Debug, Default)]
#[component(name = "reportService")]
#[lazy]
pub struct ReportService;

impl ReportService {
    pub fn render(&self) -> &'static str {
        "monthly report"
    }
}
