mod beans;
mod processors;

use std::sync::Arc;

use sprig_core::prelude::*;

use beans::{Order, ReportService, UserService};

fn main() -> anyhow::Result<()> {
    let context = SprigApplication::new("app-demo")
        .config_file(concat!(env!("CARGO_MANIFEST_DIR"), "/application.toml"))
        .run()?;

    tracing::info!("Bean definitions: {:?}", context.bean_names());
    tracing::info!("Post-processors: {:?}", context.post_processor_names());

    // 单例
    let user_service = context
        .get_bean_as::<UserService>("userService")
        .context("userService is not available")?;
    tracing::info!("{} (ready: {})", user_service.greet("Alice"), user_service.is_ready());

    let again = context
        .get_bean_as::<UserService>("userService")
        .context("userService is not available")?;
    tracing::info!("Same userService instance: {}", Arc::ptr_eq(&user_service, &again));

    // 原型
    let first = context.get_bean_as::<Order>("Order").context("Order is not available")?;
    let second = context.get_bean_as::<Order>("Order").context("Order is not available")?;
    tracing::info!("Prototype orders: #{} and #{}", first.id(), second.id());

    // 延迟单例
    tracing::info!(
        "reportService created before first access: {}",
        context.contains_singleton("reportService")
    );
    let report = context
        .get_bean_as::<ReportService>("reportService")
        .context("reportService is not available")?;
    tracing::info!("Rendered {}", report.render());

    if context.get_bean("missing").is_none() {
        tracing::info!("Unknown bean 'missing' resolved to nothing");
    }

    Ok(())
}
