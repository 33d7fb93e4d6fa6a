mod attribute_helpers;
mod component_impl;

use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

/// Component派生宏
///
/// 为类型实现 `sprig_core::Bean` 并把它提交到组件注册表，
/// 使其能被根命名空间覆盖其所在模块的扫描发现。
///
/// 用法：
/// ```ignore
/// #[derive(Default, Component)]
/// #[component("userService")]        // 可选：指定bean名称（简写形式）
/// // 或
/// #[component(name = "userService")] // 可选：指定bean名称（完整形式）
/// #[scope("prototype")]              // 可选：指定作用域 (singleton/prototype)
/// #[lazy]                            // 可选：延迟初始化
/// #[bean_name_aware]                 // 可选：需要实现 BeanNameAware
/// #[initializing_bean]               // 可选：需要实现 InitializingBean
/// #[bean_post_processor]             // 可选：需要实现 BeanPostProcessor，注册为处理器而非 Bean
/// #[constructor("new")]              // 可选：使用 fn() -> Self 构造（默认使用 Default）
/// #[constructor(fallible = "try_new")] // 可选：使用 fn() -> Result<Self, E> 构造
/// struct UserService { }
/// ```
///
/// 默认的 bean 名称是类型名本身，例如 `UserService`。
#[proc_macro_derive(
    Component,
    attributes(
        component,
        scope,
        lazy,
        bean_name_aware,
        initializing_bean,
        bean_post_processor,
        constructor
    )
)]
#[proc_macro_error]
pub fn derive_component(input: TokenStream) -> TokenStream {
    component_impl::derive_component_impl(input)
}
