use proc_macro_error::abort;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr, Meta};

/// 组件的无参构造路径
pub(crate) enum Constructor {
    /// `Default::default()`
    Default,
    /// `#[constructor("new")]`：`fn() -> Self`
    Infallible(Ident),
    /// `#[constructor(fallible = "try_new")]`：`fn() -> Result<Self, E>`，`E: Display`
    Fallible(Ident),
}

/// 从属性中提取bean名称
///
/// 支持 `#[component("name")]` 与 `#[component(name = "name")]`，
/// 单独的 `#[component]` 等同于未声明
pub(crate) fn get_component_name(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("component") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => return None,
            Meta::List(_) => {
                if let Ok(name_lit) = attr.parse_args::<LitStr>() {
                    return Some(name_lit.value());
                }

                let mut name = None;
                let parsed = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        let name_lit: LitStr = meta.value()?.parse()?;
                        name = Some(name_lit.value());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported component attribute"))
                    }
                });

                if let Err(e) = parsed {
                    abort!(
                        e.span(),
                        "{}", e;
                        help = "use #[component(\"name\")] or #[component(name = \"name\")]"
                    );
                }
                return name;
            }
            Meta::NameValue(meta) => abort!(
                meta.span(),
                "unexpected `=` in component attribute";
                help = "use #[component(\"name\")] or #[component(name = \"name\")]"
            ),
        }
    }
    None
}

/// 从属性中提取作用域字符串
///
/// 这里不校验取值，非法作用域在扫描时作为诊断记录
pub(crate) fn get_scope(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident("scope") {
            match attr.parse_args::<LitStr>() {
                Ok(scope_lit) => return Some(scope_lit.value()),
                Err(_) => abort!(
                    attr.span(),
                    "expected a string literal";
                    help = "use #[scope(\"singleton\")] or #[scope(\"prototype\")]"
                ),
            }
        }
    }
    None
}

/// 检查是否带有不含参数的标记属性，例如 `#[lazy]`
pub(crate) fn has_flag(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// 从属性中提取构造路径
pub(crate) fn get_constructor(attrs: &[Attribute]) -> Constructor {
    for attr in attrs {
        if !attr.path().is_ident("constructor") {
            continue;
        }

        if let Ok(method_lit) = attr.parse_args::<LitStr>() {
            return Constructor::Infallible(parse_method_ident(&method_lit));
        }

        let mut constructor = None;
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("fallible") {
                let method_lit: LitStr = meta.value()?.parse()?;
                constructor = Some(Constructor::Fallible(parse_method_ident(&method_lit)));
                Ok(())
            } else {
                Err(meta.error("unsupported constructor attribute"))
            }
        });

        match (parsed, constructor) {
            (Ok(()), Some(constructor)) => return constructor,
            (Err(e), _) => abort!(
                e.span(),
                "{}", e;
                help = "use #[constructor(\"new\")] or #[constructor(fallible = \"try_new\")]"
            ),
            (Ok(()), None) => abort!(
                attr.span(),
                "missing constructor method name";
                help = "use #[constructor(\"new\")] or #[constructor(fallible = \"try_new\")]"
            ),
        }
    }
    Constructor::Default
}

fn parse_method_ident(method_lit: &LitStr) -> Ident {
    match method_lit.parse::<Ident>() {
        Ok(ident) => ident,
        Err(_) => abort!(
            method_lit.span(),
            "'{}' is not a valid method name",
            method_lit.value()
        ),
    }
}
