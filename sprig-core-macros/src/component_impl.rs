use proc_macro::TokenStream;
use proc_macro_error::abort;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{parse_macro_input, DeriveInput};

use crate::attribute_helpers::{
    get_component_name, get_constructor, get_scope, has_flag, Constructor,
};

pub(crate) fn derive_component_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    // inventory 只能收集具体类型
    if !input.generics.params.is_empty() {
        abort!(
            input.generics.span(),
            "#[derive(Component)] does not support generic types";
            help = "register a concrete wrapper type instead"
        );
    }

    // 空字符串表示使用类型的简单名称
    let bean_name = get_component_name(&input.attrs).unwrap_or_default();

    let scope: proc_macro2::TokenStream = match get_scope(&input.attrs) {
        Some(scope) => quote! { ::std::option::Option::Some(#scope) },
        None => quote! { ::std::option::Option::None },
    };

    let lazy = has_flag(&input.attrs, "lazy");
    let bean_name_aware = has_flag(&input.attrs, "bean_name_aware");
    let initializing_bean = has_flag(&input.attrs, "initializing_bean");
    let post_processor = has_flag(&input.attrs, "bean_post_processor");

    // 生成能力访问方法
    let bean_name_aware_impl: proc_macro2::TokenStream = if bean_name_aware {
        quote! {
            fn as_bean_name_aware(
                &mut self,
            ) -> ::std::option::Option<&mut dyn ::sprig_core::BeanNameAware> {
                ::std::option::Option::Some(self)
            }
        }
    } else {
        quote! {}
    };

    let initializing_bean_impl: proc_macro2::TokenStream = if initializing_bean {
        quote! {
            fn as_initializing_bean(
                &mut self,
            ) -> ::std::option::Option<&mut dyn ::sprig_core::InitializingBean> {
                ::std::option::Option::Some(self)
            }
        }
    } else {
        quote! {}
    };

    let post_processor_impl: proc_macro2::TokenStream = if post_processor {
        quote! {
            fn into_post_processor(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::option::Option<::std::boxed::Box<dyn ::sprig_core::BeanPostProcessor>> {
                ::std::option::Option::Some(self)
            }
        }
    } else {
        quote! {}
    };

    let mut capabilities: proc_macro2::TokenStream = if post_processor {
        quote! { ::sprig_core::Capabilities::post_processor() }
    } else {
        quote! { ::sprig_core::Capabilities::NONE }
    };
    if bean_name_aware {
        capabilities = quote! { #capabilities.with_bean_name_aware() };
    }
    if initializing_bean {
        capabilities = quote! { #capabilities.with_initializing_bean() };
    }

    // 生成构造函数
    let constructor_fn = format_ident!("__sprig_construct_{}", name);
    let construct_body: proc_macro2::TokenStream = match get_constructor(&input.attrs) {
        Constructor::Default => quote! {
            ::sprig_core::construct_default::<#name>()
        },
        Constructor::Infallible(method) => quote! {
            ::std::result::Result::Ok(::std::boxed::Box::new(#name::#method()))
        },
        Constructor::Fallible(method) => quote! {
            #name::#method()
                .map(|bean| {
                    ::std::boxed::Box::new(bean) as ::std::boxed::Box<dyn ::sprig_core::Bean>
                })
                .map_err(::sprig_core::ContainerError::custom)
        },
    };

    let expanded = quote! {
        impl ::sprig_core::Bean for #name {
            #bean_name_aware_impl

            #initializing_bean_impl

            #post_processor_impl
        }

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #constructor_fn(
        ) -> ::sprig_core::ContainerResult<::std::boxed::Box<dyn ::sprig_core::Bean>> {
            #construct_body
        }

        // 自动向inventory注册组件
        ::sprig_core::inventory::submit! {
            ::sprig_core::ComponentRegistration {
                type_name: ::std::concat!(::std::module_path!(), "::", ::std::stringify!(#name)),
                namespace: ::std::module_path!(),
                name: #bean_name,
                scope: #scope,
                lazy: #lazy,
                capabilities: #capabilities,
                constructor: ::std::option::Option::Some(#constructor_fn),
            }
        }
    };

    TokenStream::from(expanded)
}
