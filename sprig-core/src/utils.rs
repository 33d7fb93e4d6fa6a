//! Utility functions for the container
//!
//! Naming helpers shared by discovery and bean registration.

/// Naming convention utilities for bean names and namespaces
pub mod naming {
    use crate::constants::NAMESPACE_SEPARATOR;

    /// Returns the simple name of a fully qualified Rust type name.
    ///
    /// This is the default bean naming strategy: a component without an
    /// explicit name is registered under the last path segment of its type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprig_core::utils::naming::simple_type_name;
    ///
    /// assert_eq!(simple_type_name("app::service::UserService"), "UserService");
    /// assert_eq!(simple_type_name("app::Wrapper<app::Inner>"), "Wrapper");
    /// assert_eq!(simple_type_name("A"), "A");
    /// ```
    pub fn simple_type_name(type_name: &str) -> &str {
        let without_generics = match type_name.find('<') {
            Some(idx) => &type_name[..idx],
            None => type_name,
        };
        without_generics
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(without_generics)
    }

    /// Returns the module path a type name lives in, or `""` for a bare name.
    ///
    /// ```
    /// use sprig_core::utils::naming::namespace_of;
    ///
    /// assert_eq!(namespace_of("app::service::UserService"), "app::service");
    /// assert_eq!(namespace_of("UserService"), "");
    /// ```
    pub fn namespace_of(type_name: &str) -> &str {
        let without_generics = match type_name.find('<') {
            Some(idx) => &type_name[..idx],
            None => type_name,
        };
        match without_generics.rfind(NAMESPACE_SEPARATOR) {
            Some(idx) => &without_generics[..idx],
            None => "",
        }
    }

    /// Normalizes a root namespace: trims whitespace, accepts `.` as a
    /// separator and drops trailing separators.
    ///
    /// ```
    /// use sprig_core::utils::naming::normalize_namespace;
    ///
    /// assert_eq!(normalize_namespace(" app.service "), "app::service");
    /// assert_eq!(normalize_namespace("app::service::"), "app::service");
    /// ```
    pub fn normalize_namespace(namespace: &str) -> String {
        let normalized = namespace.trim().replace('.', NAMESPACE_SEPARATOR);
        normalized.trim_end_matches(':').to_string()
    }

    /// Whether `namespace` is `root` itself or one of its descendants.
    ///
    /// `root` is expected to be normalized. `app::serv` does not match
    /// `app::service`; only whole path segments count.
    pub fn namespace_matches(namespace: &str, root: &str) -> bool {
        if root.is_empty() {
            return false;
        }
        match namespace.strip_prefix(root) {
            Some("") => true,
            Some(rest) => rest.starts_with(NAMESPACE_SEPARATOR),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    mod naming_tests {
        use super::super::naming::*;

        #[test]
        fn test_simple_type_name() {
            assert_eq!(simple_type_name("app::beans::A"), "A");
            assert_eq!(simple_type_name("A"), "A");
            assert_eq!(simple_type_name("app::Holder<alloc::string::String>"), "Holder");
            assert_eq!(simple_type_name(""), "");
        }

        #[test]
        fn test_namespace_of() {
            assert_eq!(namespace_of("app::beans::A"), "app::beans");
            assert_eq!(namespace_of("app::Holder<app::beans::A>"), "app");
            assert_eq!(namespace_of("A"), "");
        }

        #[test]
        fn test_normalize_namespace() {
            assert_eq!(normalize_namespace("com.mks"), "com::mks");
            assert_eq!(normalize_namespace("  app  "), "app");
            assert_eq!(normalize_namespace("app::"), "app");
            assert_eq!(normalize_namespace(""), "");
        }

        #[test]
        fn test_namespace_matches() {
            assert!(namespace_matches("app", "app"));
            assert!(namespace_matches("app::beans", "app"));
            assert!(namespace_matches("app::beans::nested", "app::beans"));
            assert!(!namespace_matches("application", "app"));
            assert!(!namespace_matches("other::app", "app"));
            assert!(!namespace_matches("app", ""));
        }
    }
}
