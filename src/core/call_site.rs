//! Source location of a logging call

use std::fmt;
use std::panic::Location;
use std::path::{Component, Path};

/// Number of trailing path components kept in the header tag
const PATH_DEPTH: usize = 3;

/// Where a log call was made.
///
/// Handle methods capture it through `#[track_caller]`; the logging macros
/// additionally fill in the enclosing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: Option<&'static str>,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Location of the caller of the `#[track_caller]` function invoking this
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), None)
    }

    #[must_use]
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Last three components of the source path, `/`-separated
    pub fn short_path(&self) -> String {
        let parts: Vec<String> = Path::new(self.file)
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let start = parts.len().saturating_sub(PATH_DEPTH);
        parts[start..].join("/")
    }
}

impl fmt::Display for CallSite {
    /// `(path:line|function)`, or `(path:line)` when the function is unknown
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "({}:{}|{})", self.short_path(), self.line, function),
            None => write!(f, "({}:{})", self.short_path(), self.line),
        }
    }
}

/// Path of the function this macro is expanded in
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.strip_suffix("::{{closure}}").unwrap_or(name)
    }};
}

/// [`CallSite`] of the macro invocation, including the function name
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::core::CallSite::new(file!(), line!(), Some($crate::__function_name!()))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_keeps_three_components() {
        let site = CallSite::new("/home/user/project/src/core/logger.rs", 12, None);
        assert_eq!(site.short_path(), "src/core/logger.rs");

        let site = CallSite::new("main.rs", 1, None);
        assert_eq!(site.short_path(), "main.rs");
    }

    #[test]
    fn test_display() {
        let site = CallSite::new("src/bin/tool.rs", 40, Some("tool::run"));
        assert_eq!(site.to_string(), "(src/bin/tool.rs:40|tool::run)");
        let site = CallSite::new("src/bin/tool.rs", 40, None);
        assert_eq!(site.to_string(), "(src/bin/tool.rs:40)");
    }

    #[test]
    fn test_caller_reports_this_file() {
        let site = CallSite::caller();
        assert!(site.file.ends_with("call_site.rs"));
    }

    #[test]
    fn test_macro_captures_function() {
        let site = crate::call_site!();
        assert_eq!(
            site.function,
            Some("multisink_logger::core::call_site::tests::test_macro_captures_function")
        );
    }
}
