//! Options naming what a Java application runs.
//!
//! None of these kinds has a default provider: a schema that needs one and
//! finds it missing reports the kind as not configured.

use std::fmt;

use super::option::LaunchOption;

macro_rules! text_option {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl LaunchOption for $name {}

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_option!(
    /// The program to start, e.g. `java`.
    Executable
);

text_option!(
    /// Fully qualified name of the class whose `main` is run.
    ClassName
);

text_option!(
    /// Class path handed to the virtual machine, already joined.
    ClassPath
);

text_option!(
    /// Name under which the application is reported.
    DisplayName
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OptionError;
    use crate::domain::options::OptionsByType;

    #[test]
    fn java_options_are_single_valued() {
        let options = OptionsByType::new()
            .with(ClassName::new("com.example.First"))
            .with(ClassName::new("com.example.Second"));

        assert_eq!(options.get::<ClassName>(), Some(ClassName::new("com.example.Second")));
    }

    #[test]
    fn missing_executable_is_not_configured() {
        let err = OptionsByType::new().require::<Executable>().unwrap_err();
        assert_eq!(err, OptionError::not_configured("Executable"));
    }

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(ClassPath::new("lib/a.jar:lib/b.jar").to_string(), "lib/a.jar:lib/b.jar");
        assert_eq!(DisplayName::new("worker-1").as_str(), "worker-1");
    }
}
