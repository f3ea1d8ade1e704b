//! JavaApplicationSchema - typed description of a Java application launch.
//!
//! A schema collects the options a launch starts from and, through its
//! [`ApplicationFactory`], knows how to wrap a started process in a typed
//! application handle.

use std::fmt;
use std::sync::Arc;

use crate::config::{HarnessConfig, ProfileSettings};
use crate::domain::detection::{self, ArgumentDetector};
use crate::domain::foundation::OptionError;
use crate::domain::options::{
    ClassName, ClassPath, DisplayName, EnvironmentVariables, Executable, Freeform, LaunchOption,
    OptionsByType, Properties, PropertyValue, RemoteDebugging, SystemProperties,
};
use crate::ports::{
    Application, ApplicationConsole, LaunchRequest, MetaClass, Platform, ProcessHandle,
};

/// Everything known about a process once it has been started.
pub struct LaunchedProcess {
    pub process: Box<dyn ProcessHandle>,
    pub name: String,
    pub platform: Arc<dyn Platform>,
    pub console: Arc<dyn ApplicationConsole>,
    pub environment_variables: Properties,
    pub system_properties: Properties,
    pub remote_debug_port: Option<u16>,
}

impl fmt::Debug for LaunchedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchedProcess")
            .field("process", &self.process)
            .field("name", &self.name)
            .field("platform", &self.platform.name())
            .field("console", &self.console.name())
            .finish()
    }
}

/// Produces typed application handles for one application kind.
pub trait ApplicationFactory: Send + Sync {
    type Application: Application;

    /// Name of the application kind, reported to profiles.
    fn application_kind(&self) -> &str {
        "java"
    }

    /// Whether applications of this kind can be created on `platform`.
    /// Checked before anything is started.
    fn supports(&self, _platform: &dyn Platform) -> bool {
        true
    }

    /// Seeds extra option defaults. Called once per schema, after the
    /// built-in defaults and before any profile runs.
    fn configure_defaults(&self, _options: &mut OptionsByType, _detector: &ArgumentDetector) {}

    /// Wraps a started process.
    ///
    /// Returning the process back means the kind cannot be created in this
    /// context; the caller then terminates it.
    fn create_application(
        &self,
        launched: LaunchedProcess,
    ) -> Result<Self::Application, LaunchedProcess>;
}

/// Schema for launching a Java application, generic over the application
/// type its factory produces.
///
/// # Example
///
/// ```ignore
/// let schema = JavaApplicationSchema::new(WorkerFactory, "java", "com.example.Worker", "lib/*")
///     .with_jvm_option("-Xmx512m")
///     .with_system_property("worker.address", Arc::new(PlatformAddress::with_port(7574)));
/// ```
pub struct JavaApplicationSchema<F: ApplicationFactory> {
    factory: F,
    options: OptionsByType,
}

impl<F: ApplicationFactory> JavaApplicationSchema<F> {
    /// Creates a schema whose defaults come from the process-wide detector.
    pub fn new(
        factory: F,
        executable: impl Into<String>,
        class_name: impl Into<String>,
        class_path: impl Into<String>,
    ) -> Self {
        Self::with_detector(
            factory,
            executable,
            class_name,
            class_path,
            &detection::global(),
        )
    }

    /// Creates a schema whose defaults come from `detector`.
    pub fn with_detector(
        factory: F,
        executable: impl Into<String>,
        class_name: impl Into<String>,
        class_path: impl Into<String>,
        detector: &ArgumentDetector,
    ) -> Self {
        Self::configured(
            factory,
            executable,
            class_name,
            class_path,
            detector,
            &ProfileSettings::default(),
        )
    }

    /// Creates a schema from loaded configuration: the detector is built
    /// from `config.detection` and `config.profiles` overrides what it
    /// detects.
    pub fn from_config(
        factory: F,
        executable: impl Into<String>,
        class_name: impl Into<String>,
        class_path: impl Into<String>,
        config: &HarnessConfig,
    ) -> Self {
        Self::configured(
            factory,
            executable,
            class_name,
            class_path,
            &config.detection.build_detector(),
            &config.profiles,
        )
    }

    fn configured(
        factory: F,
        executable: impl Into<String>,
        class_name: impl Into<String>,
        class_path: impl Into<String>,
        detector: &ArgumentDetector,
        settings: &ProfileSettings,
    ) -> Self {
        let mut options = OptionsByType::new()
            .with(Executable::new(executable))
            .with(ClassName::new(class_name))
            .with(ClassPath::new(class_path));

        options.add(RemoteDebugging::auto_detect_with(detector));
        options.add(settings.commercial_features_profile(detector));
        factory.configure_defaults(&mut options, detector);

        tracing::debug!(
            kind = factory.application_kind(),
            options = options.len(),
            "configured schema defaults"
        );
        Self { factory, options }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn options(&self) -> &OptionsByType {
        &self.options
    }

    pub fn with_option<T: LaunchOption>(mut self, value: T) -> Self {
        self.options.add(value);
        self
    }

    /// Adds a free-form virtual machine flag.
    pub fn with_jvm_option(self, flag: impl Into<String>) -> Self {
        self.with_option(Freeform::new(flag))
    }

    pub fn with_system_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.set_system_property(name, value);
        self
    }

    pub fn set_system_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let mut properties = self.options.get::<SystemProperties>().unwrap_or_default();
        properties.set(name, value);
        self.options.add(properties);
    }

    pub fn with_environment_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let variables = self
            .options
            .get::<EnvironmentVariables>()
            .unwrap_or_default()
            .with(name, value);
        self.options.add(variables);
        self
    }

    pub fn is_remote_debugging_enabled(&self) -> bool {
        self.options
            .get::<RemoteDebugging>()
            .is_some_and(|debugging| debugging.is_enabled())
    }

    /// System properties resolved for `platform`.
    pub fn system_properties(&self, platform: &dyn Platform) -> Properties {
        resolve_system_properties(&self.options, platform)
    }

    /// Exports `options` into the request handed to the process launcher.
    ///
    /// A `DisplayName` option, if present, replaces `name`.
    ///
    /// # Errors
    ///
    /// Returns `OptionError::NotConfigured` if the executable or main
    /// class has been removed from `options`.
    pub fn launch_request(
        &self,
        name: &str,
        platform: &dyn Platform,
        options: &OptionsByType,
    ) -> Result<LaunchRequest, OptionError> {
        let executable = options.require::<Executable>()?;
        let class_name = options.require::<ClassName>()?;
        let system_properties = resolve_system_properties(options, platform);
        let debugging = options
            .get::<RemoteDebugging>()
            .unwrap_or_else(RemoteDebugging::disabled);

        let mut arguments: Vec<String> = options
            .get_all::<Freeform>()
            .into_iter()
            .map(|flag| flag.to_string())
            .collect();
        arguments.extend(
            system_properties
                .iter()
                .map(|(name, value)| format!("-D{}={}", name, value)),
        );
        if let Some(class_path) = options.get::<ClassPath>() {
            arguments.push("-cp".to_string());
            arguments.push(class_path.to_string());
        }
        arguments.push(class_name.to_string());

        let name = options
            .get::<DisplayName>()
            .map(|display| display.to_string())
            .unwrap_or_else(|| name.to_string());

        Ok(LaunchRequest {
            name,
            executable: executable.to_string(),
            arguments,
            environment_variables: options
                .get::<EnvironmentVariables>()
                .unwrap_or_default()
                .variables()
                .clone(),
            system_properties,
            remote_debug: debugging.is_enabled(),
            remote_debug_port: debugging.port(),
        })
    }
}

impl<F: ApplicationFactory> MetaClass for JavaApplicationSchema<F> {
    fn application_kind(&self) -> &str {
        self.factory.application_kind()
    }
}

fn resolve_system_properties(options: &OptionsByType, platform: &dyn Platform) -> Properties {
    options
        .get::<SystemProperties>()
        .unwrap_or_default()
        .resolve(platform)
}
