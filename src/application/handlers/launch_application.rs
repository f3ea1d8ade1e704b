//! LaunchApplicationHandler - Drives an application through its lifecycle.
//!
//! Profiles are taken from the merged options once, before `on_launching`
//! runs. The same set is consulted for `on_launched` and `on_closing`, so a
//! profile added by another profile's hook is never called.

use std::fmt;
use std::sync::Arc;

use crate::application::schema::{ApplicationFactory, JavaApplicationSchema, LaunchedProcess};
use crate::domain::foundation::{
    ApplicationError, LaunchError, LaunchId, LifecyclePhase, ObservationFailure, ProfileError,
};
use crate::domain::options::OptionsByType;
use crate::domain::profile::Profile;
use crate::ports::{Application, ApplicationConsole, Platform, ProcessLauncher};

/// Command to launch one application.
#[derive(Debug, Clone)]
pub struct LaunchApplicationCommand {
    pub name: String,
    pub platform: Arc<dyn Platform>,
    /// Launch-specific options. These override the schema's.
    pub options: OptionsByType,
}

/// Handler for launching applications.
pub struct LaunchApplicationHandler {
    launcher: Arc<dyn ProcessLauncher>,
    console: Arc<dyn ApplicationConsole>,
}

impl LaunchApplicationHandler {
    pub fn new(launcher: Arc<dyn ProcessLauncher>, console: Arc<dyn ApplicationConsole>) -> Self {
        Self { launcher, console }
    }

    /// Launches the application described by `schema`.
    ///
    /// # Errors
    ///
    /// - `Configuration` if a profile's `on_launching` fails; nothing is started
    /// - `NotConfigured` if a required option is missing
    /// - `Unsupported` if the factory cannot create the kind on the platform
    /// - `Spawn` if the launcher fails
    pub fn handle<F: ApplicationFactory>(
        &self,
        cmd: LaunchApplicationCommand,
        schema: &JavaApplicationSchema<F>,
    ) -> Result<ManagedApplication<F::Application>, LaunchError> {
        let launch_id = LaunchId::new();
        let span = tracing::info_span!("launch", %launch_id, name = %cmd.name);
        let _entered = span.enter();

        let LaunchApplicationCommand {
            name,
            platform,
            options: overrides,
        } = cmd;

        // 1. Merge schema options under the command's options
        let mut options = schema.options().clone();
        options.add_all(&overrides);
        let profiles = options.profiles();

        // 2. Let every profile configure the launch
        let phase = LifecyclePhase::Unattached.transition_to(LifecyclePhase::Launching)?;
        for profile in &profiles {
            tracing::debug!(profile = profile.name(), "running on_launching");
            profile
                .on_launching(platform.as_ref(), schema, &mut options)
                .map_err(|source| LaunchError::configuration(profile.name(), source))?;
        }

        if !schema.factory().supports(platform.as_ref()) {
            return Err(unsupported(schema, platform.as_ref()));
        }

        // 3. Start the process
        let request = schema.launch_request(&name, platform.as_ref(), &options)?;
        let process = self.launcher.spawn(platform.as_ref(), &request)?;
        tracing::info!(
            pid = process.id(),
            executable = %request.executable,
            arguments = request.arguments.len(),
            "process started"
        );

        // 4. Wrap it in a typed application
        let launched = LaunchedProcess {
            process,
            name: request.name,
            platform: platform.clone(),
            console: self.console.clone(),
            environment_variables: request.environment_variables,
            system_properties: request.system_properties,
            remote_debug_port: request.remote_debug_port,
        };
        let application = match schema.factory().create_application(launched) {
            Ok(application) => application,
            Err(mut rejected) => {
                if let Err(error) = rejected.process.terminate() {
                    tracing::warn!(error = %error, "rejected process did not terminate");
                }
                return Err(unsupported(schema, platform.as_ref()));
            }
        };

        // 5. Notify profiles; failures are reported, never undone
        let phase = phase.transition_to(LifecyclePhase::Launched)?;
        let observation_failures = notify(&profiles, phase, |profile| {
            profile.on_launched(platform.as_ref(), &application, &mut options)
        });

        Ok(ManagedApplication {
            launch_id,
            application,
            platform,
            options,
            profiles,
            phase,
            observation_failures,
            span: span.clone(),
        })
    }
}

fn unsupported<F: ApplicationFactory>(
    schema: &JavaApplicationSchema<F>,
    platform: &dyn Platform,
) -> LaunchError {
    LaunchError::Unsupported {
        kind: schema.factory().application_kind().to_string(),
        platform: platform.name().to_string(),
    }
}

fn notify(
    profiles: &[Arc<dyn Profile>],
    phase: LifecyclePhase,
    mut hook: impl FnMut(&dyn Profile) -> Result<(), ProfileError>,
) -> Vec<ObservationFailure> {
    let mut failures = Vec::new();
    for profile in profiles {
        if let Err(error) = hook(profile.as_ref()) {
            tracing::warn!(
                profile = profile.name(),
                %phase,
                error = %error,
                "profile failed to observe lifecycle change"
            );
            failures.push(ObservationFailure::new(profile.name(), phase, &error));
        }
    }
    failures
}

/// A launched application together with the options it was launched with.
pub struct ManagedApplication<A: Application> {
    launch_id: LaunchId,
    application: A,
    platform: Arc<dyn Platform>,
    options: OptionsByType,
    profiles: Vec<Arc<dyn Profile>>,
    phase: LifecyclePhase,
    observation_failures: Vec<ObservationFailure>,
    span: tracing::Span,
}

impl<A: Application> ManagedApplication<A> {
    pub fn launch_id(&self) -> LaunchId {
        self.launch_id
    }

    pub fn application(&self) -> &A {
        &self.application
    }

    pub fn application_mut(&mut self) -> &mut A {
        &mut self.application
    }

    /// Options as they stood after launch.
    pub fn options(&self) -> &OptionsByType {
        &self.options
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn observation_failures(&self) -> &[ObservationFailure] {
        &self.observation_failures
    }

    /// Runs `on_closing` for every profile, then closes the application.
    pub fn close(mut self) -> CloseReport {
        self.shut_down()
    }

    // Runs at most once: afterwards the phase is no longer `Launched`.
    fn shut_down(&mut self) -> CloseReport {
        let span = self.span.clone();
        let _entered = span.enter();

        let mut report = CloseReport {
            launch_id: self.launch_id,
            phase: self.phase,
            observation_failures: Vec::new(),
            close_error: None,
        };
        self.phase = match self.phase.transition_to(LifecyclePhase::Closing) {
            Ok(phase) => phase,
            Err(error) => {
                tracing::debug!(error = %error, "application already closing");
                return report;
            }
        };

        let application = &self.application;
        let platform = self.platform.as_ref();
        let options = &mut self.options;
        let failures = notify(&self.profiles, self.phase, |profile| {
            profile.on_closing(platform, application, options)
        });
        self.observation_failures.extend(failures);

        report.close_error = self.application.close().err();
        match &report.close_error {
            Some(error) => tracing::warn!(error = %error, "application did not close cleanly"),
            None => tracing::info!(name = self.application.name(), "application closed"),
        }
        self.phase = self.phase.transition_to(LifecyclePhase::Closed).unwrap_or(self.phase);

        report.phase = self.phase;
        report.observation_failures = std::mem::take(&mut self.observation_failures);
        report
    }
}

impl<A: Application> Drop for ManagedApplication<A> {
    fn drop(&mut self) {
        if self.phase.is_live() {
            tracing::warn!(launch_id = %self.launch_id, "managed application dropped without close");
            self.shut_down();
        }
    }
}

impl<A: Application> fmt::Debug for ManagedApplication<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedApplication")
            .field("launch_id", &self.launch_id)
            .field("name", &self.application.name())
            .field("platform", &self.platform.name())
            .field("phase", &self.phase)
            .field("options", &self.options)
            .finish()
    }
}

/// Outcome of closing a managed application.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseReport {
    pub launch_id: LaunchId,
    pub phase: LifecyclePhase,
    pub observation_failures: Vec<ObservationFailure>,
    pub close_error: Option<ApplicationError>,
}

impl CloseReport {
    pub fn is_clean(&self) -> bool {
        self.observation_failures.is_empty() && self.close_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryProcessLauncher, LocalPlatform, NullConsole, StaticLaunchArguments};
    use crate::domain::detection::ArgumentDetector;
    use crate::domain::options::{Freeform, LaunchOption};
    use crate::domain::profile::CommercialFeatures;
    use crate::ports::{MetaClass, ProcessHandle};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct TestApplication {
        name: String,
        process: Box<dyn ProcessHandle>,
    }

    impl Application for TestApplication {
        fn name(&self) -> &str {
            &self.name
        }

        fn process_id(&self) -> Option<u32> {
            Some(self.process.id())
        }

        fn close(&mut self) -> Result<(), ApplicationError> {
            self.process.terminate()
        }
    }

    struct TestFactory {
        supported: bool,
        creates: bool,
    }

    impl TestFactory {
        fn new() -> Self {
            Self {
                supported: true,
                creates: true,
            }
        }
    }

    impl ApplicationFactory for TestFactory {
        type Application = TestApplication;

        fn supports(&self, _platform: &dyn Platform) -> bool {
            self.supported
        }

        fn create_application(
            &self,
            launched: LaunchedProcess,
        ) -> Result<TestApplication, LaunchedProcess> {
            if !self.creates {
                return Err(launched);
            }
            Ok(TestApplication {
                name: launched.name,
                process: launched.process,
            })
        }
    }

    /// Records every hook call in a shared journal.
    #[derive(Debug, Clone)]
    struct Journal {
        name: &'static str,
        calls: Arc<Mutex<Vec<String>>>,
        fail_in: Option<LifecyclePhase>,
    }

    impl PartialEq for Journal {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name && Arc::ptr_eq(&self.calls, &other.calls)
        }
    }

    impl Journal {
        fn new(name: &'static str, calls: &Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                name,
                calls: calls.clone(),
                fail_in: None,
            }
        }

        fn failing_in(mut self, phase: LifecyclePhase) -> Self {
            self.fail_in = Some(phase);
            self
        }

        fn record(&self, phase: LifecyclePhase) -> Result<(), ProfileError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, phase));
            if self.fail_in == Some(phase) {
                return Err(ProfileError::Failed(format!("{} refused", self.name)));
            }
            Ok(())
        }
    }

    impl Profile for Journal {
        fn name(&self) -> &str {
            self.name
        }

        fn on_launching(
            &self,
            _: &dyn Platform,
            _: &dyn MetaClass,
            _: &mut OptionsByType,
        ) -> Result<(), ProfileError> {
            self.record(LifecyclePhase::Launching)
        }

        fn on_launched(
            &self,
            _: &dyn Platform,
            _: &dyn Application,
            _: &mut OptionsByType,
        ) -> Result<(), ProfileError> {
            self.record(LifecyclePhase::Launched)
        }

        fn on_closing(
            &self,
            _: &dyn Platform,
            _: &dyn Application,
            _: &mut OptionsByType,
        ) -> Result<(), ProfileError> {
            self.record(LifecyclePhase::Closing)
        }
    }

    impl LaunchOption for Journal {
        fn as_profile(&self) -> Option<Arc<dyn Profile>> {
            Some(Arc::new(self.clone()))
        }
    }

    // Distinct kind so two journals can be registered side by side.
    #[derive(Debug, Clone, PartialEq)]
    struct SecondJournal(Journal);

    impl LaunchOption for SecondJournal {
        fn as_profile(&self) -> Option<Arc<dyn Profile>> {
            Some(Arc::new(self.0.clone()))
        }
    }

    fn schema(factory: TestFactory) -> JavaApplicationSchema<TestFactory> {
        let detector = ArgumentDetector::new(Arc::new(StaticLaunchArguments::new(["-server"])));
        JavaApplicationSchema::with_detector(factory, "java", "com.example.Main", "app.jar", &detector)
    }

    fn handler(launcher: &Arc<InMemoryProcessLauncher>) -> LaunchApplicationHandler {
        LaunchApplicationHandler::new(launcher.clone(), Arc::new(NullConsole))
    }

    fn command(options: OptionsByType) -> LaunchApplicationCommand {
        LaunchApplicationCommand {
            name: "worker".to_string(),
            platform: Arc::new(LocalPlatform::new()),
            options,
        }
    }

    #[test]
    fn handle_launches_and_runs_profiles_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let options = OptionsByType::new()
            .with(Journal::new("first", &calls))
            .with(SecondJournal(Journal::new("second", &calls)));

        let managed = handler(&launcher)
            .handle(command(options), &schema(TestFactory::new()))
            .unwrap();

        assert_eq!(managed.phase(), LifecyclePhase::Launched);
        assert_eq!(managed.application().name(), "worker");
        assert_eq!(launcher.launch_count(), 1);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["first:Launching", "second:Launching", "first:Launched", "second:Launched"]
        );
    }

    #[test]
    fn on_launching_failure_aborts_before_spawn() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let options = OptionsByType::new()
            .with(Journal::new("strict", &calls).failing_in(LifecyclePhase::Launching));

        let err = handler(&launcher)
            .handle(command(options), &schema(TestFactory::new()))
            .unwrap_err();

        assert!(matches!(err, LaunchError::Configuration { ref profile, .. } if profile == "strict"));
        assert_eq!(launcher.launch_count(), 0);
    }

    #[test]
    fn on_launched_failure_is_collected_not_raised() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let options = OptionsByType::new()
            .with(Journal::new("noisy", &calls).failing_in(LifecyclePhase::Launched))
            .with(SecondJournal(Journal::new("quiet", &calls)));

        let managed = handler(&launcher)
            .handle(command(options), &schema(TestFactory::new()))
            .unwrap();

        assert_eq!(managed.phase(), LifecyclePhase::Launched);
        assert_eq!(managed.observation_failures().len(), 1);
        assert_eq!(managed.observation_failures()[0].profile, "noisy");
        assert!(calls.lock().unwrap().contains(&"quiet:Launched".to_string()));
    }

    #[test]
    fn close_runs_on_closing_then_terminates() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let options = OptionsByType::new()
            .with(Journal::new("watcher", &calls).failing_in(LifecyclePhase::Closing));

        let managed = handler(&launcher)
            .handle(command(options), &schema(TestFactory::new()))
            .unwrap();
        let launch_id = managed.launch_id();
        let report = managed.close();

        assert_eq!(report.launch_id, launch_id);
        assert_eq!(report.phase, LifecyclePhase::Closed);
        assert_eq!(report.observation_failures.len(), 1);
        assert!(report.close_error.is_none());
        assert!(!report.is_clean());
        assert!(launcher.processes()[0].is_terminated());
        assert_eq!(calls.lock().unwrap().last().unwrap(), "watcher:Closing");
    }

    #[test]
    fn unsupported_platform_starts_nothing() {
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let factory = TestFactory {
            supported: false,
            creates: true,
        };

        let err = handler(&launcher)
            .handle(command(OptionsByType::new()), &schema(factory))
            .unwrap_err();

        assert!(matches!(err, LaunchError::Unsupported { .. }));
        assert_eq!(launcher.launch_count(), 0);
    }

    #[test]
    fn rejected_process_is_terminated() {
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let factory = TestFactory {
            supported: true,
            creates: false,
        };

        let err = handler(&launcher)
            .handle(command(OptionsByType::new()), &schema(factory))
            .unwrap_err();

        assert!(matches!(err, LaunchError::Unsupported { ref kind, ref platform }
            if kind == "java" && platform == "local"));
        assert_eq!(launcher.launch_count(), 1);
        assert!(launcher.processes()[0].is_terminated());
    }

    #[test]
    fn dropping_without_close_shuts_down() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let options = OptionsByType::new().with(Journal::new("watcher", &calls));

        let managed = handler(&launcher)
            .handle(command(options), &schema(TestFactory::new()))
            .unwrap();
        assert!(!launcher.processes()[0].is_terminated());
        drop(managed);

        assert!(launcher.processes()[0].is_terminated());
        assert_eq!(calls.lock().unwrap().last().unwrap(), "watcher:Closing");
    }

    #[test]
    fn close_runs_on_closing_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let options = OptionsByType::new().with(Journal::new("watcher", &calls));

        let managed = handler(&launcher)
            .handle(command(options), &schema(TestFactory::new()))
            .unwrap();
        let report = managed.close();

        assert!(report.is_clean());
        let closings = calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| *call == "watcher:Closing")
            .count();
        assert_eq!(closings, 1);
    }

    #[test]
    fn spawn_failure_is_returned() {
        let launcher = Arc::new(InMemoryProcessLauncher::new().with_error("no capacity"));

        let err = handler(&launcher)
            .handle(command(OptionsByType::new()), &schema(TestFactory::new()))
            .unwrap_err();

        assert!(matches!(err, LaunchError::Spawn(_)));
    }

    #[test]
    fn command_options_override_schema_options() {
        let launcher = Arc::new(InMemoryProcessLauncher::new());
        let schema = schema(TestFactory::new()).with_jvm_option("-Xmx256m");
        let options = OptionsByType::new()
            .with(CommercialFeatures::enabled())
            .with(Freeform::new("-Xss1m"));

        let managed = handler(&launcher).handle(command(options), &schema).unwrap();
        let request = launcher.last_request().unwrap();

        assert_eq!(request.count_argument("-XX:+UnlockCommercialFeatures"), 1);
        assert_eq!(&request.arguments[..2], ["-Xmx256m", "-Xss1m"]);
        assert_eq!(
            managed.options().get::<CommercialFeatures>(),
            Some(CommercialFeatures::enabled())
        );
    }
}
