//! Feature composer.
//!
//! One public operation per feature; each is a fixed, ordered script of
//! ledger inserts, registry puts, and template materializations. The
//! scripts mutate the project descriptor in place and either complete fully
//! or fail fast on the first template error (no rollback — the caller
//! discards the descriptor).

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{DiagnosticSink, FileMaterializer},
        services::TemplateMaterializer,
    },
    domain::{
        ConfigLookup, DEFAULT_PACKAGE, Dependency, DependencyId, Environment, Feature, Project,
    },
    error::ForgeResult,
};

// ── Feature constants ────────────────────────────────────────────────────────

/// Template namespace of the web feature.
const WEB_SOURCE: &str = "server/web";

/// Destination sub-path for the exception-handling sources.
const EXCEPTION_DEST: &str = "web/rest/errors";

const DEFAULT_SERVER_PORT: i64 = 8080;
/// Sentinel telling the generated test harness to pick any free port.
const TEST_SERVER_PORT: i64 = 0;

const SPRINGDOC_VERSION: &str = "1.7.0";
const PROBLEM_SPRING_VERSION: &str = "0.27.0";

const EXCEPTION_MAIN_TEMPLATES: [&str; 6] = [
    "BadRequestException.java",
    "ErrorConstants.java",
    "ExceptionTranslator.java",
    "FieldErrorDto.java",
    "HeaderUtil.java",
    "ProblemConfiguration.java",
];

const EXCEPTION_TEST_TEMPLATES: [&str; 6] = [
    "BadRequestExceptionTest.java",
    "ExceptionTranslatorIT.java",
    "ExceptionTranslatorTest.java",
    "ExceptionTranslatorTestController.java",
    "FieldErrorDtoTest.java",
    "HeaderUtilTest.java",
];

fn starter_web() -> Dependency {
    Dependency::new("org.springframework.boot", "spring-boot-starter-web")
}

fn starter_tomcat_id() -> DependencyId {
    DependencyId::new("org.springframework.boot", "spring-boot-starter-tomcat")
}

fn starter_undertow() -> Dependency {
    Dependency::new("org.springframework.boot", "spring-boot-starter-undertow")
}

fn starter_validation() -> Dependency {
    Dependency::new("org.springframework.boot", "spring-boot-starter-validation")
}

fn springdoc() -> Dependency {
    Dependency::new("org.springdoc", "springdoc-openapi-ui")
        .with_version("${springdoc-openapi.version}")
}

fn problem_spring_web() -> Dependency {
    Dependency::new("org.zalando", "problem-spring-web")
        .with_version("${problem-spring-web.version}")
}

// ── Service ──────────────────────────────────────────────────────────────────

/// Applies features to a project descriptor.
pub struct FeatureService {
    materializer: TemplateMaterializer,
    diagnostics: Box<dyn DiagnosticSink>,
}

impl FeatureService {
    /// Create a new feature service with the given adapters.
    pub fn new(files: Box<dyn FileMaterializer>, diagnostics: Box<dyn DiagnosticSink>) -> Self {
        Self {
            materializer: TemplateMaterializer::new(files),
            diagnostics,
        }
    }

    /// Apply one named feature.
    #[instrument(skip_all, fields(feature = %feature, folder = %project.folder().display()))]
    pub fn apply(&self, project: &mut Project, feature: Feature) -> ForgeResult<()> {
        info!("Applying feature");
        match feature {
            Feature::WebStack => self.add_web_stack(project),
            Feature::Undertow => self.add_undertow(project),
            Feature::ExceptionHandling => self.add_exception_handling(project),
        }
    }

    /// Default entry point: the plain web stack.
    pub fn init(&self, project: &mut Project) -> ForgeResult<()> {
        self.add_web_stack(project)
    }

    /// Web stack on the default embedded server.
    pub fn add_web_stack(&self, project: &mut Project) -> ForgeResult<()> {
        project.dependencies_mut().insert(starter_web(), vec![]);
        self.add_springdoc(project);

        self.add_pathmatch_properties(project);
        self.add_server_port_properties(project);
        self.add_exception_handling(project)
    }

    /// Web stack on Undertow. The servlet starter is declared first, with
    /// the default server excluded, so the exclusion is owned by this
    /// feature under the ledger's first-wins policy.
    pub fn add_undertow(&self, project: &mut Project) -> ForgeResult<()> {
        project
            .dependencies_mut()
            .insert(starter_web(), vec![starter_tomcat_id()]);
        project.dependencies_mut().insert(starter_undertow(), vec![]);
        self.add_springdoc(project);

        self.add_pathmatch_properties(project);
        self.add_server_port_properties(project);
        self.add_exception_handling(project)
    }

    /// Centralized exception handling: problem-spring stack, disclosure
    /// defaults, and the handler sources for both trees.
    pub fn add_exception_handling(&self, project: &mut Project) -> ForgeResult<()> {
        project.properties_mut().put(
            Environment::Main,
            "problem-spring.version",
            PROBLEM_SPRING_VERSION,
        );
        project.properties_mut().put(
            Environment::Main,
            "problem-spring-web.version",
            "${problem-spring.version}",
        );

        project
            .dependencies_mut()
            .insert(problem_spring_web(), vec![]);
        project
            .dependencies_mut()
            .insert(starter_validation(), vec![]);

        project
            .properties_mut()
            .put(Environment::Main, "application.exception.details", false);

        let package_name = project.package_name().unwrap_or(DEFAULT_PACKAGE).to_string();
        project.properties_mut().put(
            Environment::Main,
            "application.exception.package",
            format!("org.,java.,net.,javax.,com.,io.,de.,{package_name}"),
        );
        project.properties_mut().put(
            Environment::Test,
            "application.exception.package",
            "org.,java.",
        );

        for filename in EXCEPTION_MAIN_TEMPLATES {
            self.materializer.materialize(
                project,
                WEB_SOURCE,
                Environment::Main,
                filename,
                EXCEPTION_DEST,
            )?;
        }
        for filename in EXCEPTION_TEST_TEMPLATES {
            self.materializer.materialize(
                project,
                WEB_SOURCE,
                Environment::Test,
                filename,
                EXCEPTION_DEST,
            )?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn add_springdoc(&self, project: &mut Project) {
        project.dependencies_mut().insert(springdoc(), vec![]);
        project.properties_mut().put(
            Environment::Main,
            "springdoc-openapi.version",
            SPRINGDOC_VERSION,
        );
    }

    fn add_pathmatch_properties(&self, project: &mut Project) {
        for environment in Environment::ALL {
            project.properties_mut().put(
                environment,
                "spring.mvc.pathmatch.matching-strategy",
                "ant_path_matcher",
            );
        }
    }

    /// The main tree gets the resolved port; the test tree always gets the
    /// pick-any-free-port sentinel so parallel test runs never collide.
    fn add_server_port_properties(&self, project: &mut Project) {
        let port = self.resolve_server_port(project);
        project
            .properties_mut()
            .put(Environment::Main, "server.port", port);
        project
            .properties_mut()
            .put(Environment::Test, "server.port", TEST_SERVER_PORT);
    }

    /// Read the optional `serverPort` config. A present-but-malformed value
    /// is recovered with a warning and the documented default; it never
    /// aborts the run.
    fn resolve_server_port(&self, project: &Project) -> i64 {
        match project.integer_config("serverPort") {
            ConfigLookup::Present(port) => port,
            ConfigLookup::Absent => DEFAULT_SERVER_PORT,
            ConfigLookup::Invalid { reason } => {
                self.diagnostics.warn(&format!(
                    "serverPort is not a valid integer ({reason}); using {DEFAULT_SERVER_PORT}"
                ));
                DEFAULT_SERVER_PORT
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockDiagnosticSink, MockFileMaterializer};
    use crate::domain::PropertyValue;

    fn accepting_files() -> MockFileMaterializer {
        let mut files = MockFileMaterializer::new();
        files.expect_template().returning(|_, _, _, _| Ok(()));
        files
    }

    fn silent_sink() -> MockDiagnosticSink {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_warn().times(0).return_const(());
        sink
    }

    fn service(files: MockFileMaterializer, sink: MockDiagnosticSink) -> FeatureService {
        FeatureService::new(Box::new(files), Box::new(sink))
    }

    fn project() -> Project {
        Project::builder("/tmp/demo")
            .package_name("com.acme.app")
            .unwrap()
            .build()
    }

    // ── port resolution ───────────────────────────────────────────────────

    #[test]
    fn server_port_defaults_when_absent() {
        let service = service(accepting_files(), silent_sink());
        let mut project = project();
        service.add_web_stack(&mut project).unwrap();

        assert_eq!(
            project.properties().get(Environment::Main, "server.port"),
            Some(&PropertyValue::Int(8080))
        );
    }

    #[test]
    fn server_port_uses_configured_value() {
        let service = service(accepting_files(), silent_sink());
        let mut project = Project::builder("/tmp/demo")
            .config("serverPort", 9090)
            .build();
        service.add_web_stack(&mut project).unwrap();

        assert_eq!(
            project.properties().get(Environment::Main, "server.port"),
            Some(&PropertyValue::Int(9090))
        );
    }

    #[test]
    fn invalid_server_port_warns_once_and_defaults() {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_warn()
            .withf(|message| message.contains("serverPort"))
            .times(1)
            .return_const(());

        let service = service(accepting_files(), sink);
        let mut project = Project::builder("/tmp/demo")
            .config("serverPort", "eight-thousand")
            .build();
        service.add_web_stack(&mut project).unwrap();

        assert_eq!(
            project.properties().get(Environment::Main, "server.port"),
            Some(&PropertyValue::Int(8080))
        );
    }

    #[test]
    fn test_port_is_always_the_sentinel() {
        let service = service(accepting_files(), silent_sink());
        let mut project = Project::builder("/tmp/demo")
            .config("serverPort", 9090)
            .build();
        service.add_web_stack(&mut project).unwrap();

        assert_eq!(
            project.properties().get(Environment::Test, "server.port"),
            Some(&PropertyValue::Int(0))
        );
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn web_stack_is_idempotent() {
        let service = service(accepting_files(), silent_sink());

        let mut once = project();
        service.add_web_stack(&mut once).unwrap();

        let mut twice = project();
        service.add_web_stack(&mut twice).unwrap();
        service.add_web_stack(&mut twice).unwrap();

        assert_eq!(once.dependencies(), twice.dependencies());
        assert_eq!(once.properties(), twice.properties());
    }

    #[test]
    fn undertow_owns_the_tomcat_exclusion() {
        let service = service(accepting_files(), silent_sink());
        let mut project = project();
        service.add_undertow(&mut project).unwrap();

        let entry = project.dependencies().get(starter_web().id()).unwrap();
        assert_eq!(entry.exclusions, vec![starter_tomcat_id()]);
        assert!(project.dependencies().contains(starter_undertow().id()));
    }

    #[test]
    fn exception_handling_requests_twelve_templates_under_package_path() {
        let mut files = MockFileMaterializer::new();
        files
            .expect_template()
            .withf(|_, source_dir, _, destination_dir| {
                source_dir.starts_with("server/web/")
                    && destination_dir.ends_with("com/acme/app/web/rest/errors")
            })
            .times(12)
            .returning(|_, _, _, _| Ok(()));

        let service = service(files, silent_sink());
        let mut project = project();
        service.add_exception_handling(&mut project).unwrap();
    }

    #[test]
    fn exception_allowlist_seeds_platform_prefixes_and_project_package() {
        let service = service(accepting_files(), silent_sink());
        let mut project = project();
        service.add_exception_handling(&mut project).unwrap();

        assert_eq!(
            project
                .properties()
                .get(Environment::Main, "application.exception.package"),
            Some(&PropertyValue::Str(
                "org.,java.,net.,javax.,com.,io.,de.,com.acme.app".into()
            ))
        );
        assert_eq!(
            project
                .properties()
                .get(Environment::Test, "application.exception.package"),
            Some(&PropertyValue::Str("org.,java.".into()))
        );
    }

    #[test]
    fn init_applies_the_web_stack() {
        let service = service(accepting_files(), silent_sink());
        let mut project = project();
        service.init(&mut project).unwrap();

        assert!(project.dependencies().contains(starter_web().id()));
    }
}
