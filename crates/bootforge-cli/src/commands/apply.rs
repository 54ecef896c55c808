//! Implementation of the `bootforge apply` command.
//!
//! Responsibility: translate CLI arguments into a project descriptor, run
//! the feature composer, export the staged manifest, and display results.
//! No business logic lives here.

use std::fs;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use bootforge_adapters::{
    EmbeddedMaterializer, JsonManifestBuildTool, LocalMaterializer, TracingSink,
};
use bootforge_core::application::{ExportService, FeatureService, ports::FileMaterializer};
use bootforge_core::domain::{ConfigValue, Environment, Feature, Project};

use crate::{
    cli::{ApplyArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Name of the staged-facts hand-off file written next to the sources.
const MANIFEST_FILE: &str = "bootforge-manifest.json";

/// Execute the `bootforge apply` command.
///
/// Dispatch sequence:
/// 1. Parse the requested feature names
/// 2. Build the project descriptor (package + typed config entries)
/// 3. Early-exit if `--dry-run`
/// 4. Apply each feature in the order given
/// 5. Export the staged manifest and write it to the project folder
#[instrument(skip_all, fields(dest = %args.dest.display()))]
pub fn execute(args: ApplyArgs, global: GlobalArgs) -> CliResult<()> {
    let output = OutputManager::new(&global);

    // 1. Features
    let features = parse_features(&args.features)?;

    // 2. Descriptor
    let mut project = build_project(&args)?;

    debug!(
        package = project.package_name().unwrap_or("<default>"),
        features = features.len(),
        "descriptor ready"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.print(&format!(
            "Dry run: would apply {} feature(s) to {}",
            features.len(),
            args.dest.display()
        ));
        for feature in &features {
            output.print(&format!("  {feature:<20} {}", feature.description()));
        }
        return Ok(());
    }

    // 4. Compose
    let materializer: Box<dyn FileMaterializer> = match &args.templates_dir {
        Some(dir) => Box::new(LocalMaterializer::new(dir)),
        None => Box::new(EmbeddedMaterializer::new()),
    };
    let service = FeatureService::new(materializer, Box::new(TracingSink::new()));

    output.header(&format!("Applying features to {}...", args.dest.display()));
    for feature in &features {
        info!(feature = %feature, "apply started");
        service.apply(&mut project, *feature)?;
    }

    // 5. Export
    let build_tool = JsonManifestBuildTool::new();
    ExportService::new(Box::new(build_tool.clone())).export(&project)?;
    let manifest_path = project.folder().join(MANIFEST_FILE);
    fs::write(&manifest_path, build_tool.render()?)?;

    let property_count = Environment::ALL
        .iter()
        .map(|e| project.properties().len(*e))
        .sum::<usize>();
    output.success(&format!(
        "Applied {} feature(s): {} dependencies, {} properties staged",
        features.len(),
        project.dependencies().len(),
        property_count,
    ));
    output.print(&format!("  manifest: {}", manifest_path.display()));

    Ok(())
}

// ── Argument translation ──────────────────────────────────────────────────────

fn parse_features(names: &[String]) -> CliResult<Vec<Feature>> {
    names
        .iter()
        .map(|name| {
            Feature::from_str(name).map_err(|_| CliError::UnknownFeature { name: name.clone() })
        })
        .collect()
}

fn build_project(args: &ApplyArgs) -> CliResult<Project> {
    let mut builder = Project::builder(&args.dest);

    if let Some(package) = &args.package {
        builder = builder
            .package_name(package)
            .map_err(|e| CliError::Core(e.into()))?;
    }
    for pair in &args.config {
        let (key, value) = parse_config_pair(pair)?;
        builder = builder.config(key, value);
    }
    Ok(builder.build())
}

/// Split a `KEY=VALUE` pair and coerce the value to its narrowest type:
/// bool, then integer, then string.
fn parse_config_pair(pair: &str) -> CliResult<(String, ConfigValue)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| CliError::InvalidConfigPair { pair: pair.into() })?;
    if key.is_empty() {
        return Err(CliError::InvalidConfigPair { pair: pair.into() });
    }

    let value = if let Ok(b) = value.parse::<bool>() {
        ConfigValue::Bool(b)
    } else if let Ok(n) = value.parse::<i64>() {
        ConfigValue::Int(n)
    } else {
        ConfigValue::Str(value.to_string())
    };
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_features_accepts_known_names() {
        let features = parse_features(&["web".into(), "undertow".into()]).unwrap();
        assert_eq!(features, vec![Feature::WebStack, Feature::Undertow]);
    }

    #[test]
    fn parse_features_rejects_unknown_names() {
        let result = parse_features(&["graphql".into()]);
        assert!(matches!(result, Err(CliError::UnknownFeature { .. })));
    }

    #[test]
    fn config_pairs_coerce_to_narrowest_type() {
        assert_eq!(
            parse_config_pair("serverPort=9090").unwrap().1,
            ConfigValue::Int(9090)
        );
        assert_eq!(
            parse_config_pair("flag=true").unwrap().1,
            ConfigValue::Bool(true)
        );
        assert_eq!(
            parse_config_pair("name=demo").unwrap().1,
            ConfigValue::Str("demo".into())
        );
    }

    #[test]
    fn config_pairs_without_equals_are_rejected() {
        assert!(matches!(
            parse_config_pair("serverPort"),
            Err(CliError::InvalidConfigPair { .. })
        ));
        assert!(matches!(
            parse_config_pair("=9090"),
            Err(CliError::InvalidConfigPair { .. })
        ));
    }
}
