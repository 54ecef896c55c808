//! Implementation of the `bootforge features` command.

use bootforge_core::domain::Feature;

use crate::{
    cli::{FeaturesArgs, FeaturesFormat, GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: FeaturesArgs, global: GlobalArgs) -> CliResult<()> {
    let output = OutputManager::new(&global);

    match args.format {
        FeaturesFormat::Table => {
            output.header("Available features:");
            for feature in Feature::ALL {
                output.print(&format!("  {:<20} {}", feature, feature.description()));
            }
        }

        FeaturesFormat::List => {
            for feature in Feature::ALL {
                println!("{feature}");
            }
        }

        FeaturesFormat::Json => {
            // Serialised to stdout directly (bypasses OutputManager because
            // JSON output must be parseable even in non-TTY pipes).
            let features: Vec<_> = Feature::ALL
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.to_string(),
                        "description": f.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&features).unwrap_or_else(|_| "[]".into()));
        }
    }

    Ok(())
}
