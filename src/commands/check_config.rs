//! Implementation of the `svgplan check-config` command.

use crate::cli::CheckConfigArgs;
use crate::error::{PlanError, Result};
use crate::inputs::SvgoVersion;
use crate::svgo_config::parse_raw_svgo_config;

/// Execute the `svgplan check-config` command.
///
/// Prints the parsed options as pretty JSON. A parse error is a user error.
pub fn cmd_check_config(args: CheckConfigArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.path).map_err(|e| {
        PlanError::UserError(format!(
            "failed to read SVGO configuration '{}': {}",
            args.path.display(),
            e
        ))
    })?;

    let version = SvgoVersion::from_number(f64::from(args.svgo_version)).unwrap_or_default();
    let parsed = parse_raw_svgo_config(&raw, version);

    if let Some(err) = parsed.error {
        return Err(PlanError::UserError(format!(
            "'{}' is not a valid SVGO v{} configuration: {}",
            args.path.display(),
            version,
            err
        )));
    }

    let out = serde_json::to_string_pretty(&parsed.value)
        .map_err(|e| PlanError::UserError(format!("failed to serialize options: {}", e)))?;
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_check_valid_module_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svgo.config.js");
        std::fs::write(&path, "module.exports = { multipass: true };").unwrap();

        let result = cmd_check_config(CheckConfigArgs {
            path,
            svgo_version: 2,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_invalid_yaml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".svgo.yml");
        std::fs::write(&path, "plugins: [").unwrap();

        let err = cmd_check_config(CheckConfigArgs {
            path,
            svgo_version: 1,
        })
        .unwrap_err();
        assert!(matches!(err, PlanError::UserError(_)));
        assert!(err.to_string().contains("not a valid SVGO v1 configuration"));
    }

    #[test]
    fn test_check_missing_file() {
        let err = cmd_check_config(CheckConfigArgs {
            path: PathBuf::from("/nonexistent/svgo.config.js"),
            svgo_version: 2,
        })
        .unwrap_err();
        assert!(err.to_string().contains("failed to read SVGO configuration"));
    }
}
