use std::{error::Error, fs::File, path::Path};

use serde::Deserialize;

use crate::generation::Dialect;

/// Output dialect as written in a config file. Every field is optional and falls
/// back to the Fortran default.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct ConfigDialect {
    comment_prefix: Option<String>,
    first_branch: Option<String>,
    next_branch: Option<String>,
    end_branches: Option<String>,
    assignment: Option<String>,
    continuation: Option<char>,
    line_width: Option<usize>,
    matrices: Option<ConfigMatrices>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
struct ConfigMatrices {
    nuclear: Option<String>,
    kinetic: Option<String>,
    momentum: Option<String>,
    basis: Option<String>,
}

impl ConfigDialect {
    /// Reads a JSON dialect file and fills the missing fields with the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Dialect, Box<dyn Error + Send + Sync>> {
        let config: ConfigDialect = serde_json::from_reader(File::open(path)?)?;
        Ok(config.into())
    }
}

impl From<ConfigDialect> for Dialect {
    fn from(value: ConfigDialect) -> Self {
        let defaults = Dialect::default();
        let matrices = value.matrices.unwrap_or_default();

        Self {
            comment_prefix: value.comment_prefix.unwrap_or(defaults.comment_prefix),
            first_branch: value.first_branch.unwrap_or(defaults.first_branch),
            next_branch: value.next_branch.unwrap_or(defaults.next_branch),
            end_branches: value.end_branches.unwrap_or(defaults.end_branches),
            assignment: value.assignment.unwrap_or(defaults.assignment),
            continuation: value.continuation.unwrap_or(defaults.continuation),
            line_width: value.line_width.unwrap_or(defaults.line_width),
            nuclear_matrix: matrices.nuclear.unwrap_or(defaults.nuclear_matrix),
            kinetic_matrix: matrices.kinetic.unwrap_or(defaults.kinetic_matrix),
            momentum_matrix: matrices.momentum.unwrap_or(defaults.momentum_matrix),
            basis_matrix: matrices.basis.unwrap_or(defaults.basis_matrix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_default_dialect() {
        let config: ConfigDialect = serde_json::from_str("{}").unwrap();
        assert_eq!(Dialect::from(config), Dialect::default());
    }

    #[test]
    fn partial_override() {
        let config: ConfigDialect = serde_json::from_str(
            r#"{
                "first_branch": "IF (ISW .EQ. {code}) THEN",
                "line_width": 72,
                "matrices": { "basis": "gmat" }
            }"#,
        )
        .unwrap();
        let dialect = Dialect::from(config);

        assert_eq!(dialect.branch(true, 3), "IF (ISW .EQ. 3) THEN");
        assert_eq!(dialect.line_width, 72);
        assert_eq!(dialect.basis_matrix, "gmat");
        assert_eq!(dialect.kinetic_matrix, "wo");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<ConfigDialect>(r#"{ "width": 80 }"#).is_err());
    }
}
