use super::{lookup, names, ThemeRecord};

/// Why a theme argument could not be resolved.
///
/// The `Display` text is what the user sees; nothing is written to disk
/// before one of these is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("Usage: theme [{options}]", options = joined("|"))]
    Missing,
    #[error("Theme '{0}' does not exist. Options: {options}", options = joined(", "))]
    Unknown(String),
}

fn joined(sep: &str) -> String {
    names().collect::<Vec<_>>().join(sep)
}

/// Resolve the raw command argument to a catalog entry, ignoring case.
pub fn select(arg: Option<&str>) -> Result<&'static ThemeRecord, SelectError> {
    let Some(raw) = arg else {
        return Err(SelectError::Missing);
    };
    let name = raw.to_lowercase();
    lookup(&name).ok_or(SelectError::Unknown(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_prints_usage() {
        let err = select(None).unwrap_err();
        assert_eq!(err, SelectError::Missing);
        assert_eq!(err.to_string(), "Usage: theme [ocean|fire|forest]");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(select(Some("Ocean")).unwrap().id, "ocean");
        assert_eq!(select(Some("OCEAN")).unwrap(), select(Some("ocean")).unwrap());
    }

    #[test]
    fn unknown_theme_names_value_and_options() {
        let err = select(Some("lava")).unwrap_err();
        assert_eq!(err, SelectError::Unknown("lava".into()));
        assert_eq!(
            err.to_string(),
            "Theme 'lava' does not exist. Options: ocean, fire, forest"
        );
    }

    #[test]
    fn empty_argument_is_unknown() {
        assert_eq!(select(Some("")).unwrap_err(), SelectError::Unknown(String::new()));
    }
}
