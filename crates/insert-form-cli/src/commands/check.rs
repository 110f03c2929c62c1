use anyhow::{bail, Result};
use insert_form_validation::FormSession;

use super::{print_outcome, print_summary};

/// Splits `input=value`; the value may be empty
fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("Expected input=value, got '{}'", pair),
    }
}

/// Applies every pair as an edit and reports whether submit ended up enabled
pub fn execute(session: &mut FormSession, pairs: &[String]) -> Result<bool> {
    for pair in pairs {
        let (name, value) = parse_pair(pair)?;
        let outcome = session.on_input_edited(name, value)?;
        print_outcome(&outcome, value);
    }

    print_summary(session);
    Ok(session.all_valid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("name=Giulio").unwrap(), ("name", "Giulio"));
        assert_eq!(parse_pair("email=").unwrap(), ("email", ""));
        assert_eq!(parse_pair("street=Via=Roma").unwrap(), ("street", "Via=Roma"));
        assert!(parse_pair("Giulio").is_err());
        assert!(parse_pair("=Giulio").is_err());
    }

    #[test]
    fn test_execute_reports_gate() {
        let mut session = FormSession::new();
        let pairs = vec!["name=Giulio".to_string(), "nap=6900".to_string()];
        assert!(!execute(&mut session, &pairs).unwrap());
        assert_eq!(session.registry().valid_count(), 2);
    }

    #[test]
    fn test_execute_rejects_unknown_field() {
        let mut session = FormSession::new();
        let pairs = vec!["hobby=chess".to_string()];
        let err = execute(&mut session, &pairs).unwrap_err();
        assert!(err.to_string().contains("hobby"));
    }
}
