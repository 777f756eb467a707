//! Reading import documents into line-item groups.

use std::path::{Path, PathBuf};

use thiserror::Error;

use tally_billing::{LineItemGroup, LineItemGroupInput};
use tally_core::DomainError;

/// Import failure.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid import document: {0}")]
    Json(#[from] serde_json::Error),

    /// A group (and optionally one of its items) failed domain validation.
    #[error("group #{group}{}: {source}", .item.map(|i| format!(", item #{i}")).unwrap_or_default())]
    Domain {
        group: usize,
        item: Option<usize>,
        #[source]
        source: DomainError,
    },
}

impl ImportError {
    /// The domain error behind this failure, if any.
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            ImportError::Domain { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse a JSON array of groups.
///
/// Every price and quantity is parsed here; the first malformed value aborts the
/// whole document.
pub fn parse_document(text: &str) -> Result<Vec<LineItemGroup>, ImportError> {
    let inputs: Vec<LineItemGroupInput> = serde_json::from_str(text)?;

    inputs
        .into_iter()
        .enumerate()
        .map(|(group, input)| {
            input
                .into_group()
                .map_err(|(item, source)| ImportError::Domain { group, item, source })
        })
        .collect()
}

/// Read and parse one import file.
pub fn load_file(path: &Path) -> Result<Vec<LineItemGroup>, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_document(&text)?;
    tracing::info!(path = %path.display(), groups = groups.len(), "loaded import file");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use core::str::FromStr;

    #[test]
    fn parses_groups_in_document_order() {
        let groups = parse_document(
            r#"[
                {"key": "B", "items": [{"name": "x", "price": "1.10", "quantity": "2"}]},
                {"key": "A", "items": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key().as_str(), "B");
        assert_eq!(groups[0].total(), BigDecimal::from_str("2.2").unwrap());
        assert!(groups[1].is_empty());
    }

    #[test]
    fn malformed_quantity_points_at_group_and_item() {
        let err = parse_document(
            r#"[
                {"key": "ok", "items": []},
                {"key": "bad", "items": [
                    {"name": "a", "price": "1", "quantity": "1"},
                    {"name": "b", "price": "1", "quantity": "1kg"}
                ]}
            ]"#,
        )
        .unwrap_err();

        match &err {
            ImportError::Domain { group, item, source } => {
                assert_eq!(*group, 1);
                assert_eq!(*item, Some(1));
                assert_eq!(source, &DomainError::malformed_numeric("quantity", "1kg"));
            }
            other => panic!("Expected domain error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "group #1, item #1: malformed numeric input for `quantity`: \"1kg\""
        );
    }

    #[test]
    fn float_and_null_prices_are_domain_errors() {
        for price in ["12345678901234567.89", "0.30000000000000001", "null", "true"] {
            let doc = format!(
                r#"[{{"key": "A", "items": [{{"name": "a", "price": {price}, "quantity": "1"}}]}}]"#
            );
            let err = parse_document(&doc).unwrap_err();
            match err {
                ImportError::Domain { group: 0, item: Some(0), source } => {
                    assert!(source.is_malformed_numeric(), "price {price}: {source}");
                }
                other => panic!("Expected malformed numeric input for {price}, got {other:?}"),
            }
        }
    }

    #[test]
    fn long_decimal_strings_import_exactly() {
        let groups = parse_document(
            r#"[{"key": "A", "items": [
                {"name": "a", "price": "12345678901234567.89", "quantity": "1"},
                {"name": "b", "price": "0.30000000000000001", "quantity": "1"}
            ]}]"#,
        )
        .unwrap();
        assert_eq!(
            groups[0].total(),
            BigDecimal::from_str("12345678901234568.19000000000000001").unwrap()
        );
    }

    #[test]
    fn empty_key_has_no_item_index() {
        let err = parse_document(r#"[{"key": ""}]"#).unwrap_err();
        assert_eq!(err.to_string(), "group #0: validation failed: group key must not be empty");
        assert!(!err.domain_error().unwrap().is_malformed_numeric());
    }

    #[test]
    fn non_array_document_is_a_json_error() {
        let err = parse_document(r#"{"key": "A"}"#).unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
        assert!(err.domain_error().is_none());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
