//! Cadence-JSON argument files
//!
//! Deployment arguments are stored as Cadence-JSON arrays, one element per
//! transaction parameter:
//!
//! ```json
//! [
//!   { "type": "String", "value": "6080604052..." },
//!   { "type": "UInt64", "value": "15000000" }
//! ]
//! ```
//!
//! EVM bytecode is the first element of the EVM deployment argument files.
//! Bridged asset templates are too large for a single transaction argument,
//! so their source is stored as an `Array` of hex-encoded chunks in the
//! second element.
//!
//! These files are build-time configuration: a file with an unexpected shape
//! is a [`TemplateError::MalformedArguments`], which callers should treat as
//! fatal.

use alloy_primitives::{hex, Bytes};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::TemplateSource;
use crate::error::{Result, TemplateError};
use crate::spans;

/// One element of a Cadence-JSON argument array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceArgument {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub value: Value,
}

impl CadenceArgument {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            type_tag: "String".to_string(),
            value: Value::String(value.into()),
        }
    }

    /// An `Array` of `String` elements.
    pub fn string_array<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let elements = values
            .into_iter()
            .map(|v| {
                let value: String = v.into();
                json!({ "type": "String", "value": value })
            })
            .collect();
        Self {
            type_tag: "Array".to_string(),
            value: Value::Array(elements),
        }
    }
}

/// Bridged asset templates whose code ships as chunked arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgedAsset {
    Nft,
    Token,
}

impl BridgedAsset {
    /// Catalog path of the emulator chunk arguments for this asset.
    pub const fn chunks_path(self) -> &'static str {
        match self {
            Self::Nft => "cadence/args/bridged-nft-code-chunks-args-emulator.json",
            Self::Token => "cadence/args/bridged-token-code-chunks-args-emulator.json",
        }
    }
}

fn malformed(path: &str, reason: impl Into<String>) -> TemplateError {
    TemplateError::MalformedArguments {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn parse_arguments(json: &str, path: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(malformed(path, "expected a JSON array of arguments")),
    }
}

/// Returns the string `value` of the first argument in `json`.
///
/// `path` is only used in error messages.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::args::bytecode_from_json;
///
/// let json = r#"[{"type":"String","value":"0xAB12"},{"type":"UInt64","value":"15000000"}]"#;
/// assert_eq!(bytecode_from_json(json, "deploy-args.json").unwrap(), "0xAB12");
/// ```
pub fn bytecode_from_json(json: &str, path: &str) -> Result<String> {
    let arguments = parse_arguments(json, path)?;
    let first = arguments
        .first()
        .ok_or_else(|| malformed(path, "argument list is empty"))?;

    first
        .get("value")
        .ok_or_else(|| malformed(path, "first argument has no value"))?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| malformed(path, "first argument value is not a string"))
}

/// Returns the chunk strings held in the second argument of `json`.
///
/// The second argument must be tagged `Array`, and each element must be an
/// object with a string `value`. Order is preserved.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::args::code_chunks_from_json;
///
/// let json = r#"[
///     {"type":"String","value":"bridgedNFT"},
///     {"type":"Array","value":[{"value":"chunk1"},{"value":"chunk2"}]}
/// ]"#;
/// assert_eq!(code_chunks_from_json(json, "chunks.json").unwrap(), vec!["chunk1", "chunk2"]);
/// ```
pub fn code_chunks_from_json(json: &str, path: &str) -> Result<Vec<String>> {
    let arguments = parse_arguments(json, path)?;
    let second = arguments
        .get(1)
        .ok_or_else(|| malformed(path, "missing second argument"))?;
    let second: CadenceArgument = serde_json::from_value(second.clone())
        .map_err(|e| malformed(path, format!("second argument is not a Cadence value: {e}")))?;

    if second.type_tag != "Array" {
        return Err(malformed(
            path,
            format!("second argument is of type {}, expected Array", second.type_tag),
        ));
    }

    let elements = second
        .value
        .as_array()
        .ok_or_else(|| malformed(path, "Array argument value is not a list"))?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_object()
                .ok_or_else(|| malformed(path, format!("chunk {index} is not an object")))?
                .get("value")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| malformed(path, format!("chunk {index} has no string value")))
        })
        .collect()
}

/// Reads the EVM bytecode from the argument file at `path`.
pub fn extract_bytecode<S: TemplateSource + ?Sized>(catalog: &S, path: &str) -> Result<String> {
    let span = spans::read_arguments(path, "bytecode");
    let _guard = span.enter();

    let result = catalog
        .read_to_string(path)
        .and_then(|json| bytecode_from_json(&json, path));
    if let Err(ref e) = result {
        spans::record_error(e);
    }
    result
}

/// Reads the chunked contract code from the argument file at `path`.
pub fn extract_code_chunks<S: TemplateSource + ?Sized>(
    catalog: &S,
    path: &str,
) -> Result<Vec<String>> {
    let span = spans::read_arguments(path, "code_chunks");
    let _guard = span.enter();

    let result = catalog
        .read_to_string(path)
        .and_then(|json| code_chunks_from_json(&json, path));
    if let Err(ref e) = result {
        spans::record_error(e);
    }
    result
}

/// Reads the chunked template code of a bridged NFT or fungible token.
pub fn bridged_code_chunks<S: TemplateSource + ?Sized>(
    catalog: &S,
    asset: BridgedAsset,
) -> Result<Vec<String>> {
    extract_code_chunks(catalog, asset.chunks_path())
}

/// Decodes a hex bytecode string, with or without `0x`.
pub fn decode_bytecode(bytecode: &str) -> Result<Bytes> {
    Ok(hex::decode(bytecode)?.into())
}

/// Hex-encodes contract source for submission as code chunks.
///
/// With a separator the source is split on it first and each part is encoded
/// separately; the separator itself is dropped. Without one the whole source
/// becomes a single chunk.
///
/// # Example
///
/// ```rust
/// use flow_evm_bridge_rs::args::code_hex;
///
/// assert_eq!(code_hex("ab", None), vec!["6162"]);
/// assert_eq!(code_hex("a{{NAME}}b", Some("{{NAME}}")), vec!["61", "62"]);
/// ```
pub fn code_hex(source: &str, separator: Option<&str>) -> Vec<String> {
    match separator {
        Some(separator) if !separator.is_empty() => {
            source.split(separator).map(hex::encode).collect()
        }
        _ => vec![hex::encode(source)],
    }
}

/// Builds the argument array for `upsert_contract_code_chunks`:
/// the template tag followed by the hex chunks of `source`.
pub fn code_chunk_arguments(
    template_tag: &str,
    source: &str,
    separator: Option<&str>,
) -> Vec<CadenceArgument> {
    vec![
        CadenceArgument::string(template_tag),
        CadenceArgument::string_array(code_hex(source, separator)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;
    use crate::testing::InMemoryCatalog;
    use rstest::rstest;

    #[test]
    fn test_bytecode_from_first_element() {
        let json = r#"[{"type":"String","value":"0xAB"},{"type":"UInt64","value":"15000000"}]"#;
        assert_eq!(bytecode_from_json(json, "args.json").unwrap(), "0xAB");
    }

    #[rstest]
    #[case::empty_array("[]")]
    #[case::not_an_array(r#"{"type":"String","value":"0xAB"}"#)]
    #[case::no_value(r#"[{"type":"String"}]"#)]
    #[case::non_string_value(r#"[{"type":"UInt64","value":15}]"#)]
    fn test_bytecode_shape_errors(#[case] json: &str) {
        let err = bytecode_from_json(json, "args.json").unwrap_err();
        assert!(matches!(err, TemplateError::MalformedArguments { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = bytecode_from_json("[{", "args.json").unwrap_err();
        assert!(matches!(err, TemplateError::Json(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_code_chunks_keep_order() {
        let json = r#"[
            {"type":"String","value":"bridgedToken"},
            {"type":"Array","value":[{"value":"chunk1"},{"value":"chunk2"},{"value":"chunk3"}]}
        ]"#;
        assert_eq!(
            code_chunks_from_json(json, "chunks.json").unwrap(),
            vec!["chunk1", "chunk2", "chunk3"]
        );
    }

    #[rstest]
    #[case::missing_second(r#"[{"type":"String","value":"x"}]"#)]
    #[case::wrong_type(r#"[{"type":"String","value":"x"},{"type":"String","value":"y"}]"#)]
    #[case::value_not_list(r#"[{"type":"String","value":"x"},{"type":"Array","value":"y"}]"#)]
    #[case::chunk_not_object(r#"[{"type":"String","value":"x"},{"type":"Array","value":["y"]}]"#)]
    #[case::chunk_not_string(r#"[{"type":"String","value":"x"},{"type":"Array","value":[{"value":1}]}]"#)]
    fn test_code_chunk_shape_errors(#[case] json: &str) {
        let err = code_chunks_from_json(json, "chunks.json").unwrap_err();
        assert!(matches!(err, TemplateError::MalformedArguments { .. }));
    }

    #[test]
    fn test_wrong_type_message_names_the_tag() {
        let json = r#"[{"type":"String","value":"x"},{"type":"Dictionary","value":[]}]"#;
        let err = code_chunks_from_json(json, "chunks.json").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Malformed arguments in chunks.json: second argument is of type Dictionary, expected Array"
        );
    }

    #[test]
    fn test_extract_from_catalog() {
        let catalog = InMemoryCatalog::new()
            .with_file("args/deploy.json", r#"[{"type":"String","value":"6080"}]"#);
        assert_eq!(extract_bytecode(&catalog, "args/deploy.json").unwrap(), "6080");
        assert!(matches!(
            extract_bytecode(&catalog, "args/missing.json"),
            Err(TemplateError::TemplateNotFound { .. })
        ));
    }

    #[rstest]
    #[case(BridgedAsset::Nft)]
    #[case(BridgedAsset::Token)]
    fn test_embedded_bridged_chunks_decode_to_template(#[case] asset: BridgedAsset) {
        let chunks = bridged_code_chunks(&EmbeddedCatalog::new(), asset).unwrap();
        assert!(chunks.len() >= 2);

        let first = hex::decode(&chunks[0]).unwrap();
        let first = String::from_utf8(first).unwrap();
        assert!(first.contains("access(all) contract "));
    }

    #[test]
    fn test_decode_bytecode_accepts_prefix() {
        assert_eq!(decode_bytecode("0x6080").unwrap().to_vec(), vec![0x60, 0x80]);
        assert_eq!(decode_bytecode("6080").unwrap().to_vec(), vec![0x60, 0x80]);
        assert!(matches!(decode_bytecode("0xZZ"), Err(TemplateError::Hex(_))));
    }

    #[test]
    fn test_code_chunk_arguments_are_readable_as_chunks() {
        let arguments = code_chunk_arguments("bridgedNFT", "one|two", Some("|"));
        let json = serde_json::to_string(&arguments).unwrap();
        assert_eq!(
            code_chunks_from_json(&json, "generated.json").unwrap(),
            vec![hex::encode("one"), hex::encode("two")]
        );
    }
}
