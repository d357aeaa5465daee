use anyhow::{Context, bail};
use serde_yaml::Value;

use crate::provider::BareConfig;

/// Load a config record from a YAML file.
///
/// Accepts either a flat mapping of keys to scalar values or a ConfigMap
/// manifest, in which case its `data` section is used. Returns an empty
/// record if the file doesn't exist.
///
/// ```yaml
/// warmImport.maxFailures: 10
/// importWithoutTemplate: true
/// ```
pub fn load_record_file(path: &str) -> anyhow::Result<BareConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BareConfig::new());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path)),
    };
    parse_record(&content).with_context(|| format!("invalid config record in {}", path))
}

/// Parse the YAML text of a config record.
pub fn parse_record(content: &str) -> anyhow::Result<BareConfig> {
    if content.trim().is_empty() {
        return Ok(BareConfig::new());
    }
    let doc: Value = serde_yaml::from_str(content)?;
    let mapping = match doc {
        Value::Null => return Ok(BareConfig::new()),
        Value::Mapping(m) => m,
        _ => bail!("config record must be a YAML mapping"),
    };

    let is_manifest = mapping.get("kind").and_then(Value::as_str) == Some("ConfigMap");
    let mapping = if is_manifest {
        match mapping.get("data") {
            Some(Value::Mapping(data)) => data.clone(),
            None | Some(Value::Null) => return Ok(BareConfig::new()),
            Some(_) => bail!("ConfigMap data must be a mapping"),
        }
    } else {
        mapping
    };

    let mut record = BareConfig::new();
    for (key, value) in mapping {
        let Some(key) = key.as_str() else {
            bail!("config record keys must be strings, got {:?}", key);
        };
        let value = match value {
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            _ => bail!("value of '{}' must be a scalar", key),
        };
        record.insert(key.to_string(), value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flat_mapping() {
        let record = parse_record(
            "warmImport.maxFailures: 10\nimportWithoutTemplate: true\nosConfigMap.name: os-map\n",
        )
        .unwrap();
        assert_eq!(record["warmImport.maxFailures"], "10");
        assert_eq!(record["importWithoutTemplate"], "true");
        assert_eq!(record["osConfigMap.name"], "os-map");
    }

    #[test]
    fn configmap_manifest_uses_data() {
        let record = parse_record(
            r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: vm-import-controller-config
data:
  warmImport.successfulDelay: "120"
"#,
        )
        .unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record["warmImport.successfulDelay"], "120");
    }

    #[test]
    fn rejects_nested_values() {
        assert!(parse_record("a:\n  b: c\n").is_err());
        assert!(parse_record("- a\n- b\n").is_err());
    }

    #[test]
    fn empty_document_is_empty_record() {
        assert!(parse_record("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(load_record_file(path.to_str().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "warmImport.maxFailures: 3").unwrap();
        let record = load_record_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(record["warmImport.maxFailures"], "3");
    }
}
