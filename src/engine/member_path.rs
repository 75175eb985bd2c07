use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Walk a dotted member path into a dynamic value, one key per segment.
///
/// Objects are stepped by key, arrays by numeric index. A missing member or
/// a step into a scalar is an error: a qualified reference that does not
/// match the exported shape is a configuration mistake, not a recoverable
/// runtime condition, so the failure propagates to the caller uncaught.
pub fn resolve<'a>(root: &'a Value, path: &[String]) -> Result<&'a Value> {
    let mut current = root;
    for (depth, key) in path.iter().enumerate() {
        current = match current {
            Value::Object(map) => map
                .get(key)
                .with_context(|| format!("member '{}' not found at '{}'", key, walked(path, depth)))?,
            Value::Array(items) => {
                let index: usize = key.parse().with_context(|| {
                    format!(
                        "member '{}' is not an array index at '{}'",
                        key,
                        walked(path, depth)
                    )
                })?;
                items.get(index).with_context(|| {
                    format!(
                        "index {} is out of bounds ({} elements) at '{}'",
                        index,
                        items.len(),
                        walked(path, depth)
                    )
                })?
            }
            _ => bail!(
                "cannot access member '{}' on a scalar value at '{}'",
                key,
                walked(path, depth)
            ),
        };
    }
    Ok(current)
}

fn walked(path: &[String], depth: usize) -> String {
    path[..=depth].join(".")
}
