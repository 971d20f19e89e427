use crate::utils::error::{GcaError, Result};

const DOCUMENT_STORE_SCHEMES: [&str; 2] = ["mongodb", "mongodb+srv"];
const MAX_DATABASE_NAME_BYTES: usize = 63;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> GcaError {
    GcaError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts `mongodb://` and `mongodb+srv://` connection strings.
///
/// Only the scheme and host list are checked here; the driver parses the options.
pub fn validate_document_store_uri(field: &str, uri: &str) -> Result<()> {
    let (scheme, rest) = uri
        .split_once("://")
        .ok_or_else(|| invalid(field, uri, "not a URI"))?;

    if !DOCUMENT_STORE_SCHEMES.contains(&scheme) {
        return Err(invalid(
            field,
            uri,
            format!("expected a mongodb:// URI, got scheme '{}'", scheme),
        ));
    }

    let authority = rest.split(['/', '?']).next().unwrap_or_default();
    let hosts = authority.rsplit_once('@').map_or(authority, |(_, hosts)| hosts);
    if hosts.is_empty() {
        return Err(invalid(field, uri, "missing host"));
    }
    Ok(())
}

pub fn validate_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field, path, "path is empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path, "path contains a NUL byte"));
    }
    Ok(())
}

/// Database names may not be blank, contain `/\. "$` or exceed 63 bytes.
pub fn validate_database_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid(field, name, "name is empty"));
    }
    if let Some(c) = name.chars().find(|c| "/\\. \"$\0".contains(*c)) {
        return Err(invalid(field, name, format!("name contains '{}'", c)));
    }
    if name.len() > MAX_DATABASE_NAME_BYTES {
        return Err(invalid(field, name, "name is longer than 63 bytes"));
    }
    Ok(())
}
