use std::fmt;

/// Number of random characters following the leading underscore.
pub const XMI_ID_RANDOM_LEN: usize = 22;

/// Prefix shared by every generated element id.
pub const XMI_ID_PREFIX: char = '_';

/// Element identifier in Talend's XMI model format, e.g. `_NkZ6AJEEEeC4zfWT--Xipg`.
///
/// Generated ids are `_` followed by 22 ASCII alphanumerics. The fixed
/// property-type id carried in the manifest does not follow that shape, so
/// construction is unchecked and [`XmiId::is_generated`] reports conformance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmiId(String);

impl XmiId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build an id from the random body, adding the `_` prefix.
    pub fn from_body(body: &str) -> Self {
        Self::new(format!("{}{}", XMI_ID_PREFIX, body))
    }

    /// Whether this id has the shape of a randomly generated id.
    pub fn is_generated(&self) -> bool {
        let Some(body) = self.0.strip_prefix(XMI_ID_PREFIX) else {
            return false;
        };
        body.len() == XMI_ID_RANDOM_LEN && body.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl fmt::Display for XmiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
