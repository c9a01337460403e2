use std::{borrow::Borrow, fmt, sync::Arc};

use serde::{Serialize, Serializer};

/// Stable key for a district.
/// Keeps the original label text verbatim (leading zeros, non-numeric names)
/// and is never ordered numerically; rankings sort by computed values only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistrictId(Arc<str>);

impl DistrictId {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// The label exactly as it appeared in the input.
    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for DistrictId {
    fn from(label: &str) -> Self { Self::new(label) }
}

impl From<String> for DistrictId {
    fn from(label: String) -> Self { Self(Arc::from(label)) }
}

impl Borrow<str> for DistrictId {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DistrictId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
