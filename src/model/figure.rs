//! Figure records.

use serde::{Deserialize, Serialize};

/// A figure with its label, caption and image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure label, e.g. "Figure 1."
    pub label: String,

    /// Caption text
    pub caption: String,

    /// Referenced image
    pub graphic: Graphic,
}

/// Image reference of a figure. Both values are identifiers and are kept
/// exactly as written in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphic {
    /// Image file reference (`xlink:href`)
    pub href: String,

    /// Image id
    pub id: String,
}
