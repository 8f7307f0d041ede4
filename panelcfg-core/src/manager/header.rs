//! Manager-level header defaults
//!
//! Every stack and component inherits these unless its own header
//! overrides a field.

use serde::{Deserialize, Serialize};

use crate::item::{HeaderLabel, HeaderShow, Side};

/// Header labels and visibility inherited by every item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerHeader {
    /// Header visibility and side
    pub show: HeaderShow,
    /// Popout button label
    pub popout: HeaderLabel,
    /// Dock button label
    pub dock: String,
    /// Maximise button label
    pub maximise: HeaderLabel,
    /// Minimise button label
    pub minimise: String,
    /// Close button label
    pub close: String,
    /// Tab dropdown label
    pub tab_dropdown: String,
}

impl Default for ManagerHeader {
    fn default() -> Self {
        Self {
            show: HeaderShow::Side(Side::Top),
            popout: HeaderLabel::label("open in new window"),
            dock: "dock".to_string(),
            maximise: HeaderLabel::label("maximise"),
            minimise: "minimise".to_string(),
            close: "close".to_string(),
            tab_dropdown: "additional tabs".to_string(),
        }
    }
}
