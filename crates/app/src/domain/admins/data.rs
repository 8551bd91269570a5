//! Admin Data

use crate::domain::admins::records::AdminUuid;

/// New Admin Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdmin {
    /// UUID to assign to the admin row.
    pub uuid: AdminUuid,

    /// Display name shown in token listings and logs.
    pub name: String,
}
