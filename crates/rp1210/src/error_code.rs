//! RP1210 Error Code Descriptions
//!
//! Maps the numeric return codes of RP1210C adapter drivers to their symbolic
//! names. The table is a compile-time constant sorted by code; it is checked
//! for duplicate keys while compiling and can only be read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned by [`describe`] for codes that are not in the table
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// First error code of the vendor extension block
pub const VENDOR_ERROR_BASE: u16 = 3000;

/// Grouping of error codes by what failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Client registration and connection
    Client,
    /// Driver memory allocation
    Memory,
    /// Adapter hardware state
    Device,
    /// Protocol selection and baud rate
    Protocol,
    /// Transmit, receive and command queues
    Queue,
    /// Command and message submission
    Command,
    /// J1939 address claiming
    Address,
    /// INI file configuration
    Configuration,
    /// Bus, filter and platform conditions
    Miscellaneous,
    /// Adapter vendor extensions (3000 and up)
    Vendor,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorCategory::Client => "client",
            ErrorCategory::Memory => "memory",
            ErrorCategory::Device => "device",
            ErrorCategory::Protocol => "protocol",
            ErrorCategory::Queue => "queue",
            ErrorCategory::Command => "command",
            ErrorCategory::Address => "address",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Miscellaneous => "miscellaneous",
            ErrorCategory::Vendor => "vendor",
        };
        f.write_str(label)
    }
}

/// One row of the error table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// Numeric code returned by the driver
    pub code: u16,
    /// Symbolic name, e.g. `ERR_DLL_NOT_INITIALIZED`
    pub name: &'static str,
    /// What kind of failure the code reports
    pub category: ErrorCategory,
}

const fn entry(code: u16, name: &'static str, category: ErrorCategory) -> ErrorEntry {
    ErrorEntry {
        code,
        name,
        category,
    }
}

use ErrorCategory::*;

/// Sorted by code, strictly ascending.
const ERROR_TABLE: &[ErrorEntry] = &[
    entry(128, "ERR_DLL_NOT_INITIALIZED", Client),
    entry(129, "ERR_INVALID_CLIENT_ID", Client),
    entry(130, "ERR_CLIENT_ALREADY_CONNECTED", Client),
    entry(131, "ERR_CLIENT_AREA_FULL", Client),
    entry(132, "ERR_FREE_MEMORY", Memory),
    entry(133, "ERR_NOT_ENOUGH_MEMORY", Memory),
    entry(134, "ERR_INVALID_DEVICE", Device),
    entry(135, "ERR_DEVICE_IN_USE", Device),
    entry(136, "ERR_INVALID_PROTOCOL", Protocol),
    entry(137, "ERR_TX_QUEUE_FULL", Queue),
    entry(138, "ERR_TX_QUEUE_CORRUPT", Queue),
    entry(139, "ERR_RX_QUEUE_FULL", Queue),
    entry(140, "ERR_RX_QUEUE_CORRUPT", Queue),
    entry(141, "ERR_MESSAGE_TOO_LONG", Command),
    entry(142, "ERR_HARDWARE_NOT_RESPONDING", Device),
    entry(143, "ERR_COMMAND_NOT_SUPPORTED", Command),
    entry(144, "ERR_INVALID_COMMAND", Command),
    entry(145, "ERR_TXMESSAGE_STATUS", Command),
    entry(146, "ERR_ADDRESS_CLAIM_FAILED", Address),
    entry(147, "ERR_CANNOT_SET_PRIORITY", Address),
    entry(148, "ERR_CLIENT_DISCONNECTED", Client),
    entry(149, "ERR_CONNECT_NOT_ALLOWED", Client),
    entry(150, "ERR_CHANGE_MODE_FAILED", Miscellaneous),
    entry(151, "ERR_BUS_OFF", Miscellaneous),
    entry(152, "ERR_COULD_NOT_TX_ADDRESS_CLAIMED", Address),
    entry(153, "ERR_ADDRESS_LOST", Address),
    entry(154, "ERR_CODE_NOT_FOUND", Miscellaneous),
    entry(155, "ERR_BLOCK_NOT_ALLOWED", Miscellaneous),
    entry(156, "ERR_MULTIPLE_CLIENTS_CONNECTED", Client),
    entry(157, "ERR_ADDRESS_NEVER_CLAIMED", Address),
    entry(158, "ERR_WINDOW_HANDLE_REQUIRED", Miscellaneous),
    entry(159, "ERR_MESSAGE_NOT_SENT", Command),
    entry(160, "ERR_MAX_NOTIFY_EXCEEDED", Miscellaneous),
    entry(161, "ERR_MAX_FILTERS_EXCEEDED", Miscellaneous),
    entry(162, "ERR_HARDWARE_STATUS_CHANGE", Device),
    entry(202, "ERR_INI_FILE_NOT_IN_WIN_DIR", Configuration),
    entry(204, "ERR_INI_SECTION_NOT_FOUND", Configuration),
    entry(205, "ERR_INI_KEY_NOT_FOUND", Configuration),
    entry(206, "ERR_INVALID_KEY_STRING", Configuration),
    entry(207, "ERR_DEVICE_NOT_SUPPORTED", Device),
    entry(208, "ERR_INVALID_PORT_PARAM", Miscellaneous),
    entry(220, "ERR_OS_NOT_SUPPORTED", Miscellaneous),
    entry(222, "ERR_COMMAND_QUEUE_IS_FULL", Queue),
    entry(224, "ERR_CANNOT_SET_CAN_BAUDRATE", Protocol),
    entry(225, "ERR_CANNOT_CLAIM_BROADCAST_ADDRESS", Address),
    entry(226, "ERR_OUT_OF_ADDRESS_RESOURCES", Address),
    entry(227, "ERR_ADDRESS_RELEASE_FAILED", Address),
    entry(230, "ERR_COMM_DEVICE_IN_USE", Device),
    entry(441, "ERR_DATA_LINK_CONFLICT", Miscellaneous),
    entry(453, "ERR_ADAPTER_NOT_RESPONDING", Device),
    entry(454, "ERR_CAN_BAUD_SET_NONSTANDARD", Protocol),
    entry(455, "ERR_MULTIPLE_CONNECTIONS_NOT_ALLOWED_NOW", Miscellaneous),
    entry(456, "ERR_J1708_BAUD_SET_NONSTANDARD", Protocol),
    entry(457, "ERR_J1939_BAUD_SET_NONSTANDARD", Protocol),
    entry(458, "ERR_ISO15765_BAUD_SET_NONSTANDARD", Protocol),
    entry(600, "ERR_INVALID_IOCTL_ID", Command),
    entry(601, "ERR_NULL_PARAMETER", Command),
    entry(602, "ERR_HARDWARE_NOT_SUPPORTED", Device),
    entry(603, "ERR_CANNOT_DETERMINE_BAUD_RATE", Protocol),
    // Vendor extensions
    entry(3008, "API_NO_DEVICES_FOUND", Vendor),
];

const fn strictly_ascending(table: &[ErrorEntry]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i - 1].code >= table[i].code {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    strictly_ascending(ERROR_TABLE),
    "error table must be sorted by code with no duplicates"
);

/// Human-readable name for an RP1210 error code.
///
/// Total over `u16`: codes missing from the table yield [`UNKNOWN_ERROR`].
pub fn describe(code: u16) -> &'static str {
    lookup(code).map_or(UNKNOWN_ERROR, |e| e.name)
}

/// Full table row for a code, if known
pub fn lookup(code: u16) -> Option<&'static ErrorEntry> {
    ERROR_TABLE
        .binary_search_by_key(&code, |e| e.code)
        .ok()
        .map(|idx| &ERROR_TABLE[idx])
}

/// Category of a code, if known
pub fn category(code: u16) -> Option<ErrorCategory> {
    lookup(code).map(|e| e.category)
}

/// Reverse lookup by symbolic name (ASCII case-insensitive)
pub fn code_for(name: &str) -> Option<u16> {
    let name = name.trim();
    ERROR_TABLE
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .map(|e| e.code)
}

/// All known entries in ascending code order
pub fn entries() -> &'static [ErrorEntry] {
    ERROR_TABLE
}

/// Whether the code sits in the vendor extension block
pub fn is_vendor_error(code: u16) -> bool {
    code >= VENDOR_ERROR_BASE
}

/// Error code as returned by an RP1210 driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    /// Symbolic name or [`UNKNOWN_ERROR`]
    pub fn describe(self) -> &'static str {
        describe(self.0)
    }

    /// Whether the table has an entry for this code
    pub fn is_known(self) -> bool {
        lookup(self.0).is_some()
    }

    /// Category of this code, if known
    pub fn category(self) -> Option<ErrorCategory> {
        category(self.0)
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        ErrorCode(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.describe(), self.0)
    }
}
