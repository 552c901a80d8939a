//! RP1210 Command Codes
//!
//! Values for the `nCommandNumber` argument of `RP1210_SendCommand`, as
//! defined by RP1210C/D. Codes from `0x8000` up are reserved for adapter
//! vendors.

use crate::error::Rp1210Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

// General
/// Resets the adapter to its initial state
pub const CMD_RESET_DEVICE: u16 = 0x0000;
/// Reads DLL and API version information from the driver
pub const CMD_READ_VERSION: u16 = 0x0001;
/// Reads messages from the receive queue
pub const CMD_READ_MESSAGE: u16 = 0x0002;
/// Prevents additional client connections to the adapter
pub const CMD_DISALLOW_FURTHER_CONNECTIONS: u16 = 0x0013;
/// Sets the maximum size for error message buffers
pub const CMD_SET_MAX_ERROR_MSG_SIZE: u16 = 0x0015;
/// Vendor pass-through; meaning depends on the adapter driver
pub const CMD_GENERIC_DRIVER_COMMAND: u16 = 0x8000;

// Filtering
/// Sets all protocol filters to pass messages
pub const CMD_SET_ALL_FILTERS_TO_PASS: u16 = 0x0003;
/// Sets all protocol filters to discard messages
pub const CMD_SET_ALL_FILTERS_TO_DISCARD: u16 = 0x000E;
/// Enables or disables message reception
pub const CMD_SET_MESSAGE_RECEIVE: u16 = 0x0010;
/// Sets the J1708 filter type (MID based)
pub const CMD_SET_J1708_FILTER_TYPE: u16 = 0x0016;
/// Sets the J1939 filter type (PGN based)
pub const CMD_SET_J1939_FILTER_TYPE: u16 = 0x0017;
/// Sets the CAN filter type (ID based)
pub const CMD_SET_CAN_FILTER_TYPE: u16 = 0x0018;
/// Sets the ISO15765 filter type (flow control)
pub const CMD_SET_ISO15765_FILTER_TYPE: u16 = 0x001B;
/// Configures message filtering for J1939
pub const CMD_SET_MESSAGE_FILTERING_J1939: u16 = 0x0004;
/// Configures message filtering for CAN
pub const CMD_SET_MESSAGE_FILTERING_CAN: u16 = 0x0005;
/// Configures message filtering for J1708
pub const CMD_SET_MESSAGE_FILTERING_J1708: u16 = 0x0007;
/// Configures message filtering for ISO15765
pub const CMD_SET_MESSAGE_FILTERING_ISO15765: u16 = 0x0009;

// Broadcast
/// Configures broadcast messages for J1939
pub const CMD_SET_BROADCAST_FOR_J1939: u16 = 0x000C;
/// Configures broadcast messages for CAN
pub const CMD_SET_BROADCAST_FOR_CAN: u16 = 0x0011;
/// Configures broadcast messages for J1708
pub const CMD_SET_BROADCAST_FOR_J1708: u16 = 0x0012;
/// Configures broadcast messages for ISO15765
pub const CMD_SET_BROADCAST_FOR_ISO15765: u16 = 0x001C;

// Protocol-specific
/// Sets the J1708 operating mode
pub const CMD_SET_J1708_MODE: u16 = 0x000B;
/// Claims and protects a J1939 address
pub const CMD_PROTECT_J1939_ADDRESS: u16 = 0x000F;
/// Releases a claimed J1939 address
pub const CMD_RELEASE_J1939_ADDRESS: u16 = 0x0019;
/// Sets interpacket timing for J1939 messages
pub const CMD_SET_J1939_INTERPACKET_TIME: u16 = 0x001D;
/// Configures ISO15765 flow control
pub const CMD_SET_ISO15765_FLOW_CONTROL: u16 = 0x001E;
/// Clears ISO15765 flow control settings
pub const CMD_CLEAR_ISO15765_FLOW_CONTROL: u16 = 0x001F;
/// Sets the ISO15765 link type
pub const CMD_SET_ISO15765_LINK_TYPE: u16 = 0x0020;
/// Sets the J1708 baud rate
pub const CMD_SET_J1708_BAUD: u16 = 0x0022;
/// Sets the J1939 baud rate (250k, 500k)
pub const CMD_SET_J1939_BAUD: u16 = 0x0023;
/// Sets the ISO15765 baud rate
pub const CMD_SET_ISO15765_BAUD: u16 = 0x0024;
/// Sets the blocking timeout for message operations
pub const CMD_SET_BLOCK_TIMEOUT: u16 = 0x0025;

// Miscellaneous
/// Enables or disables echo of transmitted messages
pub const CMD_ECHO_TRANSMITTED_MESSAGES: u16 = 0x000A;

/// Every `CMD_*` value
const COMMAND_CODES: &[u16] = &[
    CMD_RESET_DEVICE,
    CMD_READ_VERSION,
    CMD_READ_MESSAGE,
    CMD_DISALLOW_FURTHER_CONNECTIONS,
    CMD_SET_MAX_ERROR_MSG_SIZE,
    CMD_GENERIC_DRIVER_COMMAND,
    CMD_SET_ALL_FILTERS_TO_PASS,
    CMD_SET_ALL_FILTERS_TO_DISCARD,
    CMD_SET_MESSAGE_RECEIVE,
    CMD_SET_J1708_FILTER_TYPE,
    CMD_SET_J1939_FILTER_TYPE,
    CMD_SET_CAN_FILTER_TYPE,
    CMD_SET_ISO15765_FILTER_TYPE,
    CMD_SET_MESSAGE_FILTERING_J1939,
    CMD_SET_MESSAGE_FILTERING_CAN,
    CMD_SET_MESSAGE_FILTERING_J1708,
    CMD_SET_MESSAGE_FILTERING_ISO15765,
    CMD_SET_BROADCAST_FOR_J1939,
    CMD_SET_BROADCAST_FOR_CAN,
    CMD_SET_BROADCAST_FOR_J1708,
    CMD_SET_BROADCAST_FOR_ISO15765,
    CMD_SET_J1708_MODE,
    CMD_PROTECT_J1939_ADDRESS,
    CMD_RELEASE_J1939_ADDRESS,
    CMD_SET_J1939_INTERPACKET_TIME,
    CMD_SET_ISO15765_FLOW_CONTROL,
    CMD_CLEAR_ISO15765_FLOW_CONTROL,
    CMD_SET_ISO15765_LINK_TYPE,
    CMD_SET_J1708_BAUD,
    CMD_SET_J1939_BAUD,
    CMD_SET_ISO15765_BAUD,
    CMD_SET_BLOCK_TIMEOUT,
    CMD_ECHO_TRANSMITTED_MESSAGES,
];

const fn all_distinct(codes: &[u16]) -> bool {
    let mut i = 0;
    while i < codes.len() {
        let mut j = i + 1;
        while j < codes.len() {
            if codes[i] == codes[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    all_distinct(COMMAND_CODES),
    "two CMD_* constants share a value"
);

const _: () = assert!(
    COMMAND_CODES.len() == Command::ALL.len(),
    "every CMD_* constant needs a Command variant"
);

/// Command codes reserved for adapter vendors
pub const VENDOR_COMMAND_RANGE: RangeInclusive<u16> = 0x8000..=0xFFFF;

/// Check whether a raw command code falls in the vendor range
pub fn is_vendor_command(code: u16) -> bool {
    VENDOR_COMMAND_RANGE.contains(&code)
}

/// Functional grouping of commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandCategory {
    /// Reset, version, queue and connection control
    General,
    /// Filter setup and message filtering
    Filtering,
    /// Periodic broadcast lists
    Broadcast,
    /// Address claim, baud, flow control and timing
    ProtocolSpecific,
    /// Everything else
    Miscellaneous,
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommandCategory::General => "general",
            CommandCategory::Filtering => "filtering",
            CommandCategory::Broadcast => "broadcast",
            CommandCategory::ProtocolSpecific => "protocol-specific",
            CommandCategory::Miscellaneous => "miscellaneous",
        };
        f.write_str(label)
    }
}

/// Typed RP1210 command.
///
/// The discriminant of each variant is its command code, so two variants can
/// never share a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Command {
    /// Resets the adapter to its initial state
    ResetDevice = CMD_RESET_DEVICE,
    /// Reads DLL and API version information from the driver
    ReadVersion = CMD_READ_VERSION,
    /// Reads messages from the receive queue
    ReadMessage = CMD_READ_MESSAGE,
    /// Prevents additional client connections to the adapter
    DisallowFurtherConnections = CMD_DISALLOW_FURTHER_CONNECTIONS,
    /// Sets the maximum size for error message buffers
    SetMaxErrorMsgSize = CMD_SET_MAX_ERROR_MSG_SIZE,
    /// Vendor pass-through; meaning depends on the adapter driver
    GenericDriverCommand = CMD_GENERIC_DRIVER_COMMAND,

    /// Sets all protocol filters to pass messages
    SetAllFiltersToPass = CMD_SET_ALL_FILTERS_TO_PASS,
    /// Sets all protocol filters to discard messages
    SetAllFiltersToDiscard = CMD_SET_ALL_FILTERS_TO_DISCARD,
    /// Enables or disables message reception
    SetMessageReceive = CMD_SET_MESSAGE_RECEIVE,
    /// Sets the J1708 filter type (MID based)
    SetJ1708FilterType = CMD_SET_J1708_FILTER_TYPE,
    /// Sets the J1939 filter type (PGN based)
    SetJ1939FilterType = CMD_SET_J1939_FILTER_TYPE,
    /// Sets the CAN filter type (ID based)
    SetCanFilterType = CMD_SET_CAN_FILTER_TYPE,
    /// Sets the ISO15765 filter type (flow control)
    SetIso15765FilterType = CMD_SET_ISO15765_FILTER_TYPE,
    /// Configures message filtering for J1939
    SetMessageFilteringJ1939 = CMD_SET_MESSAGE_FILTERING_J1939,
    /// Configures message filtering for CAN
    SetMessageFilteringCan = CMD_SET_MESSAGE_FILTERING_CAN,
    /// Configures message filtering for J1708
    SetMessageFilteringJ1708 = CMD_SET_MESSAGE_FILTERING_J1708,
    /// Configures message filtering for ISO15765
    SetMessageFilteringIso15765 = CMD_SET_MESSAGE_FILTERING_ISO15765,

    /// Configures broadcast messages for J1939
    SetBroadcastForJ1939 = CMD_SET_BROADCAST_FOR_J1939,
    /// Configures broadcast messages for CAN
    SetBroadcastForCan = CMD_SET_BROADCAST_FOR_CAN,
    /// Configures broadcast messages for J1708
    SetBroadcastForJ1708 = CMD_SET_BROADCAST_FOR_J1708,
    /// Configures broadcast messages for ISO15765
    SetBroadcastForIso15765 = CMD_SET_BROADCAST_FOR_ISO15765,

    /// Sets the J1708 operating mode
    SetJ1708Mode = CMD_SET_J1708_MODE,
    /// Claims and protects a J1939 address
    ProtectJ1939Address = CMD_PROTECT_J1939_ADDRESS,
    /// Releases a claimed J1939 address
    ReleaseJ1939Address = CMD_RELEASE_J1939_ADDRESS,
    /// Sets interpacket timing for J1939 messages
    SetJ1939InterpacketTime = CMD_SET_J1939_INTERPACKET_TIME,
    /// Configures ISO15765 flow control
    SetIso15765FlowControl = CMD_SET_ISO15765_FLOW_CONTROL,
    /// Clears ISO15765 flow control settings
    ClearIso15765FlowControl = CMD_CLEAR_ISO15765_FLOW_CONTROL,
    /// Sets the ISO15765 link type
    SetIso15765LinkType = CMD_SET_ISO15765_LINK_TYPE,
    /// Sets the J1708 baud rate
    SetJ1708Baud = CMD_SET_J1708_BAUD,
    /// Sets the J1939 baud rate (250k, 500k)
    SetJ1939Baud = CMD_SET_J1939_BAUD,
    /// Sets the ISO15765 baud rate
    SetIso15765Baud = CMD_SET_ISO15765_BAUD,
    /// Sets the blocking timeout for message operations
    SetBlockTimeout = CMD_SET_BLOCK_TIMEOUT,

    /// Enables or disables echo of transmitted messages
    EchoTransmittedMessages = CMD_ECHO_TRANSMITTED_MESSAGES,
}

impl Command {
    /// Every command, grouped by category
    pub const ALL: &'static [Command] = &[
        Command::ResetDevice,
        Command::ReadVersion,
        Command::ReadMessage,
        Command::DisallowFurtherConnections,
        Command::SetMaxErrorMsgSize,
        Command::GenericDriverCommand,
        Command::SetAllFiltersToPass,
        Command::SetAllFiltersToDiscard,
        Command::SetMessageReceive,
        Command::SetJ1708FilterType,
        Command::SetJ1939FilterType,
        Command::SetCanFilterType,
        Command::SetIso15765FilterType,
        Command::SetMessageFilteringJ1939,
        Command::SetMessageFilteringCan,
        Command::SetMessageFilteringJ1708,
        Command::SetMessageFilteringIso15765,
        Command::SetBroadcastForJ1939,
        Command::SetBroadcastForCan,
        Command::SetBroadcastForJ1708,
        Command::SetBroadcastForIso15765,
        Command::SetJ1708Mode,
        Command::ProtectJ1939Address,
        Command::ReleaseJ1939Address,
        Command::SetJ1939InterpacketTime,
        Command::SetIso15765FlowControl,
        Command::ClearIso15765FlowControl,
        Command::SetIso15765LinkType,
        Command::SetJ1708Baud,
        Command::SetJ1939Baud,
        Command::SetIso15765Baud,
        Command::SetBlockTimeout,
        Command::EchoTransmittedMessages,
    ];

    /// Get the raw command code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Get the symbolic `CMD_*` name
    pub fn name(self) -> &'static str {
        match self {
            Command::ResetDevice => "CMD_RESET_DEVICE",
            Command::ReadVersion => "CMD_READ_VERSION",
            Command::ReadMessage => "CMD_READ_MESSAGE",
            Command::DisallowFurtherConnections => "CMD_DISALLOW_FURTHER_CONNECTIONS",
            Command::SetMaxErrorMsgSize => "CMD_SET_MAX_ERROR_MSG_SIZE",
            Command::GenericDriverCommand => "CMD_GENERIC_DRIVER_COMMAND",
            Command::SetAllFiltersToPass => "CMD_SET_ALL_FILTERS_TO_PASS",
            Command::SetAllFiltersToDiscard => "CMD_SET_ALL_FILTERS_TO_DISCARD",
            Command::SetMessageReceive => "CMD_SET_MESSAGE_RECEIVE",
            Command::SetJ1708FilterType => "CMD_SET_J1708_FILTER_TYPE",
            Command::SetJ1939FilterType => "CMD_SET_J1939_FILTER_TYPE",
            Command::SetCanFilterType => "CMD_SET_CAN_FILTER_TYPE",
            Command::SetIso15765FilterType => "CMD_SET_ISO15765_FILTER_TYPE",
            Command::SetMessageFilteringJ1939 => "CMD_SET_MESSAGE_FILTERING_J1939",
            Command::SetMessageFilteringCan => "CMD_SET_MESSAGE_FILTERING_CAN",
            Command::SetMessageFilteringJ1708 => "CMD_SET_MESSAGE_FILTERING_J1708",
            Command::SetMessageFilteringIso15765 => "CMD_SET_MESSAGE_FILTERING_ISO15765",
            Command::SetBroadcastForJ1939 => "CMD_SET_BROADCAST_FOR_J1939",
            Command::SetBroadcastForCan => "CMD_SET_BROADCAST_FOR_CAN",
            Command::SetBroadcastForJ1708 => "CMD_SET_BROADCAST_FOR_J1708",
            Command::SetBroadcastForIso15765 => "CMD_SET_BROADCAST_FOR_ISO15765",
            Command::SetJ1708Mode => "CMD_SET_J1708_MODE",
            Command::ProtectJ1939Address => "CMD_PROTECT_J1939_ADDRESS",
            Command::ReleaseJ1939Address => "CMD_RELEASE_J1939_ADDRESS",
            Command::SetJ1939InterpacketTime => "CMD_SET_J1939_INTERPACKET_TIME",
            Command::SetIso15765FlowControl => "CMD_SET_ISO15765_FLOW_CONTROL",
            Command::ClearIso15765FlowControl => "CMD_CLEAR_ISO15765_FLOW_CONTROL",
            Command::SetIso15765LinkType => "CMD_SET_ISO15765_LINK_TYPE",
            Command::SetJ1708Baud => "CMD_SET_J1708_BAUD",
            Command::SetJ1939Baud => "CMD_SET_J1939_BAUD",
            Command::SetIso15765Baud => "CMD_SET_ISO15765_BAUD",
            Command::SetBlockTimeout => "CMD_SET_BLOCK_TIMEOUT",
            Command::EchoTransmittedMessages => "CMD_ECHO_TRANSMITTED_MESSAGES",
        }
    }

    /// Get the functional category
    pub fn category(self) -> CommandCategory {
        match self {
            Command::ResetDevice
            | Command::ReadVersion
            | Command::ReadMessage
            | Command::DisallowFurtherConnections
            | Command::SetMaxErrorMsgSize
            | Command::GenericDriverCommand => CommandCategory::General,
            Command::SetAllFiltersToPass
            | Command::SetAllFiltersToDiscard
            | Command::SetMessageReceive
            | Command::SetJ1708FilterType
            | Command::SetJ1939FilterType
            | Command::SetCanFilterType
            | Command::SetIso15765FilterType
            | Command::SetMessageFilteringJ1939
            | Command::SetMessageFilteringCan
            | Command::SetMessageFilteringJ1708
            | Command::SetMessageFilteringIso15765 => CommandCategory::Filtering,
            Command::SetBroadcastForJ1939
            | Command::SetBroadcastForCan
            | Command::SetBroadcastForJ1708
            | Command::SetBroadcastForIso15765 => CommandCategory::Broadcast,
            Command::SetJ1708Mode
            | Command::ProtectJ1939Address
            | Command::ReleaseJ1939Address
            | Command::SetJ1939InterpacketTime
            | Command::SetIso15765FlowControl
            | Command::ClearIso15765FlowControl
            | Command::SetIso15765LinkType
            | Command::SetJ1708Baud
            | Command::SetJ1939Baud
            | Command::SetIso15765Baud
            | Command::SetBlockTimeout => CommandCategory::ProtocolSpecific,
            Command::EchoTransmittedMessages => CommandCategory::Miscellaneous,
        }
    }

    /// Whether this command lives in the vendor-reserved range
    pub fn is_vendor_specific(self) -> bool {
        is_vendor_command(self.code())
    }
}

impl From<Command> for u16 {
    fn from(command: Command) -> Self {
        command.code()
    }
}

impl TryFrom<u16> for Command {
    type Error = Rp1210Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Command::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                debug!("No RP1210 command for code 0x{:04X}", code);
                Rp1210Error::UnknownCommand(code)
            })
    }
}

impl FromStr for Command {
    type Err = Rp1210Error;

    /// Accepts `CMD_RESET_DEVICE`, `RESET_DEVICE` or `reset_device`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let wanted = match wanted.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("CMD_") => &wanted[4..],
            _ => wanted,
        };

        Command::ALL
            .iter()
            .copied()
            .find(|c| c.name()[4..].eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Rp1210Error::UnknownCommandName(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.code())
    }
}
