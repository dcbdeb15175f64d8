//! Methods of the l2fwd API and their parameters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

/// Enables or disables forwarding on all configured pairs.
pub const SET_FWD_STATE: &str = "mrvl_l2fwd_set_fwd_state";

/// Removes every entry from the forwarding table.
pub const CLEAR_FWD_TABLE: &str = "mrvl_l2fwd_clear_fwd_table";

/// Adds a forwarding pair.
pub const ADD_FWD_PAIR: &str = "mrvl_l2fwd_add_fwd_pair";

/// Deletes a forwarding pair.
pub const DEL_FWD_PAIR: &str = "mrvl_l2fwd_del_fwd_pair";

/// First port of the forwarding pair reconfigured by default.
pub const DEFAULT_PORT1: PciAddr = PciAddr::new(0x0002, 0x12, 0x00, 1);

/// Second port of the forwarding pair reconfigured by default.
pub const DEFAULT_PORT2: PciAddr = PciAddr::new(0x0002, 0x02, 0x00, 0);

/// Representation of the forwarding state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FwdState {
    Disabled = 0,
    Enabled = 1,
}
impl From<bool> for FwdState {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Enabled,
            false => Self::Disabled,
        }
    }
}
impl Display for FwdState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
impl FromStr for FwdState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_ascii_lowercase()[..] {
            "0" | "off" | "disable" | "disabled" => Ok(Self::Disabled),
            "1" | "on" | "enable" | "enabled" => Ok(Self::Enabled),
            _ => Err(format!("invalid forwarding state `{s}`, expected 0 or 1")),
        }
    }
}
impl Serialize for FwdState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}
impl<'de> Deserialize<'de> for FwdState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            x => Err(serde::de::Error::custom(format!(
                "invalid forwarding state {x}"
            ))),
        }
    }
}

/// Parameters of [`SET_FWD_STATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFwdState {
    pub state: FwdState,
}

/// Parameters of [`ADD_FWD_PAIR`] and [`DEL_FWD_PAIR`].
///
/// Ports are sent as strings. The server parses them as PCI addresses; see [`PciAddr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FwdPair {
    pub port1: String,
    pub port2: String,
}
impl FwdPair {
    pub fn new<A: Into<String>, B: Into<String>>(port1: A, port2: B) -> Self {
        Self {
            port1: port1.into(),
            port2: port2.into(),
        }
    }
}
impl From<(PciAddr, PciAddr)> for FwdPair {
    fn from((port1, port2): (PciAddr, PciAddr)) -> Self {
        Self::new(port1.to_string(), port2.to_string())
    }
}
impl Default for FwdPair {
    fn default() -> Self {
        (DEFAULT_PORT1, DEFAULT_PORT2).into()
    }
}

/// A PCI address in `domain:bus:device.function` notation, e.g. `0002:12:00.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PciAddr {
    pub domain: u32,
    pub bus: u8,
    pub device: u8,
    pub function: u8,
}
impl PciAddr {
    /// Maximum value of the device number.
    pub const MAX_DEVICE: u8 = 0x1f;

    /// Maximum value of the function number.
    pub const MAX_FUNCTION: u8 = 0x7;

    pub const fn new(domain: u32, bus: u8, device: u8, function: u8) -> Self {
        Self {
            domain,
            bus,
            device,
            function,
        }
    }
}
impl Display for PciAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04x}:{:02x}:{:02x}.{:x}",
            self.domain, self.bus, self.device, self.function
        )
    }
}
impl FromStr for PciAddr {
    type Err = String;

    /// Parses `DDDD:BB:DD.F`, or `BB:DD.F` with an implied domain of zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid PCI address `{s}`");

        let (rest, function) = s.rsplit_once('.').ok_or_else(invalid)?;
        let mut parts = rest.rsplitn(3, ':');
        let device = parts.next().ok_or_else(invalid)?;
        let bus = parts.next().ok_or_else(invalid)?;
        let domain = parts.next().unwrap_or("0");

        let hex = |x: &str, max_digits: usize| match x.is_empty() || x.len() > max_digits {
            true => Err(invalid()),
            false => u32::from_str_radix(x, 16).map_err(|_| invalid()),
        };
        let addr = Self {
            domain: hex(domain, 8)?,
            bus: hex(bus, 2)? as u8,
            device: hex(device, 2)? as u8,
            function: hex(function, 1)? as u8,
        };
        if addr.device > Self::MAX_DEVICE || addr.function > Self::MAX_FUNCTION {
            return Err(invalid());
        }

        Ok(addr)
    }
}
