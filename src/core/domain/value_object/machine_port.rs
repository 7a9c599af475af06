use crate::core::domain::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A validated SSH port on a machine handed to the provisioning service.
///
/// Wire messages carry ports as `i64`; the provisioning service expects a
/// `u16`. Conversion goes through [`MachinePort::try_from`] so an out-of-range
/// value is rejected instead of truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachinePort(u16);

impl MachinePort {
    /// Creates a new port without validation.
    #[allow(dead_code)]
    pub(crate) fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for MachinePort {
    type Error = ValidationError;

    fn try_from(port: i64) -> Result<Self, Self::Error> {
        let narrowed = u16::try_from(port).map_err(|_| {
            ValidationError::field("port", format!("invalid port {port}: out of range"))
        })?;
        validate_port(narrowed)?;
        Ok(Self(narrowed))
    }
}

/// Validates a port number.
pub(crate) fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::field("port", "invalid port 0"));
    }
    Ok(())
}
