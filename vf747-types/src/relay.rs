//! Relay output state

use bitflags::bitflags;

bitflags! {
    /// State of the reader's two relay outputs
    ///
    /// This is the layout of the `get_relay` response byte: relay 1 at
    /// bit 0, relay 2 at bit 1. The `set_relay` *request* uses a different
    /// layout (relay 2 at bit 2), which the session layer handles.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct RelayState: u8 {
        const RELAY1 = 0b0000_0001;
        const RELAY2 = 0b0000_0010;
    }
}

impl RelayState {
    /// Build a state from individual relay switches
    pub fn from_switches(relay1: bool, relay2: bool) -> Self {
        let mut state = Self::empty();
        state.set(Self::RELAY1, relay1);
        state.set(Self::RELAY2, relay2);
        state
    }

    pub fn relay1(self) -> bool {
        self.contains(Self::RELAY1)
    }

    pub fn relay2(self) -> bool {
        self.contains(Self::RELAY2)
    }
}
