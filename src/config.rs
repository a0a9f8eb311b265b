use std::time::Duration;

use crate::data_structure::Hand;

pub const DEFAULT_NIC: &str = "eth0";
pub const DEFAULT_TYPE_NAME: &str = "inspire::inspire_hand_ctrl";

/// Timing of the ramp and hold phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionConfig {
    pub steps: usize,
    pub step_interval: Duration,
    pub hold_duration: Duration,
    pub hold_interval: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            steps: 30,
            step_interval: Duration::from_millis(50),
            hold_duration: Duration::from_secs(1),
            hold_interval: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub hand: Hand,
    pub domain_id: u16,
    /// `None` lets the transport pick its default interfaces.
    pub nic: Option<String>,
    pub type_name: String,
}

impl TransportConfig {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            domain_id: 0,
            nic: Some(DEFAULT_NIC.to_string()),
            type_name: DEFAULT_TYPE_NAME.to_string(),
        }
    }

    pub fn topic(&self) -> String {
        self.hand.ctrl_topic()
    }
}
