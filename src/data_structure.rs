use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of actuated joints on the hand.
pub const JOINT_COUNT: usize = 6;

/// Control mode bit for absolute angle targets.
pub const ANGLE_MODE: i8 = 0b0001;

/// One target per joint, in device units.
pub type AngleVector = [i16; JOINT_COUNT];

/// Pose every ramp starts from.
pub const RAMP_START: AngleVector = [200, 200, 200, 200, 200, 500];

// open/close were swapped at one point, not yet re-checked on the device
pub const OPEN: AngleVector = [800, 800, 800, 800, 800, 500];
pub const CLOSE: AngleVector = [200, 200, 200, 200, 200, 500];
pub const PINCH: AngleVector = [200, 200, 200, 800, 800, 600];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Hand {
    #[value(name = "l")]
    Left,
    #[value(name = "r")]
    Right,
}

impl Hand {
    pub fn suffix(self) -> &'static str {
        match self {
            Hand::Left => "l",
            Hand::Right => "r",
        }
    }

    /// DDS topic carrying control commands for this hand.
    pub fn ctrl_topic(self) -> String {
        format!("rt/inspire_hand/ctrl/{}", self.suffix())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Gesture {
    Open,
    Close,
    Pinch,
}

impl Gesture {
    pub fn target(self) -> AngleVector {
        match self {
            Gesture::Open => OPEN,
            Gesture::Close => CLOSE,
            Gesture::Pinch => PINCH,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gesture::Open => "open",
            Gesture::Close => "close",
            Gesture::Pinch => "pinch",
        };
        f.write_str(name)
    }
}

/// Control command understood by the hand's DDS service.
///
/// Field order follows the IDL so the CDR encoding lines up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCtrl {
    pub pos_set: Vec<i16>,
    pub angle_set: Vec<i16>,
    pub force_set: Vec<i16>,
    pub speed_set: Vec<i16>,
    pub mode: i8,
}

impl Default for HandCtrl {
    fn default() -> Self {
        Self {
            pos_set: vec![0; JOINT_COUNT],
            angle_set: vec![0; JOINT_COUNT],
            force_set: vec![0; JOINT_COUNT],
            speed_set: vec![0; JOINT_COUNT],
            mode: 0,
        }
    }
}

impl HandCtrl {
    pub fn angles(angles: AngleVector) -> Self {
        Self {
            angle_set: angles.to_vec(),
            mode: ANGLE_MODE,
            ..Self::default()
        }
    }
}

/// Dry-run rendering of one published command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedFrame {
    pub topic: String,
    pub seq: u64,
    pub timestamp_us: u128,
    pub mode: i8,
    pub angle_set: Vec<i16>,
}
