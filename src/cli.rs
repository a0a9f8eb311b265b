use std::time::Duration;

use clap::Parser;

use crate::config::{MotionConfig, TransportConfig, DEFAULT_NIC, DEFAULT_TYPE_NAME};
use crate::data_structure::{Gesture, Hand};

#[derive(Parser, Debug)]
#[command(name = "hand_publish")]
#[command(about = "Publish Inspire hand gesture via DDS")]
#[command(version)]
pub struct Cli {
    /// Which hand to control
    #[arg(long, value_enum)]
    pub hand: Hand,

    /// Gesture to perform
    #[arg(long, value_enum)]
    pub gesture: Gesture,

    /// DDS network interface, empty for the transport's default
    #[arg(long, env = "DDS_NIC", default_value = DEFAULT_NIC)]
    pub nic: String,

    /// DDS domain id
    #[arg(long, default_value_t = 0)]
    pub domain_id: u16,

    /// Registered type name of the control message
    #[arg(long, default_value = DEFAULT_TYPE_NAME, hide = true)]
    pub type_name: String,

    /// Number of ramp frames
    #[arg(long, default_value_t = 30)]
    pub steps: usize,

    /// Delay after each ramp frame, in milliseconds
    #[arg(long, default_value_t = 50)]
    pub step_ms: u64,

    /// How long to hold the final pose, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub hold_ms: u64,

    /// Delay between hold publishes, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub hold_interval_ms: u64,

    /// Print commands as JSON lines instead of publishing them
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn motion_config(&self) -> MotionConfig {
        MotionConfig {
            steps: self.steps,
            step_interval: Duration::from_millis(self.step_ms),
            hold_duration: Duration::from_millis(self.hold_ms),
            hold_interval: Duration::from_millis(self.hold_interval_ms),
        }
    }

    pub fn transport_config(&self) -> TransportConfig {
        let nic = self.nic.trim();
        let mut config = TransportConfig::new(self.hand);
        config.domain_id = self.domain_id;
        config.nic = (!nic.is_empty()).then(|| nic.to_string());
        config.type_name = self.type_name.clone();
        config
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
