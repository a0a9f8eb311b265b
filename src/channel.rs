use std::io::Write;

use rustdds::{
    no_key::DataWriter, policy, CDRSerializerAdapter, DomainParticipant,
    DomainParticipantBuilder, QosPolicyBuilder, TopicKind,
};
use tracing::{debug, info};

use crate::config::TransportConfig;
use crate::data_structure::{HandCtrl, PublishedFrame};
use crate::error::HandError;
use crate::now_micros;

/// Sink for hand control commands.
pub trait HandPublisher {
    fn topic(&self) -> &str;

    fn publish(&mut self, cmd: &HandCtrl) -> Result<(), HandError>;
}

//#region DDS
/// Participant-level settings derived from a [`TransportConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantSettings {
    pub domain_id: u16,
    /// Interfaces the participant may bind, `None` for all of them.
    pub only_networks: Option<Vec<String>>,
}

impl ParticipantSettings {
    pub fn from_config(config: &TransportConfig) -> Self {
        Self {
            domain_id: config.domain_id,
            only_networks: config.nic.as_ref().map(|nic| vec![nic.clone()]),
        }
    }

    fn build(&self) -> Result<DomainParticipant, HandError> {
        let mut builder = DomainParticipantBuilder::new(self.domain_id);
        if let Some(networks) = &self.only_networks {
            builder = builder.only_networks(networks.clone());
        }
        builder
            .build()
            .map_err(|e| HandError::Transport(format!("participant creation: {e:?}")))
    }
}

pub struct DdsPublisher {
    topic: String,
    writer: DataWriter<HandCtrl, CDRSerializerAdapter<HandCtrl>>,
    // must outlive the writer
    _participant: DomainParticipant,
}

impl DdsPublisher {
    pub fn connect(config: &TransportConfig) -> Result<Self, HandError> {
        if let Some(nic) = config.nic.as_deref() {
            check_interface(nic)?;
        }

        let topic_name = config.topic();
        let participant = ParticipantSettings::from_config(config).build()?;

        let qos = QosPolicyBuilder::new()
            .reliability(policy::Reliability::BestEffort)
            .build();

        let topic = participant
            .create_topic(
                topic_name.clone(),
                config.type_name.clone(),
                &qos,
                TopicKind::NoKey,
            )
            .map_err(|e| HandError::Transport(format!("topic {topic_name}: {e:?}")))?;

        let publisher = participant
            .create_publisher(&qos)
            .map_err(|e| HandError::Transport(format!("publisher creation: {e:?}")))?;

        let writer = publisher
            .create_datawriter_no_key::<HandCtrl, CDRSerializerAdapter<HandCtrl>>(&topic, None)
            .map_err(|e| HandError::Transport(format!("writer for {topic_name}: {e:?}")))?;

        info!(
            topic = %topic_name,
            domain = config.domain_id,
            nic = config.nic.as_deref().unwrap_or("<default>"),
            "DDS publisher ready"
        );

        Ok(Self {
            topic: topic_name,
            writer,
            _participant: participant,
        })
    }
}

impl HandPublisher for DdsPublisher {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn publish(&mut self, cmd: &HandCtrl) -> Result<(), HandError> {
        self.writer
            .write(cmd.clone(), None)
            .map_err(|e| HandError::Publish {
                topic: self.topic.clone(),
                reason: format!("{e:?}"),
            })
    }
}

/// Rejects interface names the host does not know.
fn check_interface(nic: &str) -> Result<(), HandError> {
    #[cfg(target_os = "linux")]
    {
        let path = std::path::Path::new("/sys/class/net").join(nic);
        if nic.contains('/') || !path.exists() {
            return Err(HandError::UnknownInterface(nic.to_string()));
        }
    }
    debug!(nic, "using network interface");
    Ok(())
}
//#endregion

//#region dry run
/// Writes every command as one JSON object per line.
pub struct JsonLinePublisher<W: Write> {
    topic: String,
    out: W,
    seq: u64,
}

impl<W: Write> JsonLinePublisher<W> {
    pub fn new(topic: impl Into<String>, out: W) -> Self {
        Self {
            topic: topic.into(),
            out,
            seq: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HandPublisher for JsonLinePublisher<W> {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn publish(&mut self, cmd: &HandCtrl) -> Result<(), HandError> {
        let frame = PublishedFrame {
            topic: self.topic.clone(),
            seq: self.seq,
            timestamp_us: now_micros(),
            mode: cmd.mode,
            angle_set: cmd.angle_set.clone(),
        };
        serde_json::to_writer(&mut self.out, &frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.seq += 1;
        Ok(())
    }
}
//#endregion
