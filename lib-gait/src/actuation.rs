use core::{error::Error, fmt};

use crate::feedback::Command;

/// Identifies one feedback output on the actuator hardware.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuationError
{
    UnknownNode(NodeId),
}

impl Error for ActuationError {}

impl fmt::Display for ActuationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "Unknown feedback {}", node),
        }
    }
}

/// Hardware seam for whatever delivers the feedback pulses.
///
/// Implementations should treat repeated calls as idempotent level setting:
/// the dispatcher re-issues the current level on every tick rather than only
/// on edges.
///
pub trait FeedbackActuator
{
    /// Drive the node for at most `duration` seconds.
    fn activate(&mut self, node: NodeId, duration: f32) -> Result<(), ActuationError>;

    /// Cut the node's output now.
    fn deactivate(&mut self, node: NodeId) -> Result<(), ActuationError>;
}

/// Apply one scheduler command to one actuator node.
///
pub fn dispatch<A: FeedbackActuator>(
    actuator: &mut A,
    node: NodeId,
    command: Command,
    pulse_length: f32,
) -> Result<(), ActuationError> {
    match command {
        Command::Start | Command::Hold(true) => actuator.activate(node, pulse_length),
        Command::Stop | Command::Hold(false) => actuator.deactivate(node),
    }
}
