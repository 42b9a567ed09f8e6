use crate::*;

/// Records every level change so tests can assert the dispatch mapping.
struct RecordingActuator
{
    nodes: usize,
    log: Vec<(usize, bool)>,
}

impl RecordingActuator {
    fn new(nodes: usize) -> Self {
        RecordingActuator { nodes, log: Vec::new() }
    }
}

impl FeedbackActuator for RecordingActuator
{
    fn activate(&mut self, node: NodeId, _duration: f32) -> Result<(), ActuationError> {
        if node.0 >= self.nodes {
            return Err(ActuationError::UnknownNode(node));
        }
        self.log.push((node.0, true));
        Ok(())
    }

    fn deactivate(&mut self, node: NodeId) -> Result<(), ActuationError> {
        if node.0 >= self.nodes {
            return Err(ActuationError::UnknownNode(node));
        }
        self.log.push((node.0, false));
        Ok(())
    }
}

/// Start and a high hold both drive the node; stop and a low hold both cut
/// it. The dispatcher re-issues the level every tick on purpose.
///
#[test]
pub fn commands_map_to_levels() {
    let mut actuator = RecordingActuator::new(2);

    dispatch(&mut actuator, NodeId(0), Command::Start, 1.0).unwrap();
    dispatch(&mut actuator, NodeId(0), Command::Hold(true), 1.0).unwrap();
    dispatch(&mut actuator, NodeId(0), Command::Stop, 1.0).unwrap();
    dispatch(&mut actuator, NodeId(1), Command::Hold(false), 1.0).unwrap();

    assert_eq!(actuator.log, vec![
        (0, true),
        (0, true),
        (0, false),
        (1, false),
    ]);
}

#[test]
pub fn unknown_node_is_rejected() {
    let mut actuator = RecordingActuator::new(2);

    assert_eq!(
        dispatch(&mut actuator, NodeId(5), Command::Start, 1.0),
        Err(ActuationError::UnknownNode(NodeId(5)))
    );
    assert!(actuator.log.is_empty());
}
