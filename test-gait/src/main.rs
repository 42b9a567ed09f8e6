use std::{env, fs::{self, File}, io::Write, path::Path};
use gait::{
    dispatch, Command, DetectorConfig, FeedbackActuator, ActuationError,
    FootPipeline, NodeId, SessionConfig,
};

static RESULTS_DIR: &str = "analysis";

/// Stands in for the vibration motor driver: just logs the level changes.
struct LogActuator;

impl FeedbackActuator for LogActuator {
    fn activate(&mut self, node: NodeId, duration: f32) -> Result<(), ActuationError> {
        log::trace!("activate {} for {}s", node, duration);
        Ok(())
    }

    fn deactivate(&mut self, node: NodeId) -> Result<(), ActuationError> {
        log::trace!("deactivate {}", node);
        Ok(())
    }
}

/// Deserialized CSV row, or `None` when the row was unusable and got
/// logged instead.
fn parse_row(result: Result<Vec<f32>, csv::Error>) -> Option<Vec<f32>> {
    match result {
        Ok(record) if record.len() >= 8 => Some(record),
        Ok(record) => {
            log::warn!("Skipping row with {} columns", record.len());
            None
        },
        Err(err) => {
            log::warn!("Skipping unreadable row: {}", err);
            None
        },
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        panic!("Expected CSV file to read data from");
    }

    // An optional second argument overrides the recording's sample rate.
    let mut config = SessionConfig::default();
    if args.len() > 2 {
        config.detector = DetectorConfig {
            sample_rate: args[2].parse().unwrap(),
            ..config.detector
        };
    }
    log::info!("Replaying at {} Hz", config.detector.sample_rate);

    let mut pipeline = FootPipeline::new(&config).unwrap();
    let mut actuator = LogActuator;
    let node = NodeId(0);

    // Open the input CSV file.
    let in_path = Path::new(&args[1]);
    let in_file = File::open(in_path).unwrap();

    // Every input CSV file gets its own folder in the results directory.
    let out_dir = in_path.file_name().unwrap().to_str().unwrap().to_string().replace(".csv", "");
    let out_dir = format!("{}/{}", RESULTS_DIR, out_dir);
    fs::create_dir_all(&out_dir).unwrap();

    let mut angle_file = File::create(format!("{}/{}", out_dir, "angle.csv")).unwrap();
    angle_file.write(b"time,angle,raw_roll\n").unwrap();

    let mut phase_file = File::create(format!("{}/{}", out_dir, "phase.csv")).unwrap();
    phase_file.write(b"time,phase,gyro_magnitude,step_count,late_entry\n").unwrap();

    let mut feedback_file = File::create(format!("{}/{}", out_dir, "feedback.csv")).unwrap();
    feedback_file.write(b"time,command,active\n").unwrap();

    // Loop over every line in the input CSV.
    let mut reader = csv::Reader::from_reader(in_file);
    for result in reader.deserialize::<Vec<f32>>() {
        let record = match parse_row(result) {
            Some(record) => record,
            None => continue,
        };

        let time = record[0];
        let out = match pipeline.tick(&record[1..5], &record[5..8]) {
            Ok(out) => out,
            Err(err) => {
                log::warn!("Skipping sample at {}: {}", time, err);
                continue;
            },
        };

        match out.command {
            Command::Start => log::info!(
                "{}: pulse start, entering {}", time, out.phase().label()
            ),
            Command::Stop => log::info!("{}: pulse stop", time),
            Command::Hold(_) => {},
        }
        dispatch(&mut actuator, node, out.command, config.feedback.pulse_length).unwrap();

        angle_file.write(format!(
            "{},{},{}\n",
            time, out.angle, pipeline.estimator().raw_roll
        ).as_bytes()).unwrap();

        phase_file.write(format!(
            "{},{},{},{},{}\n",
            time,
            out.phase().label(),
            pipeline.detector().gyro_magnitude,
            pipeline.detector().step_count(),
            out.transition.entered_late_stance()
        ).as_bytes()).unwrap();

        feedback_file.write(format!(
            "{},{:?},{}\n",
            time, out.command, pipeline.scheduler().is_active()
        ).as_bytes()).unwrap();
    }

    log::info!("Replay done: {} steps", pipeline.detector().step_count());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows that fail to deserialize (bad number, wrong column count) are
    /// dropped without aborting the replay.
    #[test]
    fn unreadable_and_short_rows_are_skipped() {
        let data = b"time,a,b,c,d,e,f,g\n\
            0.01,1.0,0.0,0.0,0.0,3.0,4.0,0.0\n\
            0.02,oops,0.0,0.0,0.0,3.0,4.0,0.0\n\
            0.03,1.0,0.0,0.0\n\
            0.04,1.0,0.0,0.0,0.0,30.0,40.0,0.0\n";
        let mut reader = csv::Reader::from_reader(&data[..]);
        let rows: Vec<Vec<f32>> = reader
            .deserialize::<Vec<f32>>()
            .filter_map(parse_row)
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], 0.01);
        assert_eq!(rows[1][0], 0.04);
    }
}
