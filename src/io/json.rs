use std::io::{self, Write};

use crate::control::PidController;
use crate::sim::Sample;

/// Step-response metrics computed from a closed-loop run.
///
/// All step-relative quantities (overshoot, rise, settling) are measured
/// against the commanded step from the first sample's measurement to the
/// setpoint.
#[derive(Debug, Clone, Default)]
pub struct ResponseSummary {
    pub final_value: f64,
    pub peak: f64,
    pub peak_time: f64,
    /// Percent of the step the peak travelled past the setpoint; 0 when the
    /// response never crossed it.
    pub overshoot_pct: f64,
    /// Time from the 10% to the 90% crossing of the step; `None` if the
    /// response never reached 90%.
    pub rise_time: Option<f64>,
    /// Time after which the response stayed inside a 2% band around the
    /// setpoint, if it stayed in by the end of the run.
    pub settling_time: Option<f64>,
    pub steady_state_error: f64,
    pub saturated_steps: usize,
}

impl ResponseSummary {
    /// Compute a summary from loop samples. An empty run yields a zeroed
    /// summary with no rise or settling time.
    pub fn from_samples(samples: &[Sample]) -> Self {
        if samples.is_empty() {
            return ResponseSummary::default();
        }
        let first = &samples[0];
        let setpoint = first.setpoint;
        let initial = first.measurement;
        let span = setpoint - initial;

        // Peak is the farthest excursion in the step direction.
        let peak_sample = samples
            .iter()
            .max_by(|a, b| {
                let ka = (a.measurement - initial) * span.signum();
                let kb = (b.measurement - initial) * span.signum();
                ka.total_cmp(&kb)
            })
            .unwrap_or(first);

        let overshoot_pct = if span != 0.0 {
            (((peak_sample.measurement - initial) / span - 1.0) * 100.0).max(0.0)
        } else {
            0.0
        };

        let crossing = |fraction: f64| {
            samples
                .iter()
                .find(|s| (s.measurement - initial) / span >= fraction)
                .map(|s| s.time)
        };
        let rise_time = if span != 0.0 {
            match (crossing(0.1), crossing(0.9)) {
                (Some(t10), Some(t90)) => Some(t90 - t10),
                _ => None,
            }
        } else {
            None
        };

        let band = 0.02 * span.abs();
        let settling_time = if span != 0.0 {
            match samples.iter().rposition(|s| (s.measurement - setpoint).abs() > band) {
                None => Some(first.time),
                Some(i) if i + 1 < samples.len() => Some(samples[i + 1].time),
                Some(_) => None,
            }
        } else {
            None
        };

        let saturated_steps = samples.iter().filter(|s| s.status.is_saturated()).count();
        let last = samples.last().unwrap_or(first);

        ResponseSummary {
            final_value: last.measurement,
            peak: peak_sample.measurement,
            peak_time: peak_sample.time,
            overshoot_pct,
            rise_time,
            settling_time,
            steady_state_error: last.error,
            saturated_steps,
        }
    }
}

/// Write a loop summary as JSON to a writer.
///
/// `rise_time_s` and `settling_time_s` are `null` when the response never
/// reached them within the run.
pub fn write_summary<W: Write>(
    writer: &mut W,
    plant_name: &str,
    pid: &PidController,
    summary: &ResponseSummary,
) -> io::Result<()> {
    let gains = pid.gains();
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"loop\": {{")?;
    writeln!(writer, "    \"plant\": \"{}\",", plant_name)?;
    writeln!(writer, "    \"mode\": \"{}\",", pid.mode())?;
    writeln!(writer, "    \"gains\": [{}, {}, {}],", gains.kp, gains.ki, gains.kd)?;
    writeln!(writer, "    \"sample_period_s\": {:.6}", pid.sample_period())?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"response\": {{")?;
    writeln!(writer, "    \"final_value\": {:.4},", summary.final_value)?;
    writeln!(writer, "    \"peak\": {:.4},", summary.peak)?;
    writeln!(writer, "    \"peak_time_s\": {:.3},", summary.peak_time)?;
    writeln!(writer, "    \"overshoot_pct\": {:.1},", summary.overshoot_pct)?;
    match summary.rise_time {
        Some(t) => writeln!(writer, "    \"rise_time_s\": {:.3},", t)?,
        None => writeln!(writer, "    \"rise_time_s\": null,")?,
    }
    match summary.settling_time {
        Some(t) => writeln!(writer, "    \"settling_time_s\": {:.3},", t)?,
        None => writeln!(writer, "    \"settling_time_s\": null,")?,
    }
    writeln!(writer, "    \"steady_state_error\": {:.6},", summary.steady_state_error)?;
    writeln!(writer, "    \"saturated_steps\": {}", summary.saturated_steps)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a loop summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    plant_name: &str,
    pid: &PidController,
    summary: &ResponseSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, plant_name, pid, summary)
}
