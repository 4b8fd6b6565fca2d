use std::io::{self, Write};

use crate::sim::Sample;

/// Write loop samples to CSV format.
///
/// Columns: time, setpoint, measurement, error, output, integral,
///          out_sat, int_sat
///
/// The saturation columns are 0/1 flags decoded from each sample's status.
pub fn write_response<W: Write>(writer: &mut W, samples: &[Sample]) -> io::Result<()> {
    writeln!(writer, "time,setpoint,measurement,error,output,integral,out_sat,int_sat")?;

    for s in samples {
        writeln!(
            writer,
            "{:.4},{:.4},{:.6},{:.6},{:.6},{:.6},{},{}",
            s.time,
            s.setpoint,
            s.measurement,
            s.error,
            s.output,
            s.integral,
            s.status.output_saturated() as u8,
            s.status.integral_saturated() as u8,
        )?;
    }

    Ok(())
}

/// Write loop samples to a CSV file at the given path.
pub fn write_response_file(path: &str, samples: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_response(&mut file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ComputeStatus;

    #[test]
    fn csv_output_has_header_and_rows() {
        let samples = vec![
            Sample {
                time: 0.0,
                setpoint: 1.0,
                measurement: 0.0,
                error: 1.0,
                output: 2.0,
                integral: 0.01,
                status: ComputeStatus::Succeeded,
            },
            Sample {
                time: 0.01,
                setpoint: 1.0,
                measurement: 0.2,
                error: 0.8,
                output: 1.0,
                integral: 0.018,
                status: ComputeStatus::OutputOverflow,
            },
        ];

        let mut buf = Vec::new();
        write_response(&mut buf, &samples).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,setpoint,measurement,error,output,integral,out_sat,int_sat");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,"));
        assert!(lines[1].ends_with(",0,0"));
        assert!(lines[2].ends_with(",1,0"), "Output saturation flag should be set");
    }
}
