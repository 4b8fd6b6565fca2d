use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use pid_loop::io::ResponseSummary;
use pid_loop::plant::presets;
use pid_loop::sim;
use pid_loop::{Gains, Limits, LoopConfig, PidController, Plant, Sample};

fn main() -> eframe::Result {
    let mut plant = presets::servo();
    let mut pid = PidController::with_limits(
        Gains::new(12.0, 20.0, 0.6),
        200.0,
        Limits::symmetric(4.0),
        Limits::symmetric(0.2),
    );
    let config = LoopConfig { sample_rate_hz: 200.0, duration: 4.0, setpoint: 1.0 };
    let samples = sim::simulate_with(&mut plant, &mut pid, &config);
    let plant_name = plant.name().to_string();

    let app = LoopViz { samples, plant_name };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("PID Loop Viewer", options, Box::new(|_| Ok(Box::new(app))))
}

struct LoopViz {
    samples: Vec<Sample>,
    plant_name: String,
}

impl eframe::App for LoopViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.samples.len() / 2000).max(1);
        let sampled: Vec<&Sample> = self.samples.iter().step_by(step).collect();
        let summary = ResponseSummary::from_samples(&self.samples);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Loop: {}", self.plant_name));
            ui.label(format!(
                "Overshoot: {:.1}%  |  Settling: {}  |  Steady-state error: {:+.4}  |  Saturated: {} steps",
                summary.overshoot_pct,
                match summary.settling_time {
                    Some(t) => format!("{:.2} s", t),
                    None => "n/a".into(),
                },
                summary.steady_state_error,
                summary.saturated_steps,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Measurement vs setpoint
                ui.vertical(|ui| {
                    ui.label("Response");
                    let measured: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.measurement])
                        .collect();
                    let setpoint: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.setpoint])
                        .collect();
                    Plot::new("response")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Measurement", measured));
                            plot_ui.line(Line::new("Setpoint", setpoint));
                        });
                });

                // Controller output
                ui.vertical(|ui| {
                    ui.label("Command");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.output])
                        .collect();
                    Plot::new("command")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Output", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Error
                ui.vertical(|ui| {
                    ui.label("Error");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.error])
                        .collect();
                    Plot::new("error")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Error", points));
                        });
                });

                // Integral accumulator (shows the anti-windup clamp)
                ui.vertical(|ui| {
                    ui.label("Integral Accumulator");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.integral])
                        .collect();
                    Plot::new("integral")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Integral", points));
                        });
                });
            });
        });
    }
}
