use log::error;
use rain_window::{PipelineConfig, RainWindow};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Set RUST_LOG=info (or debug) to follow the fetches.
    env_logger::init();

    let pipeline = RainWindow::new(reqwest::blocking::Client::new(), PipelineConfig::default());
    match pipeline.run() {
        Ok(report) => {
            for chart in report.charts() {
                chart.render();
            }
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            // The top-level message already includes the stage error.
            let mut cause = e.source().and_then(|stage| stage.source());
            while let Some(inner) = cause {
                error!("  caused by: {inner}");
                cause = inner.source();
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
