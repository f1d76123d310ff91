use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use stencil_filter::config::{load_config, RuntimeConfig};
use stencil_filter::engine::{filter_parallel, filter_serial};
use stencil_filter::error::FilterError;
use stencil_filter::image::{load_grayscale_image, save_grayscale_image, PixelBuffer};
use stencil_filter::kernel::{BoxAverage, Median};

fn timed_pass<F>(label: &str, input: &PixelBuffer, path: &Path, pass: F) -> Result<(), String>
where
    F: FnOnce(&PixelBuffer, &mut PixelBuffer) -> Result<(), FilterError>,
{
    let mut output = PixelBuffer::new(input.w, input.h);
    let start = Instant::now();
    pass(input, &mut output).map_err(|e| format!("{label} failed: {e}"))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("{label}: {elapsed_ms:.3} ms");
    save_grayscale_image(&output, path)
}

fn run(config: &RuntimeConfig) -> Result<(), String> {
    let input = load_grayscale_image(&config.input_path)?;
    let workers = config.engine.workers;
    println!(
        "{} is {}x{}; parallel passes use {workers} spawned workers",
        config.input_path.display(),
        input.w,
        input.h
    );

    timed_pass(
        "serial average",
        &input,
        &config.output.serial_average,
        |i, o| filter_serial(i, o, &BoxAverage),
    )?;
    timed_pass(
        "parallel average",
        &input,
        &config.output.parallel_average,
        |i, o| filter_parallel(i, o, &BoxAverage, workers),
    )?;
    timed_pass(
        "serial median",
        &input,
        &config.output.serial_median,
        |i, o| filter_serial(i, o, &Median),
    )?;
    timed_pass(
        "parallel median",
        &input,
        &config.output.parallel_median,
        |i, o| filter_parallel(i, o, &Median, workers),
    )?;
    Ok(())
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (Some(config_path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: stencil-filter <config.json>");
        return ExitCode::FAILURE;
    };

    let config = match load_config(Path::new(&config_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
