use anyhow::Context;
use clap::Parser;
use runtrack::boundary::Boundary;
use runtrack::sink::{GeoJsonSink, TrackSink};
use runtrack::{Extractor, ExtractorConfig, ScanConfig, StdoutReporter, scan_directory};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScanConfig::parse();
    log::debug!("{:?}", config);

    let boundary = config
        .boundary
        .as_deref()
        .map(Boundary::load)
        .transpose()
        .context("loading boundary")?;

    let extractor = Extractor::new(ExtractorConfig::default());
    let mut reporter = StdoutReporter;

    println!("\n--- Extracting tracks ---");
    let summary = scan_directory(&config.data_dir, config.recursive, &extractor, &mut reporter)?;

    let mut sink: Box<dyn TrackSink> = Box::new(
        GeoJsonSink::create(&config.output)
            .with_context(|| format!("creating {}", config.output.display()))?,
    );

    let (kept, outside) = match &boundary {
        Some(boundary) => boundary.filter(summary.contributing_tracks(), &mut reporter),
        None => (summary.contributing_tracks().collect(), 0),
    };
    for result in kept {
        sink.accept(result)?;
    }

    let written = sink.finish()?;

    println!("\n--- Summary ---");
    println!("Scanned {} activity files", summary.files_seen);
    println!(
        "✓ {} tracks with {} points",
        summary.contributing,
        summary.total_points()
    );
    println!(
        "Skipped {} non-run, {} empty, {} outside boundary",
        summary.rejected, summary.empty, outside
    );
    if summary.errors > 0 {
        println!("✗ {} files could not be read", summary.errors);
    }
    println!(
        "✓ Successfully wrote {} tracks to {}",
        written,
        config.output.display()
    );

    Ok(())
}
