//! Video job with a caller-driven polling loop.
//!
//! Run with: `cargo run --example poll_video`
//!
//! Requires `DECART_API_KEY` environment variable.

use decart_adapter::{DecartVideoAdapter, GenerationRequest, VideoAdapter};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_secs(3);
const GIVE_UP_AFTER: Duration = Duration::from_secs(600);

#[tokio::main]
async fn main() -> decart_adapter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let adapter = DecartVideoAdapter::builder()
        .timeout(Duration::from_secs(120))
        .build()?;

    let request = GenerationRequest::new("Ocean waves crashing on a rocky shore at sunset")
        .with_size("1280x720")
        .with_orientation("landscape");

    let job = adapter.create_video_job(&request).await?;
    println!("submitted {} ({})", job.job_id, job.status);

    let start = Instant::now();
    loop {
        let status = adapter.get_video_status(&job.job_id).await?;
        if status.status.is_completed() {
            break;
        }
        if status.status.is_failed() {
            eprintln!("job {} failed", job.job_id);
            return Ok(());
        }
        if start.elapsed() > GIVE_UP_AFTER {
            // the backend keeps running the job; we just stop asking
            eprintln!("gave up on {} after {:?}", job.job_id, start.elapsed());
            return Ok(());
        }
        println!("{}: {}", job.job_id, status.status);
        tokio::time::sleep(POLL_INTERVAL).await;
    }

    let video = adapter.get_video_url(&job.job_id).await?;
    println!(
        "{} finished: data URL of {} chars",
        video.job_id,
        video.url.len()
    );

    Ok(())
}
