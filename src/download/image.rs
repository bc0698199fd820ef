//! Single image downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::api::UnsplashApi;
use crate::error::{Error, Result};
use crate::media::ImageRecord;

/// What happened to one queued record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Written to the given path.
    Downloaded(PathBuf),
    /// A file with the same name was already present.
    SkippedExisting,
    /// Width or height not greater than 1.
    SkippedInvalid,
    /// Request or write failed; the reason is kept for reporting.
    Failed(String),
}

/// Download one record into `destination`.
///
/// Never fails as a whole: every problem is reported on the console and
/// turned into an [`Outcome`].
pub async fn download_record(
    api: &UnsplashApi,
    record: &ImageRecord,
    destination: &Path,
) -> Outcome {
    let output_path = destination.join(record.filename());

    // Check if file already exists
    match tokio::fs::try_exists(&output_path).await {
        Ok(true) => {
            tracing::debug!("Skipping existing file: {}", output_path.display());
            return Outcome::SkippedExisting;
        }
        Ok(false) => {}
        Err(e) => {
            tracing::debug!("Could not check {}: {}", output_path.display(), e);
        }
    }

    if let Err(e) = record.validate() {
        tracing::warn!("unable to download '{}': {}", record.id, e);
        return Outcome::SkippedInvalid;
    }

    tracing::info!(
        "downloading wallpaper {}, {}",
        record.id,
        record.referrer_url
    );

    match download_direct(api, record, &output_path).await {
        Ok(()) => Outcome::Downloaded(output_path),
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::debug!("Another worker created {}", output_path.display());
            Outcome::SkippedExisting
        }
        Err(e) => {
            tracing::warn!("unable to request '{}': {}", record.id, e);
            Outcome::Failed(e.to_string())
        }
    }
}

/// Stream the image body into a newly created file.
///
/// The file is only created after a `200 OK`, with create-exclusive
/// semantics. A body that breaks off part-way leaves no file behind.
async fn download_direct(
    api: &UnsplashApi,
    record: &ImageRecord,
    output_path: &Path,
) -> Result<()> {
    let response = api.download_file(&record.source_url).await?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output_path)
        .await?;

    let written = stream_body(response, &mut file).await;
    drop(file);

    if let Err(e) = written {
        if let Err(remove_err) = tokio::fs::remove_file(output_path).await {
            tracing::warn!(
                "Failed to remove partial file {}: {}",
                output_path.display(),
                remove_err
            );
        }
        return Err(e);
    }

    Ok(())
}

async fn stream_body(response: reqwest::Response, file: &mut tokio::fs::File) -> Result<()> {
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DownloaderConfig;
    use crate::media::record::tests::sample_record;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api() -> UnsplashApi {
        UnsplashApi::new(&DownloaderConfig::default()).unwrap()
    }

    fn record_at(server: &MockServer, id: &str, width: u32, height: u32) -> ImageRecord {
        let mut record = sample_record(id, width, height);
        record.source_url = format!("{}/images/{}", server.uri(), id);
        record
    }

    #[tokio::test]
    async fn test_download_writes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg bytes".to_vec()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let record = record_at(&server, "abc", 640, 480);

        let outcome = download_record(&api(), &record, dir.path()).await;

        let expected = dir.path().join("abc_jdoe_640x480.jpg");
        assert_eq!(outcome, Outcome::Downloaded(expected.clone()));
        assert_eq!(std::fs::read(expected).unwrap(), b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_existing_file_not_refetched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new".to_vec()))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let record = record_at(&server, "abc", 640, 480);
        let existing = dir.path().join(record.filename());
        std::fs::write(&existing, b"old").unwrap();

        let outcome = download_record(&api(), &record, dir.path()).await;

        assert_eq!(outcome, Outcome::SkippedExisting);
        assert_eq!(std::fs::read(existing).unwrap(), b"old");
    }

    #[tokio::test]
    async fn test_invalid_record_skipped_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let record = record_at(&server, "zero", 0, 500);

        let outcome = download_record(&api(), &record, dir.path()).await;

        assert_eq!(outcome, Outcome::SkippedInvalid);
        assert!(!dir.path().join(record.filename()).exists());
    }

    #[tokio::test]
    async fn test_not_found_leaves_no_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let record = record_at(&server, "missing", 640, 480);

        let outcome = download_record(&api(), &record, dir.path()).await;

        match outcome {
            Outcome::Failed(reason) => assert!(reason.contains("404"), "{}", reason),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(!dir.path().join(record.filename()).exists());
    }

    #[tokio::test]
    async fn test_unreadable_destination_reports_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        std::fs::write(&not_a_dir, b"").unwrap();
        let record = record_at(&server, "abc", 640, 480);

        let outcome = download_record(&api(), &record, &not_a_dir).await;

        assert!(matches!(outcome, Outcome::Failed(_)), "{:?}", outcome);
    }
}
