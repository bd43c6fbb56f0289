// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raw TCP print transport (JetDirect, port 9100).
//
// The simplest possible print protocol: open a TCP socket and dump bytes.
// No framing, no acknowledgment, no handshake — the printer's firmware
// consumes a bare byte stream and TCP close marks end of job. The printer
// must be able to interpret the document format natively.

use std::io;
use std::time::Duration;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use jetrelay_core::error::{DispatchError, Result};
use jetrelay_core::types::PrintJob;

use crate::target::PrinterTarget;

/// Default raw TCP port (HP JetDirect).
pub const RAW_PORT: u16 = 9100;

/// Stream chunk size. Bounds memory use for arbitrarily large documents.
const CHUNK_SIZE: usize = 8192;

/// Send the job file's bytes directly to the printer via raw TCP.
///
/// The whole operation — connect, stream, flush, shutdown — runs under one
/// hard `timeout`. On timeout the connection is torn down and reported as a
/// network failure; there is no partial-send recovery or resume.
pub async fn send_raw(
    target: &PrinterTarget,
    job: &PrintJob,
    timeout: Duration,
) -> Result<String> {
    let host = target.host().ok_or(DispatchError::UnresolvableHost)?;
    let port = target.socket_port();
    let addr = format!("{host}:{port}");
    info!(addr = %addr, job = %job.id, "connecting via raw TCP");

    let sent = tokio::time::timeout(timeout, stream_file(&addr, job))
        .await
        .map_err(|_| {
            DispatchError::Network(format!(
                "connection to {addr} timed out after {}s",
                timeout.as_secs()
            ))
        })?
        .map_err(|e| DispatchError::Network(e.to_string()))?;

    info!(total = sent, addr = %addr, "raw TCP print job sent");
    Ok("Print job sent to printer over raw socket successfully.".to_string())
}

/// Connect and copy the job file to the socket in fixed-size chunks.
///
/// Returns the number of bytes transmitted. Sockets and the file handle are
/// dropped on every exit path.
async fn stream_file(addr: &str, job: &PrintJob) -> io::Result<usize> {
    let mut stream = TcpStream::connect(addr).await?;
    let mut file = File::open(job.path()).await?;

    let mut buf = [0u8; CHUNK_SIZE];
    let mut sent = 0usize;
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&buf[..n]).await?;
        sent += n;
        debug!(sent, "raw TCP progress");
    }

    stream.flush().await?;
    stream.shutdown().await?;
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio::net::TcpListener;

    use super::*;

    fn job_with_bytes(bytes: &[u8]) -> (tempfile::NamedTempFile, PrintJob) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        let job = PrintJob::new(file.path());
        (file, job)
    }

    /// Listener that accepts one connection and returns everything read
    /// until the peer closes.
    async fn capture_one(listener: TcpListener) -> Vec<u8> {
        let (mut conn, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        conn.read_to_end(&mut received).await.unwrap();
        received
    }

    #[tokio::test]
    async fn delivers_exact_bytes_then_closes() {
        let payload: Vec<u8> = (0..500u32).map(|i| (i % 251) as u8).collect();
        let (_file, job) = job_with_bytes(&payload);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let capture = tokio::spawn(capture_one(listener));

        let target = PrinterTarget::normalize(&format!("socket://127.0.0.1:{port}")).unwrap();
        let message = send_raw(&target, &job, Duration::from_secs(10))
            .await
            .unwrap();

        assert_eq!(
            message,
            "Print job sent to printer over raw socket successfully."
        );
        assert_eq!(capture.await.unwrap(), payload);
    }

    #[tokio::test]
    async fn streams_documents_larger_than_one_chunk() {
        // Three full chunks plus a ragged tail.
        let payload: Vec<u8> = (0..CHUNK_SIZE * 3 + 777).map(|i| (i % 256) as u8).collect();
        let (_file, job) = job_with_bytes(&payload);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let capture = tokio::spawn(capture_one(listener));

        let target = PrinterTarget::normalize(&format!("socket://127.0.0.1:{port}")).unwrap();
        send_raw(&target, &job, Duration::from_secs(10)).await.unwrap();

        assert_eq!(capture.await.unwrap(), payload);
    }

    #[tokio::test]
    async fn empty_document_sends_zero_bytes() {
        let (_file, job) = job_with_bytes(b"");

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let capture = tokio::spawn(capture_one(listener));

        let target = PrinterTarget::normalize(&format!("socket://127.0.0.1:{port}")).unwrap();
        send_raw(&target, &job, Duration::from_secs(10)).await.unwrap();

        assert!(capture.await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_failure() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let (_file, job) = job_with_bytes(b"doc");
        let target = PrinterTarget::normalize(&format!("socket://127.0.0.1:{port}")).unwrap();
        let err = send_raw(&target, &job, Duration::from_secs(10))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Network(_)));
        assert!(err.to_string().starts_with("Failed to send data to printer:"));
    }

    #[tokio::test]
    async fn missing_file_is_a_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let _capture = tokio::spawn(capture_one(listener));

        let job = PrintJob::new("/nonexistent/jetrelay-test-doc.pdf");
        let target = PrinterTarget::normalize(&format!("socket://127.0.0.1:{port}")).unwrap();
        let err = send_raw(&target, &job, Duration::from_secs(10))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Network(_)));
    }

    #[tokio::test]
    async fn expired_deadline_reports_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let _listener = listener; // keep the port open but never accept

        let (_file, job) = job_with_bytes(b"doc");
        let target = PrinterTarget::normalize(&format!("socket://127.0.0.1:{port}")).unwrap();
        // Zero deadline: the timer fires before connect can complete.
        let err = send_raw(&target, &job, Duration::from_secs(0))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Network(_)));
        assert!(err.to_string().contains("timed out"));
    }
}
