//! Incremental byte stream for document renderers
//!
//! A producer thread writes the document into a [`ChunkSink`]; every buffered
//! chunk crosses a bounded channel to the consumer holding the [`PdfStream`].
//! The producer always finishes with exactly one terminal event: `Done` on
//! success or `Failed` on error. A consumer never sees a clean end after a
//! failed render.
//!
//! Dropping the stream hangs up the channel. The producer's next write then
//! fails with `BrokenPipe`, it unwinds, and the drop joins the thread.

use log::{debug, warn};
use std::io::{self, BufWriter, Read, Write};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use crate::config::StreamSettings;
use crate::error::{ReportError, ReportResult};

enum StreamEvent {
    Chunk(Vec<u8>),
    Done,
    Failed(ReportError),
}

/// Write end handed to the producer
///
/// Each `write` call becomes one chunk; wrap it in a `BufWriter` (as
/// [`PdfStream::spawn`] does) to control chunk size.
pub struct ChunkSink {
    tx: SyncSender<StreamEvent>,
}

impl Write for ChunkSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.tx
            .send(StreamEvent::Chunk(buf.to_vec()))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "report consumer hung up"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Consumer end of a streamed document
///
/// Yields chunks in document order. After the last chunk the iterator ends
/// (`None`); if rendering failed it yields one `Err` first and then ends.
/// Through `Read`, a failure is reported on every call, never as end of file.
pub struct PdfStream {
    rx: Option<Receiver<StreamEvent>>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
    failed: Option<ReportError>,
    pending: Vec<u8>,
    pending_pos: usize,
}

impl PdfStream {
    /// Run `produce` on a new thread and stream whatever it writes
    pub fn spawn<F>(settings: StreamSettings, produce: F) -> ReportResult<Self>
    where
        F: FnOnce(&mut BufWriter<ChunkSink>) -> ReportResult<()> + Send + 'static,
    {
        let (tx, rx) = sync_channel(settings.channel_capacity.max(1));
        let chunk_size = settings.chunk_size.max(1);

        let worker = thread::Builder::new()
            .name("report-stream".into())
            .spawn(move || {
                let done_tx = tx.clone();
                let mut writer = BufWriter::with_capacity(chunk_size, ChunkSink { tx });

                let outcome = produce(&mut writer).and_then(|()| {
                    writer.flush().map_err(|e| map_write_error(&e))
                });

                // Release the writer's sender before the terminal event
                drop(writer);

                let terminal = match outcome {
                    Ok(()) => StreamEvent::Done,
                    Err(err) => {
                        debug!("Report stream producer failed: {}", err);
                        StreamEvent::Failed(err)
                    }
                };
                // Nobody to tell if the consumer is already gone
                let _ = done_tx.send(terminal);
            })
            .map_err(|e| ReportError::render("pdf", format!("failed to start producer: {}", e)))?;

        Ok(Self {
            rx: Some(rx),
            worker: Some(worker),
            finished: false,
            failed: None,
            pending: Vec::new(),
            pending_pos: 0,
        })
    }

    /// Drain the whole stream into memory
    pub fn collect_bytes(self) -> ReportResult<Vec<u8>> {
        let mut out = Vec::new();
        for chunk in self {
            out.extend_from_slice(&chunk?);
        }
        Ok(out)
    }

    /// Whether the terminal event has been observed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) {
        self.finished = true;
        self.rx = None;
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Report stream producer panicked");
            }
        }
    }
}

pub(crate) fn map_write_error(err: &io::Error) -> ReportError {
    if err.kind() == io::ErrorKind::BrokenPipe {
        ReportError::StreamAborted("consumer stopped reading".into())
    } else {
        ReportError::render("pdf", err.to_string())
    }
}

impl Iterator for PdfStream {
    type Item = ReportResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let event = self.rx.as_ref().map(|rx| rx.recv());
        match event {
            Some(Ok(StreamEvent::Chunk(bytes))) => Some(Ok(bytes)),
            Some(Ok(StreamEvent::Done)) | None => {
                self.finish();
                None
            }
            Some(Ok(StreamEvent::Failed(err))) => {
                self.finish();
                Some(Err(err))
            }
            Some(Err(_)) => {
                self.finish();
                Some(Err(ReportError::StreamAborted(
                    "producer exited without finishing the document".into(),
                )))
            }
        }
    }
}

impl Read for PdfStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pending_pos >= self.pending.len() {
            if let Some(err) = &self.failed {
                return Err(io::Error::other(err.clone()));
            }
            match self.next() {
                Some(Ok(chunk)) => {
                    self.pending = chunk;
                    self.pending_pos = 0;
                }
                Some(Err(err)) => {
                    self.failed = Some(err.clone());
                    return Err(io::Error::other(err));
                }
                None => return Ok(0),
            }
        }

        let available = &self.pending[self.pending_pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pending_pos += n;
        Ok(n)
    }
}

impl Drop for PdfStream {
    fn drop(&mut self) {
        if !self.finished {
            debug!("Report stream dropped before end-of-stream; cancelling producer");
            self.finish();
        }
    }
}
