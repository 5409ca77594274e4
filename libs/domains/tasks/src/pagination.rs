//! Windowed export of the task table.
//!
//! The row count is snapshotted once. From the requested offset the streamer
//! then walks the table in windows of `concurrency` range queries, each
//! `limit` rows wide:
//!
//! ```text
//! offset = 0, limit = 1, concurrency = 2, total = 3
//!
//! window 0: [0] [1]    -> 2 pages, completion order
//! window 1: [2] (3)    -> 1 page, sub-offset 3 >= total is skipped
//! offset = 4 >= 3      -> done
//! ```
//!
//! Pages inside a window arrive in completion order and carry their own
//! offset. A window is fully resolved, and every page of it taken by the
//! consumer, before the next one starts. The first failing range query aborts
//! its siblings and ends the stream; pages already handed to the sink stay
//! delivered.
//!
//! `concurrency` has no upper bound here. Callers exposed to untrusted input
//! should clamp it (see [`Window::clamp_concurrency`]).

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll, ready};

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio_stream::Stream;

use crate::error::{TaskError, TaskResult};
use crate::models::{Page, Window};
use crate::repository::TaskRepository;

/// Pages a window may queue ahead of the consumer
pub const PAGE_BUFFER: usize = 16;

/// Destination for pages produced by [`stream_pages`].
#[async_trait]
pub trait PageSink: Send + Sync + 'static {
    /// Deliver one page. An error means the consumer is gone.
    async fn send(&self, page: Page) -> TaskResult<()>;

    /// Resolve once every page sent so far has been taken by the consumer.
    async fn drained(&self) -> TaskResult<()> {
        Ok(())
    }
}

/// Producer half of [`page_channel`]
#[derive(Clone)]
pub struct PageSender {
    tx: mpsc::Sender<TaskResult<Page>>,
    sent: Arc<AtomicU64>,
    consumed: watch::Receiver<u64>,
}

/// Consumer half of [`page_channel`]: a stream of pages that counts what it
/// has handed out.
pub struct PageReceiver {
    rx: mpsc::Receiver<TaskResult<Page>>,
    consumed: watch::Sender<u64>,
}

/// Bounded page channel whose sender can wait for the consumer to catch up.
pub fn page_channel(buffer: usize) -> (PageSender, PageReceiver) {
    let (tx, rx) = mpsc::channel(buffer);
    let (consumed_tx, consumed_rx) = watch::channel(0);

    let sender = PageSender {
        tx,
        sent: Arc::new(AtomicU64::new(0)),
        consumed: consumed_rx,
    };
    let receiver = PageReceiver {
        rx,
        consumed: consumed_tx,
    };
    (sender, receiver)
}

fn consumer_closed() -> TaskError {
    TaskError::Stream("page consumer closed".to_string())
}

impl PageSender {
    /// Deliver the error that ends the stream.
    pub async fn fail(&self, err: TaskError) {
        let _ = self.tx.send(Err(err)).await;
    }
}

#[async_trait]
impl PageSink for PageSender {
    async fn send(&self, page: Page) -> TaskResult<()> {
        self.tx.send(Ok(page)).await.map_err(|_| consumer_closed())?;
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn drained(&self) -> TaskResult<()> {
        let sent = self.sent.load(Ordering::SeqCst);
        let mut consumed = self.consumed.clone();
        consumed
            .wait_for(|taken| *taken >= sent)
            .await
            .map(|_| ())
            .map_err(|_| consumer_closed())
    }
}

impl Stream for PageReceiver {
    type Item = TaskResult<Page>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let item = ready!(this.rx.poll_recv(cx));
        if item.is_some() {
            this.consumed.send_modify(|taken| *taken += 1);
        }
        Poll::Ready(item)
    }
}

/// What a finished stream produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub windows: u32,
    pub pages: u32,
}

/// Walk the table window by window and push every page into `sink`.
///
/// Count errors surface unchanged. Range query and sink failures are reported
/// as [`TaskError::Stream`]. Between windows the streamer waits for the sink
/// to drain.
pub async fn stream_pages<R, S>(
    repository: Arc<R>,
    window: Window,
    sink: S,
) -> TaskResult<StreamSummary>
where
    R: TaskRepository + ?Sized + 'static,
    S: PageSink + Clone,
{
    let total = repository.count().await?;
    let end = u64::from(total);
    let limit = window.limit;
    let mut offset = u64::from(window.offset);
    let mut summary = StreamSummary::default();

    tracing::debug!(total, limit, offset, concurrency = window.concurrency, "Starting task stream");

    while offset < end {
        let mut workers = JoinSet::new();

        for i in 0..u64::from(window.concurrency) {
            let start = offset + i * u64::from(limit);
            if start >= end {
                break;
            }
            // start < end <= u32::MAX
            let start = start as u32;
            let repository = Arc::clone(&repository);
            let sink = sink.clone();

            workers.spawn(async move {
                let tasks = repository
                    .search_range(limit, start)
                    .await
                    .map_err(|e| TaskError::Stream(format!("range at offset {start}: {e}")))?;
                sink.send(Page { tasks, total, limit, offset: start }).await
            });
        }

        while let Some(joined) = workers.join_next().await {
            let outcome = joined
                .map_err(|e| TaskError::Stream(format!("worker: {e}")))
                .and_then(|result| result);

            if let Err(err) = outcome {
                tracing::warn!(error = %err, offset, "Task stream window failed, aborting");
                workers.abort_all();
                while workers.join_next().await.is_some() {}
                return Err(err);
            }
            summary.pages += 1;
        }

        summary.windows += 1;
        offset += window.step();

        if offset < end {
            sink.drained().await?;
        }
    }

    tracing::debug!(windows = summary.windows, pages = summary.pages, "Task stream finished");
    Ok(summary)
}
