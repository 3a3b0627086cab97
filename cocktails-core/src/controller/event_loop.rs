//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: background task results
//!
//! Background work (page fetches) never touches application state directly.
//! It reports a [`TaskResult`] through an unbounded channel and the main loop
//! applies it between terminal events.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::{error::AppError, model::catalog::CatalogPage};

/// Completion message from a background task.
#[derive(Debug)]
pub enum TaskResult {
    /// A catalog page request finished, successfully or not.
    PageLoaded {
        page: u32,
        result: Result<CatalogPage, AppError>,
    },
}

/// Snapshot of loop counters for the exit log.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnap {
    pub tasks: u64,
    pub failed_tasks: u64,
    pub uptime: Duration,
}

pub struct EventLoop {
    task_rx: mpsc::UnboundedReceiver<TaskResult>,
    tasks: u64,
    failed_tasks: u64,
    started_at: Instant,
}

impl EventLoop {
    pub fn new(task_rx: mpsc::UnboundedReceiver<TaskResult>) -> Self {
        Self {
            task_rx,
            tasks: 0,
            failed_tasks: 0,
            started_at: Instant::now(),
        }
    }

    /// Waits for the next task result. Pends forever once every sender is
    /// gone so it can sit in a `select!` without spinning.
    pub async fn next_task(&mut self) -> TaskResult {
        match self.task_rx.recv().await {
            Some(result) => {
                self.tasks += 1;
                if let TaskResult::PageLoaded { result: Err(_), .. } = &result {
                    self.failed_tasks += 1;
                }
                result
            }
            None => std::future::pending().await,
        }
    }

    pub fn snapshot_metrics(&self) -> MetricsSnap {
        MetricsSnap {
            tasks: self.tasks,
            failed_tasks: self.failed_tasks,
            uptime: self.started_at.elapsed(),
        }
    }
}
