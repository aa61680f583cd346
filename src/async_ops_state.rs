//! 异步操作状态管理
//!
//! 每个请求在独立的工作线程里阻塞执行，结果经 mpsc 通道回到主循环。
//! 请求之间不做协调：同一条任务的 toggle 和 delete 会互相竞争，先回来的先处理。

use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{execute, ApiOutcome, ApiRequest, TodoApi};

/// 异步操作状态
#[derive(Debug)]
pub struct AsyncOpsState {
    /// 结果发送端（每个工作线程持有一份克隆）
    outcome_tx: mpsc::Sender<ApiOutcome>,
    /// 结果接收端（主循环轮询）
    outcome_rx: mpsc::Receiver<ApiOutcome>,
    /// 尚未返回的请求数
    in_flight: usize,
}

impl Default for AsyncOpsState {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncOpsState {
    /// 创建新的异步操作状态
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    /// 在后台线程执行请求
    pub fn submit(&mut self, api: Arc<dyn TodoApi>, request: ApiRequest) {
        tracing::info!(request = %request.describe(), "dispatching");
        let tx = self.outcome_tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let outcome = execute(api.as_ref(), request);
            // 主循环已退出时接收端已释放，结果直接丢弃
            let _ = tx.send(outcome);
        });
    }

    /// 取出所有已完成的结果（不阻塞）
    pub fn poll(&mut self) -> Vec<ApiOutcome> {
        let outcomes: Vec<ApiOutcome> = self.outcome_rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

// ============================================================================
// Tests
// ============================================================================
