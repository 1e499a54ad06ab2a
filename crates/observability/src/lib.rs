use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct ClassifierMetrics {
    classifications_total: AtomicU64,
    model_calls_total: AtomicU64,
    model_failures_total: AtomicU64,
    fallback_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub classifications_total: u64,
    pub model_calls_total: u64,
    pub model_failures_total: u64,
    pub fallback_total: u64,
    pub avg_latency_millis: f64,
}

impl ClassifierMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_classification(&self) {
        self.classifications_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_model_call(&self) {
        self.model_calls_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_model_failure(&self) {
        self.model_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let classifications = self.classifications_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            classifications_total: classifications,
            model_calls_total: self.model_calls_total.load(Ordering::Relaxed),
            model_failures_total: self.model_failures_total.load(Ordering::Relaxed),
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            avg_latency_millis: if classifications == 0 {
                0.0
            } else {
                latency as f64 / classifications as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,taskintent_ml=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
