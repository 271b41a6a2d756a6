use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fastrace::collector::{Config as FastraceConfig, Reporter, SpanContext, SpanRecord};
use fastrace::Span;
use roster_types::FunctionStats;

const ROOT_SPAN: &str = "roster";

pub struct CollectingReporter {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl CollectingReporter {
    pub fn new() -> (Self, SpanCollector) {
        let spans = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                spans: spans.clone(),
            },
            SpanCollector { spans },
        )
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, spans: Vec<SpanRecord>) {
        if let Ok(mut buffer) = self.spans.lock() {
            buffer.extend(spans);
        }
    }
}

pub struct SpanCollector {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl SpanCollector {
    pub fn collect_and_aggregate(&self) -> Vec<FunctionStats> {
        let spans = match self.spans.lock() {
            Ok(mut buffer) => std::mem::take(&mut *buffer),
            Err(_) => return Vec::new(),
        };
        compute_function_stats(&spans)
    }
}

/// Runs `f` under a root span and returns its result with the timings of
/// every traced function it reached.
pub fn run_profiled<T>(f: impl FnOnce() -> T) -> (T, Vec<FunctionStats>) {
    let (reporter, collector) = CollectingReporter::new();
    fastrace::set_reporter(reporter, FastraceConfig::default());

    let result = {
        let root = Span::root(ROOT_SPAN, SpanContext::random());
        let _guard = root.set_local_parent();
        f()
    };

    fastrace::flush();
    (result, collector.collect_and_aggregate())
}

fn simplify_name(name: &str) -> String {
    let name = name.replace("::{{closure}}", "");

    // Last path segment, ignoring `::` inside generic arguments.
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = name.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && i + 1 < bytes.len() && bytes[i + 1] == b':' => start = i + 2,
            _ => {}
        }
    }
    name[start..].to_string()
}

fn compute_function_stats(spans: &[SpanRecord]) -> Vec<FunctionStats> {
    let mut by_name: HashMap<String, Vec<u64>> = HashMap::new();

    for span in spans {
        by_name
            .entry(simplify_name(&span.name))
            .or_default()
            .push(span.duration_ns / 1000);
    }

    let mut stats: Vec<FunctionStats> = by_name
        .into_iter()
        .map(|(name, durations)| {
            let calls = durations.len() as u32;
            let total_us: u64 = durations.iter().sum();
            FunctionStats {
                name,
                calls,
                total_us,
                avg_us: total_us / calls.max(1) as u64,
                max_us: durations.iter().copied().max().unwrap_or(0),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.total_us.cmp(&a.total_us).then_with(|| a.name.cmp(&b.name)));
    stats
}
