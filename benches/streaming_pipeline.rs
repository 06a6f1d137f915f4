//! Benchmarks for the stream-parsing pipeline
//!
//! This benchmark measures:
//! - Line framing throughput under small-chunk delivery
//! - Event decoding speed
//! - Full frame -> decode -> fold pipeline throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use specgen_client::pipeline::{decode_line, LineFramer, StreamSession};

/// Sample event lines in backend wire format.
const EVENT_LINES: &[&str] = &[
    r#"{"type":"reasoning","content":"Considering the data model first."}"#,
    r#"{"type":"content","content":"## Requirements\n"}"#,
    r#"{"type":"content","content":"- The system SHALL sync offline edits\n"}"#,
    r#"{"type":"content","content":"- Conflicts resolve last-write-wins\n"}"#,
    r#"{"type":"usage","input_tokens":512,"output_tokens":2048,"total_tokens":2560}"#,
    r#"{"type":"metadata","is_full_prd":true}"#,
];

fn stream_text() -> String {
    let mut text = String::new();
    for _ in 0..50 {
        for line in EVENT_LINES {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}

fn chunked(text: &str, size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let mut end = size.min(rest.len());
        while !rest.is_char_boundary(end) {
            end += 1;
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

fn bench_line_framing(c: &mut Criterion) {
    let text = stream_text();
    let mut group = c.benchmark_group("line_framing");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for chunk_size in [16usize, 256, 4096] {
        let chunks = chunked(&text, chunk_size);
        group.bench_function(format!("chunk_{chunk_size}"), |b| {
            b.iter(|| {
                let mut framer = LineFramer::new();
                let mut lines = 0usize;
                for chunk in &chunks {
                    lines += framer.feed(black_box(chunk)).len();
                }
                black_box(lines)
            })
        });
    }
    group.finish();
}

fn bench_event_decoding(c: &mut Criterion) {
    c.bench_function("decode_line", |b| {
        b.iter(|| {
            for line in EVENT_LINES {
                black_box(decode_line(black_box(line)));
            }
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let text = stream_text();
    let chunks = chunked(&text, 256);
    let mut group = c.benchmark_group("stream_session");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("push_chunk", |b| {
        b.iter(|| {
            let mut session = StreamSession::new();
            for chunk in &chunks {
                session.push_chunk(black_box(chunk));
            }
            black_box(session.state().markdown_content().len())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_line_framing,
    bench_event_decoding,
    bench_full_pipeline
);
criterion_main!(benches);
