//! Performance benchmarks for chat-relay
//!
//! Hot paths of a query that never leaves the process: classification,
//! cache keying, cache lookups and task extraction.

use chat_relay::config::CacheConfig;
use chat_relay::core::cache_manager::{ResponseCache, cache_key};
use chat_relay::utils::error::RetryConfig;
use chat_relay::{
    AiService, Message, ProviderKind, ProviderReply, QueryOptions, assistant_message, classify,
    extract_tasks, system_message, user_message,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tokio::runtime::Runtime;

fn conversation(turns: usize) -> Vec<Message> {
    let mut messages = vec![system_message("You are a helpful personal assistant.")];
    for i in 0..turns {
        messages.push(user_message(format!("Question number {} about the weather", i)));
        messages.push(assistant_message(format!("Answer number {}", i)));
    }
    messages.push(user_message("What's the latest news today?"));
    messages
}

/// Benchmark query classification
fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(1));

    let queries = [
        ("short", "What's the weather today?".to_string()),
        ("creative", "Write me a short poem about autumn leaves".to_string()),
        ("long", "Please compare and analyze ".repeat(20)),
    ];

    for (name, query) in &queries {
        group.bench_with_input(BenchmarkId::new("classify", name), query, |b, query| {
            b.iter(|| black_box(classify(black_box(query))))
        });
    }

    group.finish();
}

/// Benchmark cache key derivation
fn bench_cache_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_key");

    for turns in [1, 5, 20].iter() {
        let messages = conversation(*turns);
        group.bench_with_input(BenchmarkId::new("turns", turns), &messages, |b, messages| {
            b.iter(|| black_box(cache_key(black_box(messages))))
        });
    }

    group.finish();
}

/// Benchmark cache operations at different fill levels
fn bench_cache_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_operations");

    for cache_size in [10, 100, 1000].iter() {
        let config = CacheConfig {
            max_entries: *cache_size,
            ..CacheConfig::default()
        };
        let cache = ResponseCache::new(config);
        for i in 0..*cache_size {
            cache.set(
                &[user_message(format!("stored question {} about gardens", i))],
                format!("stored answer {}", i),
                None,
                None,
            );
        }

        let hit = [user_message("stored question 0 about gardens")];
        group.bench_with_input(BenchmarkId::new("exact_hit", cache_size), &hit, |b, key| {
            b.iter(|| black_box(cache.get(key)))
        });

        let miss = [user_message("completely unrelated words here")];
        group.bench_with_input(BenchmarkId::new("semantic_miss", cache_size), &miss, |b, key| {
            b.iter(|| black_box(cache.get(key)))
        });

        group.bench_with_input(BenchmarkId::new("set", cache_size), cache_size, |b, _| {
            b.iter(|| {
                cache.set(
                    &[user_message("a replaced entry about the weather")],
                    "replacement",
                    None,
                    None,
                )
            })
        });
    }

    group.finish();
}

/// Benchmark a full query served from the cache
fn bench_cached_query(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("cached_query");

    let service = AiService::builder()
        .with_retry(RetryConfig::immediate(0))
        .build();
    let messages = [user_message("How do I boil an egg?")];
    let reply = ProviderReply {
        content: "Boil it for nine minutes.".to_string(),
        model: "gpt-4o-mini".to_string(),
        provider: ProviderKind::General,
        total_tokens: Some(12),
    };
    let serialized = serde_json::to_string(&reply).unwrap();
    service.cache().set(&messages, serialized, None, None);

    group.bench_function("process_query", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(
                    service
                        .process_query(&messages, None, QueryOptions::default())
                        .await,
                )
            })
        })
    });

    group.finish();
}

/// Benchmark task block extraction
fn bench_task_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("task_extraction");

    let block = "Task: Buy groceries\nDate: 2026-03-14\nTime: 5:30 PM\nPriority: high\n\
                 Description: Milk and eggs\n\n";
    for count in [1, 10].iter() {
        let reply = format!("Here is your plan.\n\n{}", block.repeat(*count));
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("blocks", count), &reply, |b, reply| {
            b.iter(|| black_box(extract_tasks(black_box(reply))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classifier,
    bench_cache_key,
    bench_cache_operations,
    bench_cached_query,
    bench_task_extraction
);

criterion_main!(benches);
