use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use mutation_client::{CancellationToken, ExecutionConfig, MutationClient, VariablesBag};
use mutation_client_test::{InstantClock, ScriptedTransport, Step};
use serde_json::json;
use todo_mutations::ADD_TODO;

const N_CONCURRENCY: u64 = 100;

fn added() -> Step {
    Step::data(json!({
        "addTodo": {
            "id": "1",
            "title": "Buy milk",
            "completed": false,
            "randomId": "abc123",
            "createdDate": "2024-01-01",
            "__typename": "Todo",
            "owner": { "id": "7", "name": "Someone" }
        }
    }))
}

pub fn benchmark_execute(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("failed to start runtime");
    let transport = ScriptedTransport::new(vec![added()]);
    let client = MutationClient::builder(transport)
        .with_clock(InstantClock::new())
        .with_config(ExecutionConfig::default().with_attempt_timeout(None))
        .build();

    let mut group = c.benchmark_group("execute");
    group.throughput(Throughput::Elements(N_CONCURRENCY));
    group.bench_function("add_todo", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let calls = (0..N_CONCURRENCY).map(|_| {
                    let variables = VariablesBag::new()
                        .with("title", "Buy milk")
                        .with_dedup_token();
                    let client = client.clone();
                    async move {
                        client
                            .execute_with(ADD_TODO, variables, &CancellationToken::new())
                            .await
                    }
                });
                futures::future::join_all(calls).await
            })
        })
    });
    group.finish();
}

criterion_group!(benches, benchmark_execute);
criterion_main!(benches);
