use std::hint::black_box;
use std::sync::Arc;

use bufy_core::{AccountStore, BudgetListView, BudgetService};
use bufy_domain::{AccountSnapshot, BudgetFilter, BudgetQuery};
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_snapshot() -> AccountSnapshot {
    AccountSnapshot {
        income: 5200.0,
        disposable_income: 2100.0,
        desired_savings: 800.0,
        groceries: 450.0,
        transport: 120.0,
        eating_out: 210.0,
        entertainment: 90.0,
        utilities: 300.0,
        healthcare: 75.0,
        education: 0.0,
        miscellaneous: 40.0,
    }
}

fn bench_projection(c: &mut Criterion) {
    let snapshot = sample_snapshot();
    let query = BudgetQuery::new("e", BudgetFilter::Over);

    c.bench_function("budget.project_and_filter", |b| {
        b.iter(|| {
            let entries = BudgetService::project(Some(black_box(&snapshot)));
            let metrics = BudgetService::metrics(Some(&snapshot));
            BudgetService::filter(&entries, &query, &metrics)
        });
    });

    let store = Arc::new(AccountStore::new(Some(snapshot)));
    let mut view = BudgetListView::attach(Arc::clone(&store));
    c.bench_function("budget.view_sync_after_update", |b| {
        b.iter(|| {
            store.update(|snapshot| snapshot.groceries += 1.0);
            black_box(view.sync())
        });
    });
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
