use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusty_phonebook::prelude::{
    CancelToken, Contact, ContactDraft, ContactFormValidator, ContactStore, MemStorage, Pager,
    filter,
};

// Contacts are built in memory so the measurements cover CPU work only.
fn make_contacts(n: usize) -> Vec<Contact> {
    (0..n)
        .map(|i| {
            Contact::new(
                i as i64,
                &format!("User{i} Sample"),
                &format!("(646) {:03}-{:04}", i % 1000, i),
                &format!("user{i}@yahoo.com"),
            )
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let contacts = make_contacts(5_000);

    c.bench_function("filtering 5k contacts by name fragment", |b| {
        b.iter(|| black_box(filter(&contacts, black_box("user42"))));
    });

    c.bench_function("filtering 5k contacts by phone fragment", |b| {
        b.iter(|| black_box(filter(&contacts, black_box("(646) 12"))));
    });

    c.bench_function("filtering 5k contacts with empty query", |b| {
        b.iter(|| black_box(filter(&contacts, black_box("  "))));
    });
}

fn bench_paging(c: &mut Criterion) {
    let contacts = make_contacts(5_000);

    c.bench_function("paging to the end of 5k results", |b| {
        b.iter(|| {
            let view = filter(&contacts, "");
            let mut pager = Pager::new();
            pager.sync_len(view.len());
            for _ in 0..view.len() {
                pager.next();
            }
            black_box(pager.current(&view));
        });
    });
}

fn bench_append(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    c.bench_function("validating and appending to a 5k store (in-memory)", |b| {
        b.iter_batched(
            || {
                let mut store = ContactStore::new(Box::new(MemStorage::new()));
                runtime.block_on(store.load(&CancelToken::new()));
                for i in 0..5_000 {
                    store.append(&ContactDraft::new(&format!("User{i}"), "555-0100", "u@x.com"));
                }
                store
            },
            |mut store| {
                let draft = ContactDraft::new("Zoe", "(555) 555-5555", "zoe@x.com");
                if ContactFormValidator::default().validate(&draft).is_empty() {
                    black_box(store.append(&draft));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_filter, bench_paging, bench_append
}
criterion_main!(benches);
