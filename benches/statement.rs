//! Benchmark suite for statement generation
//!
//! This benchmark measures end-to-end statement rendering over invoices of
//! increasing size using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Each benchmark builds a small play catalog once and renders a statement
//! for a generated invoice mixing tragedies and comedies across a range of
//! audience sizes.

use theater_billing_engine::{
    Invoice, Performance, Play, PlayStore, PlayType, StatementFormatter,
};

fn main() {
    divan::main();
}

/// Build the benchmark play catalog
fn catalog() -> PlayStore {
    vec![
        ("hamlet", Play::new("Hamlet", PlayType::Tragedy)),
        ("as-like", Play::new("As You Like It", PlayType::Comedy)),
        ("othello", Play::new("Othello", PlayType::Tragedy)),
        ("twelfth-night", Play::new("Twelfth Night", PlayType::Comedy)),
    ]
    .into_iter()
    .collect()
}

/// Build an invoice with `size` performances cycling through the catalog
fn invoice_of_size(size: usize) -> Invoice {
    let ids = ["hamlet", "as-like", "othello", "twelfth-night"];
    let performances = (0..size)
        .map(|i| Performance::new(ids[i % ids.len()], (i % 100) as u32))
        .collect();
    Invoice::new("BigCo", performances)
}

/// Benchmark statement rendering for invoices of increasing size
#[divan::bench(args = [10, 1_000, 100_000])]
fn render_statement(bencher: divan::Bencher, size: usize) {
    let plays = catalog();
    let invoice = invoice_of_size(size);

    bencher.bench(|| {
        StatementFormatter::new(&invoice, &plays)
            .statement()
            .expect("statement generation failed")
    });
}
