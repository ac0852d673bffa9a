//! Benchmark suite for report generation
//!
//! Measures a full analyzer run (index, accumulate, rank) over synthetic
//! datasets using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Datasets are generated in memory with 50 sellers and 200 products; the
//! number of purchase receipts varies per benchmark run.

use rust_decimal::Decimal;
use sales_report::core::SalesAnalyzer;
use sales_report::types::{LineItem, Product, PurchaseRecord, SalesData, Seller};

const SELLERS: usize = 50;
const PRODUCTS: usize = 200;

fn main() {
    divan::main();
}

fn dataset(receipts: usize) -> SalesData {
    let sellers = (0..SELLERS)
        .map(|n| Seller::new(format!("seller_{}", n), "First", format!("Last{}", n)))
        .collect();

    let products = (0..PRODUCTS)
        .map(|n| {
            Product::new(
                format!("SKU_{:04}", n),
                Decimal::new(100 + n as i64, 2),
                Decimal::new(250 + n as i64, 2),
            )
        })
        .collect();

    let purchase_records = (0..receipts)
        .map(|n| {
            let items: Vec<LineItem> = (0..3)
                .map(|k| {
                    let sku = (n * 7 + k * 13) % PRODUCTS;
                    LineItem::new(
                        format!("SKU_{:04}", sku),
                        1 + (n % 5) as u32,
                        Decimal::new((n % 4) as i64 * 5, 0),
                        Decimal::new(250 + sku as i64, 2),
                    )
                })
                .collect();
            PurchaseRecord::new(
                format!("seller_{}", n % SELLERS),
                Decimal::new(1000 + n as i64, 2),
                items,
            )
        })
        .collect();

    SalesData {
        sellers,
        products,
        purchase_records,
    }
}

/// Full report over 100, 10,000 and 100,000 receipts
#[divan::bench(args = [100, 10_000, 100_000])]
fn analyze(bencher: divan::Bencher, receipts: usize) {
    let data = dataset(receipts);

    bencher.bench(|| {
        SalesAnalyzer::new()
            .analyze(divan::black_box(&data))
            .expect("Report failed")
    });
}
