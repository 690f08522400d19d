//! Full report example: time a few snippets and emit the document.
//!
//! Run with: `cargo run --example report`
//! The report lands in `benchmark-report.html` next to the working
//! directory, with `benchmark-report.json` as the numeric companion.

use inkbench::prelude::*;

fn main() -> anyhow::Result<()> {
    let sort = inkbench::run_with_progress("reverse-sorted vector sort", 40, || {
        let mut v: Vec<u64> = (0..400_000).rev().collect();
        v.sort_unstable();
        std::hint::black_box(&v);
    });
    println!("{}", format_summary(&sort));

    let hash = inkbench::run_with_progress("string hashing", 40, || {
        let mut acc = 0u64;
        for i in 0..200_000u64 {
            acc = acc.wrapping_mul(31).wrapping_add(i.to_string().len() as u64);
        }
        std::hint::black_box(acc);
    });
    println!("{}", format_summary(&hash));

    let analyses = generate_report(&[sort, hash], "benchmark-report.html")?;
    let json = inkbench::generate_json_report(&analyses)?;
    std::fs::write("benchmark-report.json", json)?;

    println!("Report written to benchmark-report.html");
    Ok(())
}
