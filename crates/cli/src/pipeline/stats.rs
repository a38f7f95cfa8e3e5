//! Run summary output.

use dispatcher::DispatchReport;

/// Print detailed summary of a finished run
pub fn print_summary(report: &DispatchReport) {
    println!("\n=== Load Run Statistics ===\n");

    println!("Overview");
    println!("   ├─ Duration: {:.2}s", report.duration.as_secs_f64());
    println!("   ├─ Passes: {}", report.passes);
    println!("   ├─ Facts per pass: {}", report.facts_per_pass);
    println!("   ├─ Enqueued: {}", report.enqueued);
    println!("   └─ Throughput: {:.2} req/s", report.throughput());

    println!("\nSubmissions");
    println!("   ├─ Attempted: {}", report.attempted);
    println!("   ├─ Succeeded: {}", report.succeeded);
    println!(
        "   └─ Failed: {} ({:.2}%)",
        report.failed,
        report.failure_rate()
    );

    println!();
}
