use std::path::Path;

use lcglab_core::{sample, stream};

use super::analyze::{self, AnalysisReport};

/// One persisted file per parameterization.
const STREAMS: [(&str, &str); 2] = [("mixed", "mixed_values.txt"), ("randu", "randu_values.txt")];

pub fn run(count: usize, dir: &str, output_path: Option<&str>) {
    println!("Generating {count} values per parameterization...\n");

    let mut reports: Vec<(&str, AnalysisReport)> = Vec::new();

    for (name, file) in STREAMS {
        let path = Path::new(dir).join(file);
        let mut lcg = super::parse_generator(name);
        let values = lcg.generate(count);

        if let Err(e) = stream::write_values(&path, &values) {
            eprintln!("Failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
        print!("  {name}: {count} values -> {}", path.display());

        // Per-stream failures are reported and the suite moves on.
        match analyze::analyze_file(&path, sample::DEFAULT_PREFIX, true) {
            Ok(report) => {
                println!(
                    "  D={:.4} z={:+.2}",
                    report.ks.statistic.d, report.runs.z
                );
                reports.push((name, report));
            }
            Err(e) => println!("  analysis failed: {e}"),
        }
    }

    if reports.is_empty() {
        eprintln!("No stream produced an analysis.");
        std::process::exit(1);
    }

    // Summary table: one row per stream, verdicts at the midline levels.
    println!("\n{}", "=".repeat(72));
    println!(
        "{:<8} {:>10} {:>12} {:>9} {:>28}",
        "Stream", "KS D", "KS @0.05", "Runs z", "Runs @0.95 (two-sided)"
    );
    println!("{}", "-".repeat(72));
    for (name, report) in &reports {
        let ks_verdict = report
            .ks
            .decisions
            .iter()
            .find(|d| (d.level - 0.05).abs() < 1e-9)
            .map(|d| short_verdict(d.verdict))
            .unwrap_or("-");
        let z_verdict = report
            .runs
            .decisions
            .iter()
            .find(|d| (d.level - 0.95).abs() < 1e-9)
            .map(|d| short_verdict(d.verdict))
            .unwrap_or("-");
        println!(
            "{:<8} {:>10.6} {:>12} {:>9.4} {:>28}",
            name, report.ks.statistic.d, ks_verdict, report.runs.z, z_verdict
        );
    }

    if let Some(path) = output_path {
        let markdown = generate_markdown(&reports);
        if let Err(e) = std::fs::write(path, markdown) {
            eprintln!("Failed to write report to {path}: {e}");
        } else {
            println!("\nReport saved to: {path}");
        }
    }
}

fn short_verdict(v: lcglab_core::Verdict) -> &'static str {
    match v {
        lcglab_core::Verdict::Reject => "REJECT",
        lcglab_core::Verdict::FailToReject => "FAIL TO REJECT",
    }
}

fn generate_markdown(reports: &[(&str, AnalysisReport)]) -> String {
    let mut out = String::new();
    out.push_str("# lcglab — Statistical Quality Report\n\n");

    for (name, report) in reports {
        out.push_str(&format!("## {name}\n\n"));
        out.push_str(&format!(
            "- Observations: {}\n- KS sample: first {} values, sorted\n- Runs counted: {}\n\n",
            report.observations, report.ks.sample_size, report.runs.run_count
        ));

        out.push_str("| Test | Statistic | Level | Critical | Verdict |\n");
        out.push_str("|------|-----------|-------|----------|--------|\n");
        for d in &report.ks.decisions {
            out.push_str(&format!(
                "| KS | D={:.6} | {} | {:.6} | {} |\n",
                d.statistic, d.level, d.critical_value, d.verdict
            ));
        }
        for d in &report.runs.decisions {
            out.push_str(&format!(
                "| Runs | z={:.4} | {} | {:.4} | {} |\n",
                d.statistic, d.level, d.critical_value, d.verdict
            ));
        }
        out.push_str("\n---\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcglab_core::Lcg;

    #[test]
    fn markdown_lists_every_decision() {
        let values = Lcg::mixed().generate(1_000);
        let report = analyze::analyze_values("mixed", &values, 100, true).unwrap();
        let rows = report.ks.decisions.len() + report.runs.decisions.len();

        let md = generate_markdown(&[("mixed", report)]);
        assert!(md.contains("## mixed"));
        assert_eq!(md.matches("| KS |").count() + md.matches("| Runs |").count(), rows);
    }
}
