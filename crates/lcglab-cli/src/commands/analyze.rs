use std::path::Path;

use lcglab_core::{Decision, EvalError, KsStatistic, ks, runs, sample, significance, stream};
use serde::Serialize;

/// KS alpha levels the analysis always evaluates.
const KS_ALPHAS: [f64; 3] = [0.10, 0.05, 0.01];

/// Runs-test significance levels the analysis always evaluates.
const Z_LEVELS: [f64; 3] = [0.80, 0.90, 0.95];

#[derive(Debug, Serialize)]
pub struct KsSection {
    /// Size of the sorted prefix the statistic was computed on.
    pub sample_size: usize,
    pub statistic: KsStatistic,
    pub p_value: f64,
    pub decisions: Vec<Decision>,
}

#[derive(Debug, Serialize)]
pub struct RunsSection {
    pub observations: usize,
    pub run_count: usize,
    pub z: f64,
    pub two_sided: bool,
    pub p_value: f64,
    pub decisions: Vec<Decision>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub input: String,
    pub observations: usize,
    pub ks: KsSection,
    pub runs: RunsSection,
}

pub fn run(input: &str, prefix: usize, one_sided: bool, output_path: Option<&str>) {
    let report = match analyze_file(Path::new(input), prefix, !one_sided) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Analysis of {input} failed: {e}");
            std::process::exit(1);
        }
    };

    print_report(&report);

    if let Some(path) = output_path {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    eprintln!("Failed to write results to {path}: {e}");
                } else {
                    println!("\nResults saved to: {path}");
                }
            }
            Err(e) => eprintln!("Failed to serialize results: {e}"),
        }
    }
}

/// Read a persisted stream and evaluate both tests over it.
pub fn analyze_file(
    path: &Path,
    prefix: usize,
    two_sided: bool,
) -> Result<AnalysisReport, EvalError> {
    let values = stream::read_values(path)?;
    analyze_values(&path.display().to_string(), &values, prefix, two_sided)
}

/// Evaluate both tests over an in-memory sequence.
///
/// KS runs on the ascending-sorted first `prefix` values; the runs test
/// runs on the full sequence with n equal to the true observation count.
pub fn analyze_values(
    name: &str,
    values: &[f64],
    prefix: usize,
    two_sided: bool,
) -> Result<AnalysisReport, EvalError> {
    let sorted = sample::sort_ascending(sample::first_k(values, prefix));
    let statistic = ks::compute_d(&sorted);
    let ks_decisions = KS_ALPHAS
        .iter()
        .map(|&alpha| significance::ks_verdict(statistic.d, sorted.len(), alpha))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = runs::count_runs(values);
    let z = runs::compute_z(values, values.len())?;
    let z_decisions = Z_LEVELS
        .iter()
        .map(|&level| significance::z_verdict(z, level, two_sided))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalysisReport {
        input: name.to_string(),
        observations: values.len(),
        ks: KsSection {
            sample_size: sorted.len(),
            p_value: ks::asymptotic_p_value(statistic.d, sorted.len()),
            statistic,
            decisions: ks_decisions,
        },
        runs: RunsSection {
            observations: values.len(),
            run_count: summary.run_count,
            z,
            two_sided,
            p_value: significance::z_p_value(z, two_sided),
            decisions: z_decisions,
        },
    })
}

fn print_report(report: &AnalysisReport) {
    println!("{} ({} observations)", report.input, report.observations);

    println!("\nKolmogorov-Smirnov (first {} values, sorted)", report.ks.sample_size);
    println!(
        "  D+ = {:.6}  D- = {:.6}  D = {:.6}  (p ~ {:.4})",
        report.ks.statistic.d_plus, report.ks.statistic.d_minus, report.ks.statistic.d, report.ks.p_value
    );
    for d in &report.ks.decisions {
        println!(
            "  alpha {:<5} critical {:.6}  {}",
            d.level, d.critical_value, d.verdict
        );
    }

    let sidedness = if report.runs.two_sided {
        "two-sided"
    } else {
        "one-sided"
    };
    println!("\nRuns test ({} runs over {} observations)", report.runs.run_count, report.runs.observations);
    println!(
        "  z = {:.4}  (p ~ {:.4}, {sidedness})",
        report.runs.z, report.runs.p_value
    );
    for d in &report.runs.decisions {
        println!(
            "  level {:<5} critical {:.4}    {}",
            d.level, d.critical_value, d.verdict
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcglab_core::{Lcg, Verdict};

    #[test]
    fn analysis_covers_every_table_level() {
        let values = Lcg::mixed().generate(2_000);
        let report = analyze_values("mixed", &values, 100, true).unwrap();

        assert_eq!(report.observations, 2_000);
        assert_eq!(report.ks.sample_size, 100);
        assert_eq!(report.ks.decisions.len(), KS_ALPHAS.len());
        assert_eq!(report.runs.decisions.len(), Z_LEVELS.len());
        assert!(report.runs.run_count > 0);
    }

    #[test]
    fn decisions_agree_with_their_critical_values() {
        let values = Lcg::randu().generate(2_000);
        let report = analyze_values("randu", &values, 100, true).unwrap();

        for d in report.ks.decisions.iter() {
            let expected = if report.ks.statistic.d > d.critical_value {
                Verdict::Reject
            } else {
                Verdict::FailToReject
            };
            assert_eq!(d.verdict, expected);
        }
        for d in report.runs.decisions.iter() {
            let expected = if report.runs.z.abs() >= d.critical_value {
                Verdict::Reject
            } else {
                Verdict::FailToReject
            };
            assert_eq!(d.verdict, expected);
        }
    }

    #[test]
    fn report_serializes_with_screaming_verdicts() {
        let values = Lcg::mixed().generate(500);
        let report = analyze_values("mixed", &values, 100, true).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"REJECT\"") || json.contains("\"FAIL_TO_REJECT\""));
        assert!(json.contains("\"d_plus\""));
    }

    #[test]
    fn analyze_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stream.txt");
        let values = Lcg::mixed().generate(1_000);
        lcglab_core::stream::write_values(&path, &values).unwrap();

        let from_disk = analyze_file(&path, 100, true).unwrap();
        let in_memory = analyze_values("x", &values, 100, true).unwrap();
        assert_eq!(from_disk.ks.statistic.d, in_memory.ks.statistic.d);
        assert_eq!(from_disk.runs.z, in_memory.runs.z);
    }

    #[test]
    fn too_short_stream_fails_the_runs_precondition() {
        let err = analyze_values("tiny", &[0.5], 100, true).unwrap_err();
        assert!(matches!(err, EvalError::Domain(_)));
    }
}
