//! Simulation report generation.

use crate::game::CrashCause;

/// Outcome of one simulated session.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    /// `None` if the run hit the tick limit still flying.
    pub crash: Option<CrashCause>,
    pub flaps: u64,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub avg_flaps: f64,

    pub pipe_crashes: u32,
    pub ceiling_crashes: u32,
    pub floor_crashes: u32,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let count = |cause: CrashCause| runs.iter().filter(|r| r.crash == Some(cause)).count() as u32;

        Self {
            num_runs,
            runs_timed_out: runs.iter().filter(|r| r.crash.is_none()).count() as u32,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor,
            avg_flaps: runs.iter().map(|r| r.flaps as f64).sum::<f64>() / divisor,
            pipe_crashes: count(CrashCause::Pipe),
            ceiling_crashes: count(CrashCause::Ceiling),
            floor_crashes: count(CrashCause::Floor),
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Results\n");
        out.push_str("-------\n");
        out.push_str(&format!("  Runs:             {}\n", self.num_runs));
        out.push_str(&format!("  Timed out:        {}\n", self.runs_timed_out));
        out.push_str(&format!("  Avg score:        {:.2}\n", self.avg_score));
        out.push_str(&format!("  Best score:       {}\n", self.max_score));
        out.push_str(&format!("  Avg ticks:        {:.1}\n", self.avg_ticks));
        out.push_str(&format!("  Avg flaps:        {:.1}\n", self.avg_flaps));
        out.push_str("  Crashes:\n");
        out.push_str(&format!("    pipe:           {}\n", self.pipe_crashes));
        out.push_str(&format!("    ceiling:        {}\n", self.ceiling_crashes));
        out.push_str(&format!("    floor:          {}\n", self.floor_crashes));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, crash: Option<CrashCause>) -> RunStats {
        RunStats {
            score,
            ticks,
            crash,
            flaps: 2,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![
            run(2, 100, Some(CrashCause::Pipe)),
            run(4, 300, Some(CrashCause::Floor)),
            run(0, 500, None),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.max_score, 4);
        assert!((report.avg_score - 2.0).abs() < f64::EPSILON);
        assert!((report.avg_ticks - 300.0).abs() < f64::EPSILON);
        assert_eq!(report.pipe_crashes, 1);
        assert_eq!(report.floor_crashes, 1);
        assert_eq!(report.ceiling_crashes, 0);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.to_text().contains("Runs:             0"));
    }
}
