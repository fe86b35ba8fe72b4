//! Simulation report generation.

use crate::core::collision::Termination;
use serde::Serialize;

/// Outcome of one simulated round.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    pub ticks: u64,
    pub jumps: u64,
    pub seconds: f64,
    /// None if the round hit the frame limit.
    pub cause: Option<Termination>,
}

impl RunStats {
    pub fn cause_label(&self) -> &'static str {
        match self.cause {
            Some(Termination::Pipe) => "hit a pipe",
            Some(Termination::Ground) => "hit the ground",
            None => "timed out",
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub pipe_deaths: u32,
    pub ground_deaths: u32,

    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_seconds: f64,
    pub avg_jumps: f64,

    pub max_frames: u64,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_frames: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let count =
            |cause: Option<Termination>| runs.iter().filter(|r| r.cause == cause).count() as u32;
        let runs_timed_out = count(None);
        let pipe_deaths = count(Some(Termination::Pipe));
        let ground_deaths = count(Some(Termination::Ground));

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let avg_seconds = runs.iter().map(|r| r.seconds).sum::<f64>() / divisor;
        let avg_jumps = runs.iter().map(|r| r.jumps as f64).sum::<f64>() / divisor;

        Self {
            num_runs,
            runs_timed_out,
            pipe_deaths,
            ground_deaths,
            avg_score,
            min_score,
            max_score,
            avg_seconds,
            avg_jumps,
            max_frames,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out (limit {} frames)\n\n",
            self.num_runs, self.runs_timed_out, self.max_frames
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.2}\n", self.avg_score));
        report.push_str(&format!(
            "  Min / Max:           {} / {}\n",
            self.min_score, self.max_score
        ));
        report.push_str(&format!("  Avg Survival:        {:.1}s\n", self.avg_seconds));
        report.push_str(&format!("  Avg Jumps:           {:.0}\n\n", self.avg_jumps));

        report.push_str("── ENDINGS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Pipe Collisions:     {}\n", self.pipe_deaths));
        report.push_str(&format!("  Ground:              {}\n", self.ground_deaths));
        report.push_str(&format!("  Timed Out:           {}\n", self.runs_timed_out));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, cause: Option<Termination>) -> RunStats {
        RunStats {
            score,
            seconds: score as f64,
            cause,
            ..Default::default()
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(
            vec![
                run(2, Some(Termination::Pipe)),
                run(6, Some(Termination::Ground)),
                run(10, None),
            ],
            100,
        );
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.pipe_deaths, 1);
        assert_eq!(report.ground_deaths, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_score - 6.0).abs() < 1e-9);
        assert_eq!(report.min_score, 2);
        assert_eq!(report.max_score, 10);
    }

    #[test]
    fn test_json_keeps_run_causes() {
        let report = SimReport::from_runs(
            vec![
                run(2, Some(Termination::Pipe)),
                run(3, Some(Termination::Ground)),
                run(4, None),
            ],
            100,
        );
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["run_stats"][0]["cause"], "pipe");
        assert_eq!(json["run_stats"][1]["cause"], "ground");
        assert!(json["run_stats"][2]["cause"].is_null());
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 100);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }
}
