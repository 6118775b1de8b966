//! Wall-clock and resident-memory reporting for a run.

use std::fmt;
#[cfg(target_os = "linux")]
use std::fs;
use std::time::{Duration, Instant};

/// Read a `kB` field such as `VmRSS:` from /proc/self/status.
#[cfg(target_os = "linux")]
fn proc_status_kb(field: &str) -> Option<u64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    status
        .lines()
        .find(|line| line.starts_with(field))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse().ok())
}

/// Current resident set size in KB, on Linux.
pub fn current_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        proc_status_kb("VmRSS:")
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Peak resident set size in KB, on Linux.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        proc_status_kb("VmHWM:")
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Started before a run; turned into a [`RunReport`] when it ends.
#[derive(Debug)]
pub struct RunTimer {
    start: Instant,
    rss_before_kb: Option<u64>,
}

impl RunTimer {
    pub fn start() -> Self {
        Self {
            rss_before_kb: current_rss_kb(),
            start: Instant::now(),
        }
    }

    pub fn finish(self) -> RunReport {
        let elapsed = self.start.elapsed();
        let rss_after_kb = current_rss_kb();
        let rss_delta_kb = match (self.rss_before_kb, rss_after_kb) {
            (Some(before), Some(after)) => Some(after as i64 - before as i64),
            _ => None,
        };
        RunReport {
            elapsed,
            rss_delta_kb,
            peak_rss_kb: peak_rss_kb(),
        }
    }
}

/// Elapsed time and memory change for a finished run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub elapsed: Duration,
    pub rss_delta_kb: Option<i64>,
    pub peak_rss_kb: Option<u64>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elapsed time: {:.3} ms",
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        match self.rss_delta_kb {
            Some(delta) => write!(f, "\nMemory usage: {:+} KB", delta)?,
            None => write!(f, "\nMemory usage: unavailable")?,
        }
        if let Some(peak) = self.peak_rss_kb {
            write!(f, " (peak {} KB)", peak)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = RunReport {
            elapsed: Duration::from_micros(1500),
            rss_delta_kb: Some(-12),
            peak_rss_kb: Some(2048),
        };
        assert_eq!(
            report.to_string(),
            "Elapsed time: 1.500 ms\nMemory usage: -12 KB (peak 2048 KB)"
        );
    }

    #[test]
    fn test_report_display_without_memory() {
        let report = RunReport {
            elapsed: Duration::from_millis(2),
            rss_delta_kb: None,
            peak_rss_kb: None,
        };
        assert_eq!(
            report.to_string(),
            "Elapsed time: 2.000 ms\nMemory usage: unavailable"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_rss_readable_on_linux() {
        assert!(current_rss_kb().is_some());
        assert!(peak_rss_kb().is_some());
    }

    #[test]
    fn test_timer_measures() {
        let report = RunTimer::start().finish();
        assert!(report.elapsed < Duration::from_secs(60));
    }
}
