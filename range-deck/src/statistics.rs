use std::fmt::Display;

use ahash::HashMap;
use profile_ranges::{Millis, RangeTable};
use profile_ranges_scanner::ScenarioReport;

/// Spread of the resolved deltas of a range, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub min: i64,
    pub q1: i64,
    pub q2: i64,
    pub q3: i64,
    pub max: i64,
    pub mean: i64,
}

impl Spread {
    pub fn of(mut samples: Vec<i64>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let sum: i128 = samples.iter().map(|&sample| sample as i128).sum();
        let mean = (sum / samples.len() as i128) as i64;

        let q2_index = samples.len() / 2;
        let (lower_half, q2, upper_half) = samples.select_nth_unstable(q2_index);
        let q2 = *q2;
        let q1 = median(lower_half).unwrap_or(q2);
        let q3 = median(upper_half).unwrap_or(q2);

        Some(Self {
            min,
            q1,
            q2,
            q3,
            max,
            mean,
        })
    }
}

fn median(values: &mut [i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let index = values.len() / 2;
    Some(*values.select_nth_unstable(index).1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeStatistics {
    pub name: String,
    pub resolved: usize,
    pub unresolved: usize,
    pub spread: Option<Spread>,
}

impl Display for RangeStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: n={}", self.name, self.resolved)?;
        if let Some(spread) = &self.spread {
            write!(
                f,
                " min={} q1={} median={} q3={} max={} mean={}",
                Millis(spread.min),
                Millis(spread.q1),
                Millis(spread.q2),
                Millis(spread.q3),
                Millis(spread.max),
                Millis(spread.mean),
            )?;
        }
        if self.unresolved > 0 {
            write!(f, " unresolved={}", self.unresolved)?;
        }
        Ok(())
    }
}

/// Statistics over all scenarios of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindStatistics {
    pub kind: String,
    pub scenarios: usize,
    pub ranges: Vec<RangeStatistics>,
}

impl Display for KindStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} scenarios)", self.kind, self.scenarios)?;
        for range in &self.ranges {
            write!(f, "\n {range}")?;
        }
        Ok(())
    }
}

/// Groups reports by scenario kind and computes per-range statistics.
///
/// Kinds are listed in the order of `kinds`. Kinds without any report are left out.
pub fn calculate_statistics(
    kinds: &[String],
    ranges: &RangeTable,
    reports: &[ScenarioReport],
) -> Vec<KindStatistics> {
    let mut by_kind: HashMap<&str, Vec<&ScenarioReport>> = HashMap::default();
    for report in reports {
        by_kind
            .entry(report.scenario.kind.as_str())
            .or_default()
            .push(report);
    }

    kinds
        .iter()
        .filter_map(|kind| {
            let reports = by_kind.remove(kind.as_str())?;
            let ranges = ranges
                .iter()
                .enumerate()
                .map(|(index, range)| {
                    // Reports of another table may have fewer lines.
                    let deltas = reports
                        .iter()
                        .filter_map(|report| report.lines.get(index))
                        .map(|line| line.delta);
                    let samples = deltas
                        .clone()
                        .filter_map(|delta| delta.micros())
                        .collect::<Vec<_>>();
                    RangeStatistics {
                        name: range.name().to_owned(),
                        resolved: samples.len(),
                        unresolved: deltas.filter(|delta| !delta.is_resolved()).count(),
                        spread: Spread::of(samples),
                    }
                })
                .collect();

            Some(KindStatistics {
                kind: kind.clone(),
                scenarios: reports.len(),
                ranges,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use profile_ranges::{Delta, Missing};
    use profile_ranges_scanner::{ReportLine, Scenario};

    use super::*;

    fn report(kind: &str, deltas: &[Delta]) -> ScenarioReport {
        ScenarioReport {
            scenario: Scenario::new(kind, kind),
            lines: deltas
                .iter()
                .enumerate()
                .map(|(index, delta)| ReportLine {
                    name: format!("r{index}"),
                    delta: *delta,
                })
                .collect(),
        }
    }

    #[test]
    fn test_spread_quartiles() {
        let spread = Spread::of(vec![700, 100, 600, 200, 500, 300, 400]).unwrap();
        assert_eq!(
            spread,
            Spread {
                min: 100,
                q1: 200,
                q2: 400,
                q3: 600,
                max: 700,
                mean: 400,
            }
        );
    }

    #[test]
    fn test_spread_of_single_sample() {
        let spread = Spread::of(vec![1500]).unwrap();
        assert_eq!(spread.q1, 1500);
        assert_eq!(spread.q2, 1500);
        assert_eq!(spread.q3, 1500);
        assert_eq!(Spread::of(Vec::new()), None);
    }

    #[test]
    fn test_statistics_per_kind() {
        let ranges = RangeTable::parse("r0:a:b\nr1:c:d").unwrap();
        let kinds = ["cold", "warm", "preload"].map(String::from);
        let reports = [
            report("warm", &[Delta::Resolved(100), Delta::Unresolved(Missing::Both)]),
            report("cold", &[Delta::Resolved(1000), Delta::Resolved(10)]),
            report("cold", &[Delta::Resolved(3000), Delta::Unresolved(Missing::End)]),
        ];

        let statistics = calculate_statistics(&kinds, &ranges, &reports);

        assert_eq!(statistics.len(), 2);
        assert_eq!(statistics[0].kind, "cold");
        assert_eq!(statistics[0].scenarios, 2);
        assert_eq!(statistics[0].ranges[0].resolved, 2);
        assert_eq!(statistics[0].ranges[0].spread.unwrap().mean, 2000);
        assert_eq!(statistics[0].ranges[1].resolved, 1);
        assert_eq!(statistics[0].ranges[1].unresolved, 1);

        assert_eq!(statistics[1].kind, "warm");
        assert_eq!(statistics[1].ranges[1].spread, None);
        assert_eq!(statistics[1].ranges[1].unresolved, 1);
    }

    #[test]
    fn test_statistics_with_short_reports() {
        let ranges = RangeTable::parse("r0:a:b\nr1:c:d").unwrap();
        let kinds = ["cold".to_owned()];
        let reports = [
            report("cold", &[Delta::Resolved(1000)]),
            report("cold", &[Delta::Resolved(3000), Delta::Resolved(20)]),
        ];

        let statistics = calculate_statistics(&kinds, &ranges, &reports);

        assert_eq!(statistics[0].ranges[0].resolved, 2);
        assert_eq!(statistics[0].ranges[1].resolved, 1);
        assert_eq!(statistics[0].ranges[1].unresolved, 0);
        assert_eq!(statistics[0].ranges[1].spread.unwrap().max, 20);
    }

    #[test]
    fn test_display() {
        let statistics = RangeStatistics {
            name: "startup".to_owned(),
            resolved: 1,
            unresolved: 2,
            spread: Spread::of(vec![1500]),
        };
        assert_eq!(
            statistics.to_string(),
            "startup: n=1 min=1.5ms q1=1.5ms median=1.5ms q3=1.5ms max=1.5ms mean=1.5ms unresolved=2"
        );
    }
}
