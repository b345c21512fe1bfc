use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::user::entities::{Scan, UserStats};

/// Parses scan timestamps written either as RFC 3339 or as a naive
/// ISO date-time (assumed UTC).
pub fn parse_scan_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn compute_user_stats(scans: &[Scan], now: DateTime<Utc>) -> UserStats {
    if scans.is_empty() {
        return UserStats::default();
    }

    let today_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|start| start.and_utc())
        .unwrap_or(now);

    let today_scans: Vec<&Scan> = scans
        .iter()
        .filter(|scan| {
            parse_scan_timestamp(&scan.timestamp)
                .map(|timestamp| timestamp >= today_start)
                .unwrap_or(false)
        })
        .collect();

    let safe_today = today_scans.iter().filter(|scan| scan.is_safe).count();
    let total_score: f64 = scans.iter().map(|scan| scan.safety_score).sum();

    UserStats {
        total_scans: scans.len(),
        today_scans: today_scans.len(),
        safe_today,
        risky_today: today_scans.len() - safe_today,
        average_score: (total_score / scans.len() as f64).trunc() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scan(timestamp: &str, score: f64, is_safe: bool) -> Scan {
        Scan {
            id: "s".to_string(),
            product_name: "Diet Cola".to_string(),
            brand: String::new(),
            image: String::new(),
            safety_score: score,
            is_safe,
            timestamp: timestamp.to_string(),
            ingredients: vec![],
        }
    }

    #[test]
    fn no_scans_gives_zeroed_stats() {
        assert_eq!(compute_user_stats(&[], Utc::now()), UserStats::default());
    }

    #[test]
    fn counts_today_and_truncates_average() {
        let now = Utc.with_ymd_and_hms(2025, 10, 26, 15, 0, 0).unwrap();
        let scans = vec![
            scan("2025-10-26T09:00:00Z", 8.0, true),
            scan("2025-10-26T10:30:00.123", 3.0, false),
            scan("2025-10-25T23:59:59Z", 6.0, true),
            scan("not a date", 4.0, true),
        ];

        let stats = compute_user_stats(&scans, now);
        assert_eq!(stats.total_scans, 4);
        assert_eq!(stats.today_scans, 2);
        assert_eq!(stats.safe_today, 1);
        assert_eq!(stats.risky_today, 1);
        // (8 + 3 + 6 + 4) / 4 = 5.25
        assert_eq!(stats.average_score, 5);
    }
}
