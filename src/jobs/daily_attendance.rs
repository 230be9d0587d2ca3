//! Daily attendance job.
//!
//! Once a day, every active employee without an attendance record for the day
//! gets one inserted with status `absent`. The job runs on its own tokio task;
//! failures are logged and the next run proceeds on schedule.

use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use tokio::task::JoinHandle;

use crate::{
    db::Store,
    error::AppError,
    models::attendance::{today, AttendanceRecord},
};

/// Daily run time, UTC. Late enough that the workday is over everywhere the
/// original deployment served.
const RUN_AT: NaiveTime = match NaiveTime::from_hms_opt(23, 55, 0) {
    Some(time) => time,
    None => panic!("invalid run time"),
};

/// Time remaining until the next scheduled run.
pub fn until_next_run(now: DateTime<Utc>) -> std::time::Duration {
    let mut target = now.date_naive().and_time(RUN_AT);
    if target <= now.naive_utc() {
        target += ChronoDuration::days(1);
    }
    (target - now.naive_utc())
        .to_std()
        .unwrap_or(std::time::Duration::ZERO)
}

/// Insert an `absent` record for every active employee missing one for `date`.
/// Returns how many records were inserted.
pub async fn mark_absentees(store: &Store, date: &str) -> Result<u64, AppError> {
    let mut employees = store.employees().find(doc! { "active": true }).await?;
    let mut marked = 0;

    while let Some(employee) = employees.try_next().await? {
        let Some(employee_id) = employee.id else {
            continue;
        };
        let existing = store
            .attendance()
            .find_one(doc! { "employee_id": employee_id, "date": date })
            .await?;
        if existing.is_none() {
            store
                .attendance()
                .insert_one(&AttendanceRecord::absent(employee_id, date.to_string()))
                .await?;
            marked += 1;
        }
    }

    Ok(marked)
}

/// Register the recurring job. Called exactly once, after the server has
/// started listening; the returned handle is fire-and-forget.
pub fn spawn_daily_attendance_job(store: Store) -> JoinHandle<()> {
    tracing::info!("Daily attendance job scheduled (runs {} UTC)", RUN_AT);
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(until_next_run(Utc::now())).await;
            let date = today();
            match mark_absentees(&store, &date).await {
                Ok(marked) => {
                    tracing::info!("Daily attendance run for {}: {} marked absent", date, marked);
                }
                Err(err) => {
                    tracing::error!("Daily attendance run for {} failed: {}", date, err);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn next_run_is_later_today_before_the_run_time() {
        let now = Utc.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap();
        let wait = until_next_run(now);
        // 09:00 -> 23:55 is 14h55m.
        assert_eq!(wait, std::time::Duration::from_secs((14 * 60 + 55) * 60));
    }

    #[test]
    fn next_run_rolls_to_tomorrow_after_the_run_time() {
        let now = Utc.with_ymd_and_hms(2026, 8, 28, 23, 55, 0).unwrap();
        let wait = until_next_run(now);
        assert_eq!(wait, std::time::Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn wait_is_always_positive_and_at_most_a_day() {
        let day = std::time::Duration::from_secs(24 * 60 * 60);
        for hour in 0..24 {
            let now = Utc.with_ymd_and_hms(2026, 8, 28, hour, 17, 3).unwrap();
            let wait = until_next_run(now);
            assert!(wait > std::time::Duration::ZERO);
            assert!(wait <= day);
        }
    }
}
