use std::cmp::Ordering;
use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{ActivityCalories, LeaderboardEntry, NewLeaderboardEntry, UserSnapshot};
use crate::repository::leaderboard::replace_all;

/// Builds one standing per user from the activity log.
///
/// Every user gets a row, including users without activities (0 calories,
/// 0 activities). Rows are ordered by total calories descending with ties
/// broken by email ascending, and ranked 1..N in that order.
///
/// Activities whose `user_email` matches no user are not counted anywhere.
pub fn compute_standings(
    users: &[UserSnapshot],
    activities: &[ActivityCalories],
) -> Vec<NewLeaderboardEntry> {
    let mut totals: HashMap<&str, (i64, i64)> = HashMap::with_capacity(users.len());
    for activity in activities {
        let (calories, count) = totals.entry(activity.user_email.as_str()).or_default();
        *calories += i64::from(activity.calories);
        *count += 1;
    }

    let mut standings: Vec<NewLeaderboardEntry> = users
        .iter()
        .map(|user| {
            let (total_calories, total_activities) =
                totals.get(user.email.as_str()).copied().unwrap_or_default();

            NewLeaderboardEntry {
                user_email: user.email.clone(),
                user_name: user.name.clone(),
                team: user.team.clone(),
                total_calories,
                total_activities,
                rank: 0,
            }
        })
        .collect();

    standings.sort_by(by_calories_then_email);

    for (position, standing) in standings.iter_mut().enumerate() {
        standing.rank = position as i32 + 1;
    }

    standings
}

fn by_calories_then_email(a: &NewLeaderboardEntry, b: &NewLeaderboardEntry) -> Ordering {
    b.total_calories
        .cmp(&a.total_calories)
        .then_with(|| a.user_email.cmp(&b.user_email))
}

/// Recompute the leaderboard inside the caller's transaction.
///
/// Holds an exclusive lock on `leaderboard` and a share lock on `users` and
/// `activities` until the transaction ends, so concurrent rebuilds queue up and
/// user/activity writes wait instead of slipping past the computed totals.
pub async fn rebuild(tx: &mut Transaction<'_, Postgres>) -> Result<Vec<LeaderboardEntry>> {
    lock(tx).await?;
    sqlx::query("LOCK TABLE users, activities IN SHARE MODE")
        .execute(&mut **tx)
        .await?;

    let users = sqlx::query_as::<_, UserSnapshot>("SELECT email, name, team FROM users")
        .fetch_all(&mut **tx)
        .await?;

    let activities =
        sqlx::query_as::<_, ActivityCalories>("SELECT user_email, calories FROM activities")
            .fetch_all(&mut **tx)
            .await?;

    let standings = compute_standings(&users, &activities);

    let attributed: i64 = standings.iter().map(|s| s.total_activities).sum();
    let orphaned = activities.len() as i64 - attributed;
    if orphaned > 0 {
        warn!(
            "{} activities reference unknown users and were left out of the leaderboard",
            orphaned
        );
    }

    let entries = replace_all(tx, &standings).await?;

    info!(
        "Leaderboard rebuilt: {} entries from {} activities",
        entries.len(),
        activities.len()
    );

    Ok(entries)
}

/// Take the leaderboard lock that `rebuild` starts with.
///
/// Anything that writes `users` or `activities` and then rebuilds in the same
/// transaction must call this first, so every writer locks `leaderboard`
/// before the tables it reads.
pub async fn lock(tx: &mut Transaction<'_, Postgres>) -> Result<()> {
    sqlx::query("LOCK TABLE leaderboard IN EXCLUSIVE MODE")
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Recompute the leaderboard in its own transaction
pub async fn recompute_leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let mut tx = pool.begin().await?;
    let entries = rebuild(&mut tx).await?;
    tx.commit().await?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: &str, team: Option<&str>) -> UserSnapshot {
        UserSnapshot {
            email: email.to_string(),
            name: name.to_string(),
            team: team.map(str::to_string),
        }
    }

    fn activity(email: &str, calories: i32) -> ActivityCalories {
        ActivityCalories {
            user_email: email.to_string(),
            calories,
        }
    }

    fn ranks(standings: &[NewLeaderboardEntry]) -> Vec<i32> {
        standings.iter().map(|s| s.rank).collect()
    }

    #[test]
    fn test_ranks_by_total_calories() {
        let users = vec![
            user("alice@example.com", "Alice", Some("Team A")),
            user("bob@example.com", "Bob", Some("Team B")),
            user("carol@example.com", "Carol", None),
        ];
        let activities = vec![
            activity("alice@example.com", 120),
            activity("bob@example.com", 500),
            activity("alice@example.com", 80),
        ];

        let standings = compute_standings(&users, &activities);

        let summary: Vec<(&str, i32, i64, i64)> = standings
            .iter()
            .map(|s| {
                (
                    s.user_name.as_str(),
                    s.rank,
                    s.total_calories,
                    s.total_activities,
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![("Bob", 1, 500, 1), ("Alice", 2, 200, 2), ("Carol", 3, 0, 0)]
        );
    }

    #[test]
    fn test_users_without_activities_are_kept() {
        let users = vec![
            user("a@example.com", "A", None),
            user("b@example.com", "B", None),
            user("c@example.com", "C", None),
        ];

        let standings = compute_standings(&users, &[]);

        assert_eq!(standings.len(), 3);
        assert!(
            standings
                .iter()
                .all(|s| s.total_calories == 0 && s.total_activities == 0)
        );
        assert_eq!(ranks(&standings), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_roster_yields_empty_leaderboard() {
        let standings = compute_standings(&[], &[activity("ghost@example.com", 300)]);
        assert!(standings.is_empty());
    }

    #[test]
    fn test_ties_are_broken_by_email() {
        let users = vec![
            user("zoe@example.com", "Zoe", None),
            user("adam@example.com", "Adam", None),
            user("mia@example.com", "Mia", None),
        ];
        let activities = vec![
            activity("zoe@example.com", 300),
            activity("adam@example.com", 300),
            activity("mia@example.com", 450),
        ];

        let standings = compute_standings(&users, &activities);

        let order: Vec<&str> = standings.iter().map(|s| s.user_email.as_str()).collect();
        assert_eq!(
            order,
            vec!["mia@example.com", "adam@example.com", "zoe@example.com"]
        );
        assert_eq!(ranks(&standings), vec![1, 2, 3]);
    }

    #[test]
    fn test_team_is_copied_from_user() {
        let users = vec![user("tony.stark@marvel.com", "Iron Man", Some("Team Marvel"))];
        let standings = compute_standings(&users, &[activity("tony.stark@marvel.com", 600)]);
        assert_eq!(standings[0].team.as_deref(), Some("Team Marvel"));
    }

    #[test]
    fn test_unknown_emails_are_not_attributed() {
        let users = vec![user("known@example.com", "Known", None)];
        let activities = vec![
            activity("known@example.com", 250),
            activity("unknown@example.com", 900),
        ];

        let standings = compute_standings(&users, &activities);

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].total_calories, 250);
        assert_eq!(standings[0].total_activities, 1);
    }

    #[test]
    fn test_calories_are_conserved_and_ranks_are_dense() {
        let users: Vec<UserSnapshot> = (0..20)
            .map(|i| user(&format!("user{i:02}@example.com"), &format!("User {i}"), None))
            .collect();
        let activities: Vec<ActivityCalories> = (0..137)
            .map(|i| activity(&format!("user{:02}@example.com", (i * 7) % 17), (i * 37) % 900))
            .collect();

        let standings = compute_standings(&users, &activities);

        let expected: i64 = activities.iter().map(|a| i64::from(a.calories)).sum();
        let computed: i64 = standings.iter().map(|s| s.total_calories).sum();
        assert_eq!(computed, expected);

        assert_eq!(ranks(&standings), (1..=20).collect::<Vec<_>>());

        for pair in standings.windows(2) {
            assert!(pair[0].total_calories >= pair[1].total_calories);
        }
    }

    #[test]
    fn test_totals_do_not_overflow_i32() {
        let users = vec![user("big@example.com", "Big", None)];
        let activities = vec![activity("big@example.com", i32::MAX), activity("big@example.com", i32::MAX)];

        let standings = compute_standings(&users, &activities);

        assert_eq!(standings[0].total_calories, 2 * i64::from(i32::MAX));
    }
}
