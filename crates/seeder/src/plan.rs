use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDateTime};
use rand::{Rng, SeedableRng, rngs::StdRng};
use storage::{
    dto::{
        activity::CreateActivityRequest, team::CreateTeamRequest, user::CreateUserRequest,
        workout::CreateWorkoutRequest,
    },
    services::membership::count_members,
};

use crate::fixtures::{self, ACTIVITY_KINDS};
use crate::{Result, SeederError};

const DURATION_MINUTES: RangeInclusive<i32> = 20..=120;

/// Upper bound on the activity date window
pub const MAX_DAYS: u32 = 3650;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    pub min_activities: u32,
    pub max_activities: u32,
    /// How far back activity dates may go
    pub days: u32,
    /// Fixed RNG seed for a reproducible data set
    pub seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            min_activities: 5,
            max_activities: 15,
            days: 30,
            seed: None,
        }
    }
}

impl SeedOptions {
    pub fn validate(&self) -> Result<()> {
        if self.min_activities > self.max_activities {
            return Err(SeederError::InvalidOptions(format!(
                "min_activities ({}) must not exceed max_activities ({})",
                self.min_activities, self.max_activities
            )));
        }

        if self.days > MAX_DAYS {
            return Err(SeederError::InvalidOptions(format!(
                "days ({}) must not exceed {}",
                self.days, MAX_DAYS
            )));
        }

        Ok(())
    }

    /// Generator for `SeedPlan::generate`: seeded when `seed` is set,
    /// otherwise from OS entropy
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Everything the loader writes, generated up front so a seeded RNG
/// reproduces the same data set.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub teams: Vec<CreateTeamRequest>,
    pub users: Vec<CreateUserRequest>,
    pub activities: Vec<CreateActivityRequest>,
    pub workouts: Vec<CreateWorkoutRequest>,
}

impl SeedPlan {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        now: NaiveDateTime,
        options: &SeedOptions,
    ) -> Result<Self> {
        options.validate()?;

        let users = fixtures::users();

        let mut activities = Vec::new();
        for user in &users {
            let count = rng.gen_range(options.min_activities..=options.max_activities);
            for _ in 0..count {
                activities.push(random_activity(rng, &user.email, now, options.days)?);
            }
        }

        Ok(Self {
            teams: fixtures::teams(),
            users,
            activities,
            workouts: fixtures::workouts(),
        })
    }

    /// Members per seeded team, in team order
    pub fn member_counts(&self) -> Vec<(&str, usize)> {
        self.teams
            .iter()
            .map(|team| {
                let members = count_members(
                    &team.name,
                    self.users.iter().map(|user| user.team.as_deref()),
                );
                (team.name.as_str(), members)
            })
            .collect()
    }
}

fn random_activity<R: Rng + ?Sized>(
    rng: &mut R,
    user_email: &str,
    now: NaiveDateTime,
    days: u32,
) -> Result<CreateActivityRequest> {
    let kind = &ACTIVITY_KINDS[rng.gen_range(0..ACTIVITY_KINDS.len())];
    let days_ago = rng.gen_range(0..=days);
    let date = now
        .checked_sub_signed(Duration::days(i64::from(days_ago)))
        .ok_or_else(|| {
            SeederError::InvalidOptions(format!("{} days before {} is out of range", days_ago, now))
        })?;

    Ok(CreateActivityRequest {
        user_email: user_email.to_string(),
        activity_type: kind.name.to_string(),
        duration: rng.gen_range(DURATION_MINUTES),
        calories: rng.gen_range(kind.min_calories..=kind.max_calories),
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storage::{
        models::{ActivityCalories, UserSnapshot},
        services::leaderboard::compute_standings,
    };

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn plan(seed: u64, options: &SeedOptions) -> SeedPlan {
        let mut rng = StdRng::seed_from_u64(seed);
        SeedPlan::generate(&mut rng, now(), options).unwrap()
    }

    #[test]
    fn test_fixed_teams_users_and_workouts() {
        let plan = plan(7, &SeedOptions::default());

        assert_eq!(plan.teams.len(), 2);
        assert_eq!(plan.users.len(), 12);
        assert_eq!(plan.workouts.len(), 6);
        assert_eq!(
            plan.member_counts(),
            vec![(fixtures::TEAM_MARVEL, 6), (fixtures::TEAM_DC, 6)]
        );
    }

    #[test]
    fn test_activity_counts_stay_within_bounds() {
        let options = SeedOptions::default();
        let plan = plan(42, &options);

        for user in &plan.users {
            let count = plan
                .activities
                .iter()
                .filter(|a| a.user_email == user.email)
                .count() as u32;
            assert!(
                (options.min_activities..=options.max_activities).contains(&count),
                "{} has {} activities",
                user.email,
                count
            );
        }
    }

    #[test]
    fn test_activities_respect_catalog_and_window() {
        let options = SeedOptions {
            days: 10,
            ..SeedOptions::default()
        };
        let plan = plan(3, &options);
        let earliest = now() - Duration::days(10);

        for activity in &plan.activities {
            let kind = fixtures::activity_kind(&activity.activity_type).unwrap();
            assert!((kind.min_calories..=kind.max_calories).contains(&activity.calories));
            assert!(DURATION_MINUTES.contains(&activity.duration));
            assert!(activity.date >= earliest && activity.date <= now());
        }
    }

    #[test]
    fn test_same_seed_same_activities() {
        let summarize = |plan: &SeedPlan| -> Vec<(String, String, i32, i32, NaiveDateTime)> {
            plan.activities
                .iter()
                .map(|a| {
                    (
                        a.user_email.clone(),
                        a.activity_type.clone(),
                        a.duration,
                        a.calories,
                        a.date,
                    )
                })
                .collect()
        };

        let options = SeedOptions::default();
        assert_eq!(summarize(&plan(99, &options)), summarize(&plan(99, &options)));
    }

    #[test]
    fn test_fixed_activity_count() {
        let options = SeedOptions {
            min_activities: 3,
            max_activities: 3,
            days: 0,
            seed: None,
        };
        let plan = plan(1, &options);

        assert_eq!(plan.activities.len(), 36);
        assert!(plan.activities.iter().all(|a| a.date == now()));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let options = SeedOptions {
            min_activities: 10,
            max_activities: 2,
            ..SeedOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let result = SeedPlan::generate(&mut rng, now(), &options);

        assert!(matches!(result, Err(SeederError::InvalidOptions(_))));
    }

    #[test]
    fn test_oversized_day_window_is_rejected() {
        let options = SeedOptions {
            days: u32::MAX,
            ..SeedOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(options.validate(), Err(SeederError::InvalidOptions(_))));
        let result = SeedPlan::generate(&mut rng, now(), &options);
        assert!(matches!(result, Err(SeederError::InvalidOptions(_))));
    }

    #[test]
    fn test_window_reaching_past_the_calendar_is_an_error() {
        let mut rng = StdRng::seed_from_u64(5);
        let earliest = NaiveDateTime::MIN;

        let result = (0..32).find_map(|_| {
            random_activity(&mut rng, "a@example.com", earliest, MAX_DAYS).err()
        });

        assert!(matches!(result, Some(SeederError::InvalidOptions(_))));
    }

    #[test]
    fn test_seeded_options_reproduce_the_plan() {
        let options = SeedOptions {
            seed: Some(404),
            ..SeedOptions::default()
        };

        let first = SeedPlan::generate(&mut options.rng(), now(), &options).unwrap();
        let second = SeedPlan::generate(&mut options.rng(), now(), &options).unwrap();

        let calories =
            |plan: &SeedPlan| -> Vec<i32> { plan.activities.iter().map(|a| a.calories).collect() };
        assert_eq!(calories(&first), calories(&second));
    }

    #[test]
    fn test_seeded_leaderboard_ranks_every_hero() {
        let plan = plan(2025, &SeedOptions::default());
        let users: Vec<UserSnapshot> = plan
            .users
            .iter()
            .map(|u| UserSnapshot {
                email: u.email.clone(),
                name: u.name.clone(),
                team: u.team.clone(),
            })
            .collect();
        let activities: Vec<ActivityCalories> = plan
            .activities
            .iter()
            .map(|a| ActivityCalories {
                user_email: a.user_email.clone(),
                calories: a.calories,
            })
            .collect();

        let standings = compute_standings(&users, &activities);

        assert_eq!(standings.len(), 12);
        let total: i64 = plan.activities.iter().map(|a| i64::from(a.calories)).sum();
        assert_eq!(standings.iter().map(|s| s.total_calories).sum::<i64>(), total);
        assert!(standings.iter().all(|s| s.total_activities >= 5));
    }
}
