use sqlx::{PgPool, Postgres, Transaction, types::Json};
use storage::services::leaderboard;
use tracing::info;

use crate::Result;
use crate::plan::SeedPlan;

/// Row counts written by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub teams: usize,
    pub activities: usize,
    pub leaderboard_entries: usize,
    pub workouts: usize,
}

impl SeedSummary {
    pub fn log(&self) {
        info!("Created {} users", self.users);
        info!("Created {} teams", self.teams);
        info!("Created {} activities", self.activities);
        info!("Created {} leaderboard entries", self.leaderboard_entries);
        info!("Created {} workouts", self.workouts);
    }
}

pub struct SeedLoader<'a> {
    pool: &'a PgPool,
}

impl<'a> SeedLoader<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Replace the whole data set with `plan` in a single transaction.
    /// Running it twice leaves the same shape behind.
    pub async fn load(&self, plan: &SeedPlan) -> Result<SeedSummary> {
        let mut tx = self.pool.begin().await?;

        info!("Clearing existing data...");
        self.clear(&mut tx).await?;

        info!("Creating teams...");
        self.insert_teams(plan, &mut tx).await?;

        info!("Creating users...");
        self.insert_users(plan, &mut tx).await?;

        info!("Creating activities...");
        self.insert_activities(plan, &mut tx).await?;

        info!("Creating leaderboard...");
        let entries = leaderboard::rebuild(&mut tx).await?;

        info!("Creating workouts...");
        self.insert_workouts(plan, &mut tx).await?;

        tx.commit().await?;

        Ok(SeedSummary {
            users: plan.users.len(),
            teams: plan.teams.len(),
            activities: plan.activities.len(),
            leaderboard_entries: entries.len(),
            workouts: plan.workouts.len(),
        })
    }

    async fn clear(&self, tx: &mut Transaction<'_, Postgres>) -> Result<()> {
        leaderboard::lock(tx).await?;
        sqlx::query("TRUNCATE leaderboard, users, activities, teams, workouts")
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    async fn insert_teams(&self, plan: &SeedPlan, tx: &mut Transaction<'_, Postgres>) -> Result<()> {
        for team in &plan.teams {
            sqlx::query("INSERT INTO teams (name, description) VALUES ($1, $2)")
                .bind(&team.name)
                .bind(&team.description)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    async fn insert_users(&self, plan: &SeedPlan, tx: &mut Transaction<'_, Postgres>) -> Result<()> {
        for user in &plan.users {
            sqlx::query("INSERT INTO users (name, email, password, team) VALUES ($1, $2, $3, $4)")
                .bind(&user.name)
                .bind(&user.email)
                .bind(&user.password)
                .bind(&user.team)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    async fn insert_activities(
        &self,
        plan: &SeedPlan,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        for activity in &plan.activities {
            sqlx::query(
                r#"
                INSERT INTO activities (user_email, activity_type, duration, calories, date)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&activity.user_email)
            .bind(&activity.activity_type)
            .bind(activity.duration)
            .bind(activity.calories)
            .bind(activity.date)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    async fn insert_workouts(
        &self,
        plan: &SeedPlan,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        for workout in &plan.workouts {
            sqlx::query(
                r#"
                INSERT INTO workouts (name, description, difficulty, duration, target_calories, exercises)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&workout.name)
            .bind(&workout.description)
            .bind(workout.difficulty)
            .bind(workout.duration)
            .bind(workout.target_calories)
            .bind(Json(&workout.exercises))
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
