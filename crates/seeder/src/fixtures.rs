//! Fixed sample roster: two superhero teams, their members, the activity
//! catalog and the workout suggestions.

use storage::{
    dto::{team::CreateTeamRequest, user::CreateUserRequest, workout::CreateWorkoutRequest},
    models::{Difficulty, Exercise},
};

pub const TEAM_MARVEL: &str = "Team Marvel";
pub const TEAM_DC: &str = "Team DC";

/// An activity type together with the calories a session of it can burn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityKind {
    pub name: &'static str,
    pub min_calories: i32,
    pub max_calories: i32,
}

pub static ACTIVITY_KINDS: [ActivityKind; 8] = [
    ActivityKind { name: "Running", min_calories: 400, max_calories: 800 },
    ActivityKind { name: "Cycling", min_calories: 300, max_calories: 700 },
    ActivityKind { name: "Swimming", min_calories: 350, max_calories: 750 },
    ActivityKind { name: "Weight Training", min_calories: 250, max_calories: 500 },
    ActivityKind { name: "Boxing", min_calories: 450, max_calories: 850 },
    ActivityKind { name: "Yoga", min_calories: 150, max_calories: 300 },
    ActivityKind { name: "HIIT", min_calories: 500, max_calories: 900 },
    ActivityKind { name: "Martial Arts", min_calories: 400, max_calories: 800 },
];

pub fn activity_kind(name: &str) -> Option<&'static ActivityKind> {
    ACTIVITY_KINDS.iter().find(|kind| kind.name == name)
}

pub fn teams() -> Vec<CreateTeamRequest> {
    vec![
        CreateTeamRequest {
            name: TEAM_MARVEL.to_string(),
            description: Some("The mightiest heroes of Earth".to_string()),
        },
        CreateTeamRequest {
            name: TEAM_DC.to_string(),
            description: Some("Justice League defenders".to_string()),
        },
    ]
}

const ROSTER: [(&str, &str, &str, &str); 12] = [
    ("Iron Man", "tony.stark@marvel.com", "jarvis123", TEAM_MARVEL),
    ("Captain America", "steve.rogers@marvel.com", "shield456", TEAM_MARVEL),
    ("Thor", "thor.odinson@marvel.com", "asgard789", TEAM_MARVEL),
    ("Black Widow", "natasha.romanoff@marvel.com", "redroom101", TEAM_MARVEL),
    ("Hulk", "bruce.banner@marvel.com", "gamma112", TEAM_MARVEL),
    ("Spider-Man", "peter.parker@marvel.com", "webslinger131", TEAM_MARVEL),
    ("Superman", "clark.kent@dc.com", "krypton123", TEAM_DC),
    ("Batman", "bruce.wayne@dc.com", "gotham456", TEAM_DC),
    ("Wonder Woman", "diana.prince@dc.com", "themyscira789", TEAM_DC),
    ("The Flash", "barry.allen@dc.com", "speedforce101", TEAM_DC),
    ("Aquaman", "arthur.curry@dc.com", "atlantis112", TEAM_DC),
    ("Green Lantern", "hal.jordan@dc.com", "willpower131", TEAM_DC),
];

pub fn users() -> Vec<CreateUserRequest> {
    ROSTER
        .iter()
        .map(|(name, email, password, team)| CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            team: Some(team.to_string()),
        })
        .collect()
}

fn workout(
    name: &str,
    description: &str,
    difficulty: Difficulty,
    duration: i32,
    target_calories: i32,
    exercises: Vec<Exercise>,
) -> CreateWorkoutRequest {
    CreateWorkoutRequest {
        name: name.to_string(),
        description: description.to_string(),
        difficulty,
        duration,
        target_calories,
        exercises,
    }
}

pub fn workouts() -> Vec<CreateWorkoutRequest> {
    vec![
        workout(
            "Super Soldier Training",
            "High-intensity workout inspired by Captain America training regimen",
            Difficulty::Advanced,
            60,
            700,
            vec![
                Exercise::reps("Push-ups", 5, 20),
                Exercise::reps("Pull-ups", 4, 10),
                Exercise::timed("Sprint intervals", 6, "30 seconds"),
                Exercise::reps("Burpees", 4, 15),
            ],
        ),
        workout(
            "Kryptonian Strength",
            "Build superhuman strength like Superman",
            Difficulty::Advanced,
            75,
            850,
            vec![
                Exercise::reps("Deadlifts", 5, 8),
                Exercise::reps("Bench press", 5, 10),
                Exercise::reps("Squats", 5, 12),
                Exercise::reps("Military press", 4, 10),
            ],
        ),
        workout(
            "Amazonian Warrior",
            "Combat training inspired by Wonder Woman",
            Difficulty::Intermediate,
            50,
            600,
            vec![
                Exercise::reps("Sword swings", 4, 20),
                Exercise::timed("Shield holds", 3, "60 seconds"),
                Exercise::reps("Lunge jumps", 4, 15),
                Exercise::timed("Battle rope", 4, "30 seconds"),
            ],
        ),
        workout(
            "Web-Slinger Agility",
            "Improve flexibility and agility like Spider-Man",
            Difficulty::Beginner,
            40,
            400,
            vec![
                Exercise::reps("Wall climbs", 3, 10),
                Exercise::reps("Box jumps", 4, 12),
                Exercise::timed("Spider crawls", 3, "45 seconds"),
                Exercise::reps("Hanging knee raises", 4, 15),
            ],
        ),
        workout(
            "Speed Force Cardio",
            "Lightning-fast cardio workout inspired by The Flash",
            Difficulty::Intermediate,
            45,
            650,
            vec![
                Exercise::timed("Sprint intervals", 8, "30 seconds"),
                Exercise::reps("High knees", 5, 30),
                Exercise::reps("Mountain climbers", 5, 25),
                Exercise::timed("Jump rope", 4, "2 minutes"),
            ],
        ),
        workout(
            "Gotham Guardian",
            "Martial arts and detective work inspired by Batman",
            Difficulty::Advanced,
            70,
            750,
            vec![
                Exercise::timed("Shadow boxing", 5, "3 minutes"),
                Exercise::timed("Grappling practice", 4, "5 minutes"),
                Exercise::timed("Parkour drills", 3, "10 minutes"),
                Exercise::reps("Core work", 4, 20),
            ],
        ),
    ]
}
