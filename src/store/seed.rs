use std::collections::BTreeMap;

use crate::models::Activity;

/// The fixed activity catalog loaded once at process start.
pub fn initial_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    );
    activities.insert(
        "Basketball Team".to_string(),
        activity(
            "Practice and compete in basketball tournaments",
            "Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &[],
        ),
    );
    activities.insert(
        "Soccer Club".to_string(),
        activity(
            "Train soccer skills and play friendly matches",
            "Tuesdays, 4:00 PM - 5:30 PM",
            18,
            &[],
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        activity(
            "Rehearse and perform school theater productions",
            "Mondays and Thursdays, 3:30 PM - 5:00 PM",
            20,
            &[],
        ),
    );
    activities.insert(
        "Art Club".to_string(),
        activity(
            "Explore painting, drawing and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
    );
    activities.insert(
        "Math Club".to_string(),
        activity(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 7:15 AM - 8:00 AM",
            10,
            &["james@mergington.edu"],
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        activity(
            "Develop argumentation and public speaking skills",
            "Fridays, 3:30 PM - 5:30 PM",
            12,
            &["ava@mergington.edu"],
        ),
    );

    activities
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}
