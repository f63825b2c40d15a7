use serde::Serialize;

/// One extracurricular offering as exposed by the roster API.
///
/// The activity name is the roster map key and is not repeated here.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signed-up student emails, oldest signup first.
    pub participants: Vec<String>,
}
