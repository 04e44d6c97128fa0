pub mod achievements;
pub mod contact;
pub mod cv;
pub mod experiences;
pub mod probes;
pub mod skills;

use serde::Serialize;

#[derive(Serialize)]
pub struct Deleted {
    pub success: bool,
}

impl Deleted {
    pub fn ok() -> Self {
        Deleted { success: true }
    }
}
