use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// `/json` benchmark payload.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}
