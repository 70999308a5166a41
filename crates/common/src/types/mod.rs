use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Acknowledgement body returned by create endpoints.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}
