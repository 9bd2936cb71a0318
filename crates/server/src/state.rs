use service::{FortuneService, WorldService};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub fortunes: FortuneService,
    pub worlds: WorldService,
}
