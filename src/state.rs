use crate::config::Config;
use crate::controller::Controller;
use crate::types::PredictionRecord;

/// Everything one text-entry session owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub input_text: String,
    /// Newest first.
    pub results: Vec<PredictionRecord>,
    pub last_submitted: String,
    /// Highest input sequence number applied so far.
    pub last_seq: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub controller: Controller,
}
