use crate::usecase::stats::ConvertStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    TitleOverwritten {
        path: String,
    },

    Finished {
        stats: ConvertStats,
    },
}
