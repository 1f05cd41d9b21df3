//! Breeding lifecycle handlers.
//!
//! Commands move a litter through heat, mating, pregnancy confirmation and
//! birth. Queries read litters, their timelines and the breeding calendar.

mod cancel_litter;
mod confirm_pregnancy;
mod get_litter;
mod get_litter_timeline;
mod get_reproduction_history;
mod get_upcoming_births;
mod record_birth;
mod record_mating;
mod start_heat;

pub use cancel_litter::{CancelLitterCommand, CancelLitterHandler};
pub use confirm_pregnancy::{
    ConfirmPregnancyCommand, ConfirmPregnancyHandler, ConfirmPregnancyResult,
};
pub use get_litter::{GetLitterHandler, GetLitterQuery, GetLitterResult, LitterView};
pub use get_litter_timeline::{
    GetLitterTimelineHandler, GetLitterTimelineQuery, GetLitterTimelineResult,
};
pub use get_reproduction_history::{
    GetReproductionHistoryHandler, GetReproductionHistoryQuery, GetReproductionHistoryResult,
    ReproductionHistory,
};
pub use get_upcoming_births::{
    GetUpcomingBirthsHandler, GetUpcomingBirthsQuery, GetUpcomingBirthsResult,
};
pub use record_birth::{RecordBirthCommand, RecordBirthHandler, RecordBirthResult};
pub use record_mating::{RecordMatingCommand, RecordMatingHandler, RecordMatingResult};
pub use start_heat::{StartHeatCommand, StartHeatHandler, StartHeatResult};
