//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) commit one `ChangeSet` per call; query handlers
//! (read) never write.

pub mod handlers;

pub use handlers::{
    // Breeding lifecycle
    CancelLitterCommand, CancelLitterHandler,
    ConfirmPregnancyCommand, ConfirmPregnancyHandler, ConfirmPregnancyResult,
    RecordBirthCommand, RecordBirthHandler, RecordBirthResult,
    RecordMatingCommand, RecordMatingHandler, RecordMatingResult,
    StartHeatCommand, StartHeatHandler, StartHeatResult,
    GetLitterHandler, GetLitterQuery, GetLitterResult, LitterView,
    GetLitterTimelineHandler, GetLitterTimelineQuery, GetLitterTimelineResult,
    GetReproductionHistoryHandler, GetReproductionHistoryQuery, GetReproductionHistoryResult,
    ReproductionHistory,
    GetUpcomingBirthsHandler, GetUpcomingBirthsQuery, GetUpcomingBirthsResult,
    // Fact log
    CompleteReminderCommand, CompleteReminderHandler,
    DeleteEventCommand, DeleteEventHandler,
    GetDueRemindersHandler, GetDueRemindersQuery, GetDueRemindersResult,
    // Pedigree
    GetOffspringHandler, GetOffspringQuery, GetOffspringResult,
    GetPedigreeFlatHandler, GetPedigreeFlatResult,
    GetPedigreeHandler, GetPedigreeQuery, GetPedigreeResult,
    GetSiblingsHandler, GetSiblingsQuery, GetSiblingsResult,
};
