//! Fact log handlers: reminder bookkeeping and event deletion.

mod complete_reminder;
mod delete_event;
mod get_due_reminders;

pub use complete_reminder::{CompleteReminderCommand, CompleteReminderHandler};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use get_due_reminders::{GetDueRemindersHandler, GetDueRemindersQuery, GetDueRemindersResult};
