pub(crate) mod config;
pub(crate) mod delete_approval;
pub(crate) mod file_slot_storage;
pub(crate) mod gemini_annotator;
pub(crate) mod stubs;

pub(crate) use config::{load_app_config, AppConfig};
pub(crate) use delete_approval::{AssumeYesApproval, CliDeleteApproval, NonInteractiveApproval};
pub(crate) use file_slot_storage::FileSlotStorage;
pub(crate) use gemini_annotator::{GeminiAnnotator, UnavailableAnnotator};
