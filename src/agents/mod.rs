pub mod intake;
pub mod version_control;

pub use intake::{EntryDraft, IntakeAgent};
pub use version_control::VersionControlAgent;
