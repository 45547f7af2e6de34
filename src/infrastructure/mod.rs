pub mod fixtures;
pub mod memory;
pub mod navigator;
pub mod notifier;
pub mod share;

pub use memory::MemoryRepository;
pub use navigator::HistoryNavigator;
pub use notifier::TracingNotifier;
pub use share::{ClipboardShareTarget, NativeShareTarget, select_share_target};
