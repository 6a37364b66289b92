//! Pure query functions over the leader-term table
//!
//! Every operation takes rows plus filter parameters and returns result rows.
//! None of them know about HTTP, JSON framing, or process state.
//!
//! The pieces compose linearly: [`window`] filtering first, then either
//! [`aggregate`], [`rank`], or a pass-through view.

pub mod aggregate;
pub mod catalog;
pub mod rank;
pub mod records;
pub mod speeches;
pub mod stats;
pub mod timeline;
pub mod window;

pub use aggregate::{aggregate_by_country, CountryAggregate, Weighting};
pub use catalog::{countries, leaders, regions, LeaderEntry, RegionCatalog};
pub use rank::{rank_terms, RankOptions, RankedTerm};
pub use records::RecordFilter;
pub use speeches::{list_speeches, SpeechEntry, SpeechFilter};
pub use stats::{summarize_dataset, DatasetSummary};
pub use timeline::{country_timeline, TimelineEntry};
pub use window::YearWindow;
