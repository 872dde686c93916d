pub mod aggregator;
pub mod source;
pub mod types;
pub mod weighting;

pub use aggregator::{join_international, WarAggregator};
pub use source::{Eligibility, RatingSource};
pub use types::{Period, PeriodLists, PlayerId, PlayerRef, PlayerRow, Source, Year};
pub use weighting::{score, GenderFilter, Method, WeightingScheme};
