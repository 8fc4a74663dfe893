// Client-side state: registry reconciliation, trend windows, alert filtering.
//
// Not thread-safe by design: everything here is driven from the single
// inbound message stream. A caller that fans out connection handling must
// serialize updates (single-writer discipline).

mod filter;
mod reconciler;
mod session;
mod trend;

pub use filter::{AlertFeed, FilterCriteria};
pub use reconciler::StationRegistry;
pub use session::{ClientState, reconnect_delay};
pub use trend::{MeasurementPoint, TrendStore, TrendWindow};
