pub mod booking;
pub mod layout;
pub mod pricing;
pub mod seat;
pub mod selection;

pub use layout::{AuditoriumLayoutId, Layout};
pub use pricing::{Money, PriceBreakdown, PricingTable};
pub use seat::{Seat, SeatCategory, SeatId};
pub use selection::{PartySize, SelectionSession};
