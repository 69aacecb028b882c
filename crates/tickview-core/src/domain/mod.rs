pub mod bar;
pub mod timeframe;
pub mod timestamp;

pub use bar::{PriceBar, RawRecord, Signal};
pub use timeframe::Timeframe;
pub use timestamp::BarTimestamp;
