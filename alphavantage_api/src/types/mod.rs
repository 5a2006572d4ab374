mod lenient;
pub use self::lenient::Lenient;

mod record;
pub use self::record::DailyRecord;

mod envelope;
pub use self::envelope::{MetaData, QuoteEnvelope, UpstreamNotice};
