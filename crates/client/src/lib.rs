pub mod api;
pub mod form;
pub mod literals;

pub use api::{ApiClient, ClientError};
pub use form::{FormMode, LeaveOutcome, Navigation, RendezvousForm, ViewAction};
pub use literals::Literals;
