mod extract;
mod requests;
mod responses;

pub use extract::Payload;
pub use requests::*;
pub use responses::*;
