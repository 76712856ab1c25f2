pub mod framing;
pub mod orbit;
