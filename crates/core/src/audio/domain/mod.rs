pub mod normalized_wav;
pub mod transcoder;
