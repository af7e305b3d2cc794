// src/types/mod.rs

pub mod entities;
pub mod envelope;

pub use entities::{
    Candidate, CandidateRef, Enterprise, Job, NamedRef, Plan, Sale, SignupRequest,
    VerificationStatus, VideoCv,
};
pub use envelope::{normalize_item, normalize_list};
