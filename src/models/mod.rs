//! Data models module
//!
//! Defines campaign request/response structures and Revcontent wire shapes

pub mod campaign;

pub use campaign::{
    CampaignCreateRequest, CampaignCreateResult, CampaignStats, DateRange,
};
