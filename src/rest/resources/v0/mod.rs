//! Resources for version 0 of the Ads API.
//!
//! # Available Resources
//!
//! - [`Account`] - The advertiser account; root of most other resources
//! - [`Campaign`] - A campaign, with [`CampaignListParams`] for listing
//! - [`LineItem`] - Bidding and placement settings under a campaign
//! - [`FundingInstrument`] - Pays for campaigns (read-only)
//! - [`PromotableUser`] - A user the account may promote
//! - [`AppList`] - A list of mobile apps for targeting
//! - [`TailoredAudience`] - An advertiser-supplied audience
//! - [`Video`] - An uploaded video
//! - [`ReachEstimate`] - Estimated reach for targeting criteria
//!
//! Everything except [`Account`] is nested under
//! `/0/accounts/{account_id}` and is reached through the account's
//! accessors or a [`Context`](crate::rest::Context) carrying `account_id`.

mod account;
mod app_list;
mod campaign;
mod funding_instrument;
mod line_item;
mod promotable_user;
mod reach_estimate;
mod tailored_audience;
mod video;

pub use account::{Account, AccountListParams, ACCOUNT_SCHEMA};
pub use app_list::{AppList, APP_LIST_SCHEMA};
pub use campaign::{Campaign, CampaignListParams, CAMPAIGN_SCHEMA};
pub use funding_instrument::{FundingInstrument, FUNDING_INSTRUMENT_SCHEMA};
pub use line_item::{LineItem, LINE_ITEM_SCHEMA};
pub use promotable_user::{PromotableUser, PROMOTABLE_USER_SCHEMA};
pub use reach_estimate::ReachEstimate;
pub use tailored_audience::{TailoredAudience, TAILORED_AUDIENCE_SCHEMA};
pub use video::{Video, VIDEO_SCHEMA};
