//! Reach estimates for targeting criteria.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::resources::v0::Account;
use crate::rest::{build_path, Params, Request, Resource, ResourceError};

const REACH_ESTIMATE_PATH: &str = "/0/accounts/{account_id}/reach_estimate";

/// Estimated audience reach for a product type and objective.
///
/// Not a resource: the endpoint returns a one-off computation, which is
/// handed back as raw JSON.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_ads::rest::Params;
/// use twitter_ads::rest::resources::ReachEstimate;
///
/// let estimate = ReachEstimate::fetch(
///     &account,
///     "PROMOTED_TWEETS",
///     "WEBSITE_CLICKS",
///     "756201191646691328",
///     Params::new().set("bid_amount_local_micro", 1_500_000),
/// )?;
/// println!("{}", estimate["count"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReachEstimate;

impl ReachEstimate {
    /// Fetches a reach estimate for `account`.
    ///
    /// `product_type`, `objective` and `user_id` are always sent; a
    /// caller-supplied value for any of these keys in `params` takes
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`] if `account` has not
    /// been loaded, or the request failure.
    pub fn fetch(
        account: &Account,
        product_type: &str,
        objective: &str,
        user_id: &str,
        params: Params,
    ) -> Result<Value, ResourceError> {
        let account_id = account.loaded_id("reach_estimate")?;
        let mut ids = BTreeMap::new();
        ids.insert("account_id", urlencoding::encode(&account_id).into_owned());
        let path = build_path(REACH_ESTIMATE_PATH, &ids);

        let defaults = Params::new()
            .set("product_type", product_type)
            .set("objective", objective)
            .set("user_id", user_id);
        let params = params.merged_over(defaults);

        let response =
            Request::new(account.context().client(), HttpMethod::Get, path, params).perform()?;
        Ok(response.into_data())
    }
}
