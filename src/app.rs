use crate::api::HttpActivityApi;
use crate::config::Config;
use crate::errors::Result;
use crate::handlers::ViewSynchronizer;

pub fn synchronizer(config: &Config) -> Result<ViewSynchronizer<HttpActivityApi>> {
    Ok(ViewSynchronizer::new(HttpActivityApi::new(&config.base_url)?))
}
