use std::pin::pin;

use futures::{future, TryStreamExt};
use octocrab::Page;
use serde::de::DeserializeOwned;

use crate::error::Result;

pub(crate) trait PageExt<I>
where
    I: DeserializeOwned + 'static,
{
    /// First item matching `pred`, in API order. Later pages are only fetched while nothing matched.
    async fn find<F: Fn(&I) -> bool>(
        self,
        github_api: &octocrab::Octocrab,
        pred: F,
    ) -> Result<Option<I>>;
}

impl<I> PageExt<I> for Page<I>
where
    I: DeserializeOwned + 'static,
{
    async fn find<F: Fn(&I) -> bool>(
        self,
        github_api: &octocrab::Octocrab,
        pred: F,
    ) -> Result<Option<I>> {
        let items = pin!(self.into_stream(github_api));
        Ok(items
            .try_filter(|item| future::ready(pred(item)))
            .try_next()
            .await?)
    }
}
