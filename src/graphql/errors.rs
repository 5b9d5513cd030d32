use async_graphql::ErrorExtensions;

use crate::db::error::StoreError;

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
        })
    }
}
