use async_graphql::{EmptySubscription, Schema};

use crate::db::store::Store;
use crate::graphql::graph::QueryRoot;
use crate::graphql::mutation::MutationRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(store: Store) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store) // ✅ Add the Store to the schema's context
        .finish()
}
