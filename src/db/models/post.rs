use serde::{Deserialize, Serialize};

/// ✅ **Post Stored In Memory**
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String, // May be empty
    pub is_published: bool,
    pub author: String, // ✅ User.id
}

/// ✅ **New Post (createPost arguments)**
#[derive(Deserialize, Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub is_published: bool,
    pub author: String,
}

impl NewPost {
    pub fn into_post(self, id: String) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            is_published: self.is_published,
            author: self.author,
        }
    }
}
