use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String, // User.id
    pub post: String,   // Post.id
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub author: String,
    pub post: String,
}

impl NewComment {
    pub fn into_comment(self, id: String) -> Comment {
        Comment {
            id,
            text: self.text,
            author: self.author,
            post: self.post,
        }
    }
}
