use crate::db::models::comment::Comment;
use crate::db::models::post::Post;
use crate::db::models::user::User;
use crate::db::store::Collections;

fn user(id: &str, name: &str, email: &str, age: Option<i32>) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        age,
    }
}

fn post(id: &str, title: &str, body: &str, is_published: bool, author: &str) -> Post {
    Post {
        id: id.into(),
        title: title.into(),
        body: body.into(),
        is_published,
        author: author.into(),
    }
}

fn comment(id: &str, text: &str, author: &str, post: &str) -> Comment {
    Comment {
        id: id.into(),
        text: text.into(),
        author: author.into(),
        post: post.into(),
    }
}

/// Demo records loaded at startup when `SEED_DATA` is on.
pub fn demo_collections() -> Collections {
    Collections {
        users: vec![
            user("1", "Matt", "matt@mail.com", Some(36)),
            user("2", "Sarah", "sarah@mail.com", None),
            user("3", "Mike", "mike@mail.com", None),
        ],
        posts: vec![
            post("10", "New Car!", "I just bought a new car!", true, "1"),
            post("11", "Getting Jiggy", "Check out my dance moves!", true, "1"),
            post("12", "Taking a Udemy Class", "", false, "2"),
        ],
        comments: vec![
            comment("ab1", "Love this post man!  Good stuff!", "1", "10"),
            comment("bc2", "Nice moves man!", "1", "11"),
            comment("cd3", "I'm learning a lot in this class", "2", "12"),
            comment("de4", "My stomach is upset. :(", "3", "11"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_references_resolve() {
        let data = demo_collections();
        let user_ids: HashSet<&str> = data.users.iter().map(|u| u.id.as_str()).collect();
        let post_ids: HashSet<&str> = data.posts.iter().map(|p| p.id.as_str()).collect();

        assert!(data.posts.iter().all(|p| user_ids.contains(p.author.as_str())));
        assert!(data.comments.iter().all(|c| user_ids.contains(c.author.as_str())));
        assert!(data.comments.iter().all(|c| post_ids.contains(c.post.as_str())));
    }

    #[test]
    fn seed_emails_are_unique() {
        let data = demo_collections();
        let emails: HashSet<&str> = data.users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), data.users.len());
    }
}
