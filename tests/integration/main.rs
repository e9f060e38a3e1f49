mod helpers;
mod test_comments;
mod test_likes;
mod test_users;
