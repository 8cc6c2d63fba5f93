//! Actions on a recipe's own page: favoriting and deleting.

pub const DELETE_PROMPT: &str = "Delete this recipe?";

pub fn favorite_label(favorited: bool) -> &'static str {
    if favorited {
        "★ Favorited"
    } else {
        "☆ Favorite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_label() {
        assert_eq!(favorite_label(true), "★ Favorited");
        assert_eq!(favorite_label(false), "☆ Favorite");
    }
}
