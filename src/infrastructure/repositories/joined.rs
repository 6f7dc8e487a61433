// src/infrastructure/repositories/joined.rs
use super::corrupt;
use crate::domain::author::{AuthorId, AuthorRef, display_name};
use crate::domain::category::{CategoryId, CategoryRef};
use crate::domain::common::Slug;
use crate::domain::errors::DomainResult;
use sqlx::FromRow;

/// Author and category columns selected alongside articles and vlogs.
pub(super) const REF_COLUMNS: &str = "au.username AS author_username, \
     au.first_name AS author_first_name, au.last_name AS author_last_name, \
     c.name AS category_name, c.slug AS category_slug";

#[derive(Debug, FromRow)]
pub(super) struct RefColumns {
    author_username: String,
    author_first_name: String,
    author_last_name: String,
    category_name: String,
    category_slug: String,
}

impl RefColumns {
    pub(super) fn into_refs(
        self,
        author_id: AuthorId,
        category_id: CategoryId,
    ) -> DomainResult<(AuthorRef, CategoryRef)> {
        let author = AuthorRef {
            id: author_id,
            display_name: display_name(
                &self.author_first_name,
                &self.author_last_name,
                &self.author_username,
            ),
            username: self.author_username,
        };
        let category = CategoryRef {
            id: category_id,
            name: self.category_name,
            slug: Slug::new(self.category_slug).map_err(corrupt)?,
        };
        Ok((author, category))
    }
}

/// `%term%` for ILIKE with the wildcard characters of `term` escaped.
pub(super) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub(super) fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn wildcards_in_terms_are_literal() {
        assert_eq!(like_pattern("ramen"), "%ramen%");
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
    }
}
