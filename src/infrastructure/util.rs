use crate::domain::article::services::SlugGenerator;
use slug::slugify;
use uuid::Uuid;

const SUFFIX_LEN: usize = 6;

/// Slugifies the title and appends a short random suffix so that articles
/// with the same title get distinct slugs.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let base = slugify(input);
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(SUFFIX_LEN).collect();
        if base.is_empty() {
            suffix
        } else {
            format!("{base}-{suffix}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_disambiguator() {
        let slug = DefaultSlugGenerator.slugify("Hello, World!");
        let (base, suffix) = slug.rsplit_once('-').unwrap();
        assert_eq!(base, "hello-world");
        assert_eq!(suffix.len(), SUFFIX_LEN);
    }

    #[test]
    fn same_title_yields_distinct_slugs() {
        let a = DefaultSlugGenerator.slugify("Same");
        let b = DefaultSlugGenerator.slugify("Same");
        assert_ne!(a, b);
    }
}
