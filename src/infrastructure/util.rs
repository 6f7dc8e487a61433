use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_accents() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Café Crawl: Top 10!"), "cafe-crawl-top-10");
        assert_eq!(slugger.slugify("!!!"), "");
    }
}
