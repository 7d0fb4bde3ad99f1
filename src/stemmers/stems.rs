use super::Stemmer;

pub struct Stems<'s, I> {
    stemmer: &'s Stemmer,
    inner: I,
}

impl<'s, I> Iterator for Stems<'s, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|word| self.stemmer.stem(word.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub trait StemsIteratorExt<I: Iterator> {
    fn stems(self, stemmer: &Stemmer) -> Stems<'_, I>;
}

impl<I: Iterator> StemsIteratorExt<I> for I
where
    I::Item: AsRef<str>,
{
    fn stems(self, stemmer: &Stemmer) -> Stems<'_, I> {
        Stems {
            stemmer,
            inner: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmers::Language;

    fn stems(stemmer: &Stemmer, words: &str) -> Vec<String> {
        words.split_whitespace().stems(stemmer).collect()
    }

    #[test]
    fn test_stems() {
        let swedish = Stemmer::new(Language::Swedish);

        assert_eq!(
            stems(&swedish, "klockaren bilen 1990"),
            vec!["klock", "bil", "1990"]
        );
        assert_eq!(stems(&swedish, ""), Vec::<String>::new());
        assert_eq!(
            stems(&Stemmer::default(), "abc Def"),
            vec!["abc", "Def"]
        );
    }

    #[test]
    fn test_owned_items() {
        let english = Stemmer::new(Language::English);
        let words = vec!["consigned".to_string(), "kneeling".to_string()];

        let stemmed: Vec<String> = words.into_iter().stems(&english).collect();

        assert_eq!(stemmed, vec!["consign", "kneel"]);
    }
}
