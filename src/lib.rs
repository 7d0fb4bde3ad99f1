mod error;
mod stemmers;

pub use error::UnknownLanguage;
pub use stemmers::{
    danish_stemmer, dutch_stemmer, english_stemmer, finnish_stemmer, french_stemmer,
    german_stemmer, italian_stemmer, norwegian_stemmer, portuguese_stemmer, romanian_stemmer,
    spanish_stemmer, swedish_stemmer, Language, Regions, Stemmer, StemmerBuilder, Stems,
    StemsIteratorExt,
};
