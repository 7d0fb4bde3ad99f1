use std::fs::File;

use clap::Parser;
use stemmata::{Language, Stemmer, StemmerBuilder};

#[derive(Parser, Debug)]
struct Args {
    /// Language code or name of the stemmer
    #[arg(long, default_value = "en")]
    lang: String,

    /// Keep the casing of the input words
    #[arg(long)]
    preserve_case: bool,

    /// Path to target CSV file, whose first column holds the words
    #[arg(long)]
    path: Option<String>,

    /// Words to stem
    word: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let stemmer = match args.lang.parse::<Language>() {
        Ok(language) => StemmerBuilder::new(language)
            .preserve_case(args.preserve_case)
            .build(),
        Err(_) => Stemmer::for_code(&args.lang),
    };

    if let Some(path) = &args.path {
        let file = File::open(path)?;
        let mut reader = simd_csv::Reader::from_reader(file);
        let mut writer = simd_csv::Writer::from_writer(std::io::stdout());

        let mut record = reader.byte_headers()?.clone();
        record.push_field(b"stem");

        writer.write_byte_record(&record)?;

        while reader.read_byte_record(&mut record)? {
            let stem = stemmer.stem(std::str::from_utf8(&record[0])?);
            record.push_field(stem.as_bytes());

            writer.write_byte_record(&record)?;
        }

        writer.flush()?;
    } else {
        for word in args.word {
            println!("{} => {}", &word, stemmer.stem(&word));
        }
    }

    Ok(())
}
