use std::fs::File;

use clap::Parser;
use souche::stem;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    /// Path to target CSV file
    #[arg(long)]
    path: Option<String>,

    /// Index of the CSV column holding the words to stem
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Words to stem
    words: Vec<String>,
}

fn field_as_word(field: Option<&[u8]>, column: usize) -> anyhow::Result<&str> {
    let field =
        field.ok_or_else(|| anyhow::anyhow!("column {} is out of range for this row", column))?;

    Ok(std::str::from_utf8(field)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.path {
        let file = File::open(path)?;
        let mut reader = simd_csv::Reader::from_reader(file);
        let mut writer = simd_csv::Writer::from_writer(std::io::stdout());

        let mut record = reader.byte_headers()?.clone();
        record.push_field(b"stem");

        writer.write_byte_record(&record)?;

        while reader.read_byte_record(&mut record)? {
            let word = field_as_word(record.get(args.column), args.column)?;
            let stemmed = stem(word);
            record.push_field(stemmed.as_bytes());

            writer.write_byte_record(&record)?;
        }

        writer.flush()?;
    } else {
        for word in args.words {
            println!("{} => {}", &word, stem(&word));
        }
    }

    Ok(())
}
