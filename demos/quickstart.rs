use chrono::Utc;
use deeptime::{ParserChain, ParserOptions, Precision, TimeValue};

fn main() {
    let chain = ParserChain::default();
    let options = ParserOptions::default();

    for input in [
        "+2013-07-16T00:00:00Z",
        "31.12.2015",
        "January 1583",
        "44 BC",
        "-1 000 000",
        "12 12 12",
    ] {
        match chain.parse(input, &options) {
            Ok(value) => println!(
                "{input:>24} → {value} ({}, {}) bounds {}",
                value.precision(),
                value.calendar_model(),
                value.bounds()
            ),
            Err(err) => println!("{input:>24} → {err}"),
        }
    }

    let now = TimeValue::from_utc(Utc::now()).with_precision(Precision::Day);
    println!("today: {now}, {:.5} days covered", now.bounds().duration_days().value());
}
