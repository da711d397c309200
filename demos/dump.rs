//! Dump the decoded contents of a finger image record.
//!
//! Builds a representative transaction in memory (the binary tokenizer is
//! external to this crate) and prints everything the views expose.

use an2k_view::record::{fields, Field, Item, Record, RecordKind, Subfield, Transaction};
use an2k_view::{CaptureView, LatentView};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Dump a decoded AN2K finger image record")]
struct Args {
    /// Dump the sample Type-13 latent record instead of the Type-14 capture
    #[arg(long)]
    latent: bool,
}

fn sample_transaction() -> Transaction {
    let type1 = Record::new(
        RecordKind::Type1,
        vec![
            Field::text(fields::IDC, "0"),
            Field::text(fields::NSR, "19.69"),
        ],
    );
    let type14 = Record::new(
        RecordKind::Type14,
        vec![
            Field::text(fields::IDC, "1"),
            Field::text(fields::IMP, "0"),
            Field::text(fields::SRC, "MDNISTIMG"),
            Field::text(fields::CD, "20090728"),
            Field::text(fields::HLL, "800"),
            Field::text(fields::VLL, "750"),
            Field::text(fields::SLC, "1"),
            Field::text(fields::HPS, "500"),
            Field::text(fields::VPS, "500"),
            Field::text(fields::TAG_CA, "WSQ20"),
            Field::text(fields::BPX, "8"),
            Field::new(fields::FGP, vec![Subfield::from_texts(&["13"])]),
            Field::text(fields::COM, "right slap"),
            Field::new(
                fields::SEG,
                vec![
                    Subfield::from_texts(&["2", "10", "110", "20", "220"]),
                    Subfield::from_texts(&["3", "120", "230", "20", "220"]),
                ],
            ),
            Field::new(
                fields::NQM,
                vec![
                    Subfield::from_texts(&["2", "61"]),
                    Subfield::from_texts(&["3", "55"]),
                ],
            ),
            Field::new(
                fields::DAT2,
                vec![Subfield::new(vec![Item::new(vec![0u8; 64])])],
            ),
            Field::new(200, vec![Subfield::from_texts(&["case", "1844-B"])]),
        ],
    );
    let type13 = Record::new(
        RecordKind::Type13,
        vec![
            Field::text(fields::IDC, "2"),
            Field::text(fields::IMP, "4"),
            Field::text(fields::SRC, "MDNISTIMG"),
            Field::text(fields::CD, "20090728"),
            Field::text(fields::HLL, "600"),
            Field::text(fields::VLL, "600"),
            Field::text(fields::SLC, "1"),
            Field::text(fields::HPS, "1000"),
            Field::text(fields::VPS, "1000"),
            Field::text(fields::TAG_CA, "NONE"),
            Field::text(fields::BPX, "8"),
            Field::new(fields::FGP, vec![Subfield::from_texts(&["0"])]),
            Field::new(
                fields::LQM_FQM,
                vec![Subfield::from_texts(&["0", "44", "18", "2"])],
            ),
            Field::new(
                fields::DAT2,
                vec![Subfield::new(vec![Item::new(vec![0u8; 64])])],
            ),
        ],
    );
    Transaction::new(vec![type1, type14, type13])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let transaction = sample_transaction();

    if args.latent {
        let view = LatentView::from_transaction(&transaction, 1)?;
        println!("Latent record");
        println!("  source agency: {}", view.source_agency());
        println!("  capture date:  {}", view.capture_date());
        println!("  impression:    {}", view.impression_type());
        for position in view.positions() {
            println!("  position:      {position}");
        }
        for metric in view.latent_quality_metric() {
            println!("  quality:       {metric}");
        }
    } else {
        let mut view = CaptureView::from_transaction(&transaction, 1)?;
        println!("Capture record");
        println!("  source agency: {}", view.source_agency());
        println!("  capture date:  {}", view.capture_date());
        println!("  comment:       {}", view.comment());
        println!("  impression:    {}", view.impression_type());
        for position in view.positions() {
            println!("  position:      {position}");
        }
        println!("  amp/bandaged:  {}", view.amputated_bandaged());
        for segment in view.finger_segment_positions() {
            println!("  segment:       {segment}");
        }
        for metric in view.national_quality_metric() {
            println!("  nqm:           {metric}");
        }
        let udf = view.user_defined_field(200)?;
        println!("  field 200:     {} bytes", udf.len());
    }
    Ok(())
}
