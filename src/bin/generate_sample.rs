use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a reproducible corpus of fake annual-report extractions.
#[derive(Parser, Debug)]
#[command(name = "generate-sample")]
struct Args {
    /// Directory to write the `.txt` files into
    #[arg(default_value = "sample_reports")]
    out_dir: PathBuf,

    /// Number of reports
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Pages per report
    #[arg(short, long, default_value_t = 12)]
    pages: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const COMPANIES: &[&str] = &[
    "Acme Holdings plc",
    "Northwind Group",
    "Harbour Line Shipping",
    "Blue Ridge Utilities",
    "Kestrel Mining Corp",
];

const HEADINGS: &[&str] = &[
    "CHAIRMAN'S STATEMENT",
    "Strategic Report",
    "FINANCIAL REVIEW",
    "Risk Management",
    "CORPORATE GOVERNANCE",
    "Directors' Remuneration Report",
    "CONSOLIDATED INCOME STATEMENT",
    "Notes to the Financial Statements",
];

const SENTENCES: &[&str] = &[
    "Revenue grew steadily despite weaker demand in the second half.",
    "We opened three new distribution centres during the year.",
    "Operating margin improved as input prices eased.",
    "The board proposes a final dividend of 4.2 pence per share.",
    "Net debt fell following the disposal of the coatings division.",
    "Employee engagement scores rose for the third consecutive year.",
    "Capital expenditure was focused on automation and energy efficiency.",
    "Customer churn remained below our long-term target.",
    "We continue to monitor exposure to currency movements closely.",
    "Our pension scheme remains in surplus on a funding basis.",
];

/// splitmix64: small, deterministic, good enough for fake text.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

fn generate_report(rng: &mut SimpleRng, company: &str, year: u32, pages: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    for page in 1..=pages {
        if rng.below(3) == 0 {
            lines.push(rng.pick(HEADINGS).to_string());
        }
        for _ in 0..2 + rng.below(4) {
            lines.push(rng.pick(SENTENCES).to_string());
        }

        // Running footer, in one of three shapes seen in PDF extractions.
        match rng.below(3) {
            0 => lines.push(page.to_string()),
            1 => {
                lines.push(company.to_string());
                lines.push(format!(" {page} "));
                lines.push(format!("www.{}.com", company_slug(company)));
            }
            _ => {
                lines.push(format!("{company} Annual Report {year}"));
                lines.push(page.to_string());
            }
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn company_slug(company: &str) -> String {
    company
        .split_whitespace()
        .next()
        .unwrap_or("company")
        .to_ascii_lowercase()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng(args.seed);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for i in 0..args.count {
        let company = COMPANIES[i % COMPANIES.len()];
        let year = 2019 + (i / COMPANIES.len()) as u32;
        let text = generate_report(&mut rng, company, year, args.pages);

        let name = format!("{}_{year}.txt", company_slug(company));
        let path = args.out_dir.join(name);
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "Wrote {} report(s) of {} pages to {}",
        args.count,
        args.pages,
        args.out_dir.display()
    );
    Ok(())
}
