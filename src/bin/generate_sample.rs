//! Generate a deterministic synthetic `mission_launches.csv` for demos and
//! manual pipeline runs. Mirrors the quirks of the real export: a positional
//! index column, comma-grouped prices, missing prices, and the odd
//! unparsable date.

use chrono::NaiveDate;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Grouped decimal rendering, the way the real export writes prices
/// ("1,160" for 1160 million USD).
fn format_price(value: f64) -> String {
    let total_cents = (value * 100.0).round() as i64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if cents > 0 {
        format!("{grouped}.{cents:02}")
    } else {
        grouped
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let orgs: [(&str, f64); 6] = [
        ("SpaceX", 62.0),
        ("CASC", 30.0),
        ("Roscosmos", 65.0),
        ("NASA", 450.0),
        ("ISRO", 21.0),
        ("Arianespace", 177.0),
    ];
    let statuses = ["Success", "Success", "Success", "Failure", "Partial Failure"];
    let rocket_statuses = ["StatusActive", "StatusRetired"];

    let output_path = "mission_launches.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Unnamed: 0",
            "Unnamed: 0.1",
            "Organisation",
            "Date",
            "Price",
            "Mission_Status",
            "Rocket_Status",
        ])
        .expect("Failed to write header");

    let n_rows = 200;
    for row in 0..n_rows {
        let (org, base_price) = *rng.choose(&orgs);

        let date = if rng.next_f64() < 0.02 {
            // A few rows in the real data carry no usable date.
            "TBD".to_string()
        } else {
            let day = NaiveDate::from_ymd_opt(
                1960 + (rng.next_u64() % 61) as i32,
                1 + (rng.next_u64() % 12) as u32,
                1 + (rng.next_u64() % 28) as u32,
            )
            .expect("synthetic date in range")
            .and_hms_opt((rng.next_u64() % 24) as u32, (rng.next_u64() % 60) as u32, 0)
            .expect("synthetic time in range");
            day.format("%a %b %d, %Y %H:%M UTC").to_string()
        };

        let price = if rng.next_f64() < 0.3 {
            // Older launches often have no published cost.
            String::new()
        } else {
            format_price(base_price * (0.5 + rng.next_f64()))
        };

        let idx = row.to_string();
        let status = *rng.choose(&statuses);
        let rocket_status = *rng.choose(&rocket_statuses);
        writer
            .write_record([
                idx.as_str(),
                idx.as_str(),
                org,
                date.as_str(),
                price.as_str(),
                status,
                rocket_status,
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {n_rows} launches to {output_path}");
}
